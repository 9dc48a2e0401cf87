//! Runtime plumbing shared by the demo binaries.
//!
//! This module contains the pieces every entry point needs but no recipe depends on:
//!
//! - **Observability setup**: Initializing tracing and logging
//! - **Configuration**: Reading the demo seed from the environment
//!
//! # Main Components
//!
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure
//! - [`DemoConfig`] - Environment-driven configuration (currently just the RNG seed)

pub mod config;
pub mod tracing;

pub use self::config::*;
pub use self::tracing::*;
