//! Singleton: one lazily-created logger for the whole process.

pub mod logger;

pub use logger::*;
