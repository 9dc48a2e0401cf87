#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Pattern Recipes
//!
//! > **Classic object-design patterns, written the way Rust writes them.**
//!
//! Each module is a small, self-contained recipe for one pattern. No recipe depends on
//! another; each has a demo binary under `src/bin/` that constructs a few objects, runs
//! a few operations, and prints what happened.
//!
//! ## 🏗️ Design Philosophy
//!
//! The textbook versions of these patterns lean on raw pointers, virtual dispatch and
//! global statics. Every recipe here keeps the *intent* of the pattern and swaps the
//! mechanism for the Rust one:
//!
//! | Pattern              | Textbook mechanism             | Here                                  |
//! |----------------------|--------------------------------|---------------------------------------|
//! | Resource ownership   | copy ctor, `operator=`, dtor   | `Clone`, `Clone::clone_from`, `Drop`  |
//! | Command with undo    | abstract base class            | `trait Command` + `Box<dyn Command>`  |
//! | Factory              | returns base-class pointer     | returns `Box<dyn GameObject>`         |
//! | Extensible factory   | map of function pointers       | map of boxed `Fn` closures            |
//! | Singleton            | function-local static pointer  | `OnceLock` (plus explicit instances)  |
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. Ownership ([`ownership`])
//! [`OwnedCell`](ownership::OwnedCell) owns one heap integer. Copies are deep, assignment
//! reuses the destination's storage, and every cell is released exactly once.
//!
//! ### 2. Command ([`command`])
//! [`Move`](command::Move) and [`Step`](command::Step) act on a
//! [`Character`](command::Character) and know how to undo themselves.
//! [`CommandQueue`](command::CommandQueue) runs them in order and unwinds them in reverse.
//!
//! ### 3. Factories ([`factory`])
//! Three variants of the same idea, from closed to open:
//! [`make_game_object`](factory::make_game_object),
//! [`CountingFactory`](factory::CountingFactory), and the string-keyed
//! [`GameObjectFactory`](factory::GameObjectFactory).
//!
//! ### 4. Singleton ([`singleton`])
//! [`Logger::instance`](singleton::Logger::instance) hands out the one process-wide
//! message log, created on first use.
//!
//! ### 5. Runtime ([`runtime`])
//! Shared plumbing for the demo binaries: [`setup_tracing`](runtime::setup_tracing)
//! and [`DemoConfig`](runtime::DemoConfig).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! cargo run --bin ownership_demo
//! cargo run --bin command_demo
//! cargo run --bin factory_simple
//! cargo run --bin factory_counting
//! cargo run --bin factory_extensible
//! cargo run --bin singleton_demo
//!
//! # Replay a specific sequence of random moves
//! PATTERN_RECIPES_SEED=42 cargo run --bin command_demo
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod command;
pub mod factory;
pub mod ownership;
pub mod runtime;
pub mod singleton;
