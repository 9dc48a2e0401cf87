//! Command pattern with undo.
//!
//! A [`Command`] is an action object that knows how to apply itself to a
//! [`Character`] and how to take that change back. A [`CommandQueue`] runs a batch of
//! commands in order and unwinds them in reverse.
//!
//! # Architecture Note
//! The target is passed to `execute`/`undo` rather than stored inside the command.
//! That keeps commands free of shared mutable references (`Rc<RefCell<_>>`) and lets the
//! borrow checker see that only one command touches the character at a time.

pub mod actions;
pub mod character;
pub mod error;
pub mod queue;

pub use actions::*;
pub use character::*;
pub use error::*;
pub use queue::*;
