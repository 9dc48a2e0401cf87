//! Resource ownership: construct, copy, assign, destroy.
//!
//! [`OwnedCell`] wraps a single heap-allocated integer. Each cell owns exactly one
//! allocation, copies are deep, and every cell is released exactly once when it goes
//! out of scope. Attach a [`ReleaseTracker`] to observe the releases.
//!
//! ```
//! use pattern_recipes::ownership::OwnedCell;
//!
//! let first = OwnedCell::new(10);
//! let mut second = first.clone();
//! second.set(20);
//! assert_eq!(first.get(), 10);
//!
//! let mut third = OwnedCell::new(30);
//! third.clone_from(&second);
//! assert_eq!(third.get(), 20);
//! ```

pub mod cell;
pub mod tracker;

pub use cell::*;
pub use tracker::*;
