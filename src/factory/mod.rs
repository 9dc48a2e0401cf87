//! Factory recipes, from closed to open.
//!
//! All three variants build objects behind the same [`GameObject`] trait from a
//! runtime discriminator:
//!
//! 1. [`simple`]: a free function, [`make_game_object`], matching on [`ObjectType`].
//! 2. [`counting`]: [`CountingFactory`] wraps the same dispatch and counts what it builds.
//! 3. [`registry`]: [`GameObjectFactory`] maps string keys to creation callbacks, so new
//!    types can be added without touching the factory.
//!
//! Failure to resolve a discriminator is always reported as a [`FactoryError`], never
//! as a missing object.

pub mod counting;
pub mod error;
pub mod game_object;
pub mod registry;
pub mod simple;

pub use counting::*;
pub use error::*;
pub use game_object::*;
pub use registry::*;
pub use simple::*;
