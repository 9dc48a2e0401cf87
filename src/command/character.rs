//! The receiver that commands act on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the game grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This position shifted by `(dx, dy)`.
    ///
    /// Coordinates wrap at the `i32` bounds, so offsetting by `(dx, dy)` and then by
    /// `(dx.wrapping_neg(), dy.wrapping_neg())` always lands on the starting position.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A named character that can be moved around the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    position: Position,
}

impl Character {
    /// Creates a character standing at the origin.
    pub fn new(name: impl Into<String>) -> Self {
        Self::at(name, Position::ORIGIN)
    }

    pub fn at(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn move_to(&mut self, position: Position) {
        self.position = position;
    }
}
