//! Concrete commands.
//!
//! Each command captures exactly the state it needs to invert itself: [`Move`] keeps
//! the position it moved the target away from, [`Step`] only needs its own offset.

use super::{Character, CommandError, Position};
use rand::Rng;
use std::fmt::Debug;
use tracing::debug;

/// Side length of the grid random moves are drawn from (`0..GRID_SIZE` on each axis).
pub const GRID_SIZE: i32 = 4;

/// An action that can be applied to a [`Character`] and later inverted.
///
/// # Contract
/// `undo` must restore exactly the state the last `execute` changed, on the same
/// target. Undoing a command with no execution to invert is an error, not a no-op.
pub trait Command: Debug {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    fn execute(&mut self, target: &mut Character) -> Result<(), CommandError>;

    fn undo(&mut self, target: &mut Character) -> Result<(), CommandError>;
}

/// Moves the target to an absolute destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    destination: Position,
    previous: Option<Position>,
}

impl Move {
    pub fn to(destination: Position) -> Self {
        Self {
            destination,
            previous: None,
        }
    }

    /// A move to a random cell of the `GRID_SIZE` x `GRID_SIZE` grid.
    ///
    /// The destination is drawn here, not on execute, so re-executing an undone move
    /// lands on the same cell.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::to(Position::new(
            rng.gen_range(0..GRID_SIZE),
            rng.gen_range(0..GRID_SIZE),
        ))
    }

    pub fn destination(&self) -> Position {
        self.destination
    }
}

impl Command for Move {
    fn name(&self) -> &'static str {
        "move"
    }

    fn execute(&mut self, target: &mut Character) -> Result<(), CommandError> {
        let from = target.position();
        target.move_to(self.destination);
        self.previous = Some(from);
        debug!(command = self.name(), character = %target.name, %from, to = %self.destination, "Move executed");
        Ok(())
    }

    fn undo(&mut self, target: &mut Character) -> Result<(), CommandError> {
        let previous = self
            .previous
            .take()
            .ok_or_else(|| CommandError::NotExecuted(self.name().to_string()))?;
        let from = target.position();
        target.move_to(previous);
        debug!(command = self.name(), character = %target.name, %from, to = %previous, "Move undone");
        Ok(())
    }
}

/// Moves the target by a relative offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    dx: i32,
    dy: i32,
    applied: u32,
}

impl Step {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy, applied: 0 }
    }
}

impl Command for Step {
    fn name(&self) -> &'static str {
        "step"
    }

    fn execute(&mut self, target: &mut Character) -> Result<(), CommandError> {
        target.move_to(target.position().offset(self.dx, self.dy));
        self.applied += 1;
        debug!(command = self.name(), character = %target.name, dx = self.dx, dy = self.dy, "Step executed");
        Ok(())
    }

    fn undo(&mut self, target: &mut Character) -> Result<(), CommandError> {
        if self.applied == 0 {
            return Err(CommandError::NotExecuted(self.name().to_string()));
        }
        target.move_to(
            target
                .position()
                .offset(self.dx.wrapping_neg(), self.dy.wrapping_neg()),
        );
        self.applied -= 1;
        debug!(command = self.name(), character = %target.name, dx = self.dx, dy = self.dy, "Step undone");
        Ok(())
    }
}
