//! Error types for the command recipe.

use thiserror::Error;

/// Errors that can occur while executing or undoing commands.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    /// `undo` was called on a command that has no execution to invert.
    #[error("Command {0:?} has not been executed")]
    NotExecuted(String),
}
