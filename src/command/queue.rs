//! An ordered queue of commands with an execution cursor.

use super::{Character, Command, CommandError};
use tracing::{debug, info};

/// Holds commands in insertion order and remembers how many have been executed.
///
/// Commands before the cursor have been executed; commands from the cursor on are
/// pending. Executing moves the cursor forward, undoing moves it back, so a command
/// that was undone is simply pending again and the next [`execute_next`] re-applies it.
///
/// [`execute_next`]: CommandQueue::execute_next
#[derive(Debug, Default)]
pub struct CommandQueue {
    commands: Vec<Box<dyn Command>>,
    cursor: usize,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a command to the end of the queue without executing it.
    pub fn push<C: Command + 'static>(&mut self, command: C) {
        debug!(command = command.name(), position = self.commands.len(), "Queued");
        self.commands.push(Box::new(command));
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of commands currently applied to the target.
    pub fn executed(&self) -> usize {
        self.cursor
    }

    /// Number of commands waiting to be executed (including undone ones).
    pub fn pending(&self) -> usize {
        self.commands.len() - self.cursor
    }

    /// Executes the next pending command. Returns `Ok(false)` when nothing is pending.
    ///
    /// After an undo this re-applies the command that was undone, i.e. it is also "redo".
    pub fn execute_next(&mut self, target: &mut Character) -> Result<bool, CommandError> {
        let Some(command) = self.commands.get_mut(self.cursor) else {
            return Ok(false);
        };
        command.execute(target)?;
        info!(command = command.name(), character = %target.name, position = %target.position(), "Executed");
        self.cursor += 1;
        Ok(true)
    }

    /// Undoes the most recently executed command. Returns `Ok(false)` when nothing has been executed.
    pub fn undo_last(&mut self, target: &mut Character) -> Result<bool, CommandError> {
        if self.cursor == 0 {
            return Ok(false);
        }
        let command = &mut self.commands[self.cursor - 1];
        command.undo(target)?;
        info!(command = command.name(), character = %target.name, position = %target.position(), "Undone");
        self.cursor -= 1;
        Ok(true)
    }

    /// Executes every pending command in insertion order, returning how many ran.
    pub fn execute_all(&mut self, target: &mut Character) -> Result<usize, CommandError> {
        let mut count = 0;
        while self.execute_next(target)? {
            count += 1;
        }
        Ok(count)
    }

    /// Undoes every executed command in reverse order, returning how many were undone.
    pub fn undo_all(&mut self, target: &mut Character) -> Result<usize, CommandError> {
        let mut count = 0;
        while self.undo_last(target)? {
            count += 1;
        }
        Ok(count)
    }
}
