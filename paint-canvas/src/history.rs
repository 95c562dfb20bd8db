//! Snapshot-based undo/redo history.

use crate::buffer::PixelBuffer;
use crate::error::{PaintError, PaintResult};
use crate::surface::DrawingSurface;
use std::collections::VecDeque;

/// One undoable change, held as the surface contents before and after it.
#[derive(Debug, Clone)]
pub struct Command {
    before: PixelBuffer,
    after: Option<PixelBuffer>,
}

impl Command {
    /// Start a command from the pre-change snapshot.
    pub fn begin(before: PixelBuffer) -> Self {
        Self {
            before,
            after: None,
        }
    }

    /// Record the post-change snapshot.
    pub fn finish(mut self, after: PixelBuffer) -> Self {
        self.after = Some(after);
        self
    }

    pub fn is_complete(&self) -> bool {
        self.after.is_some()
    }

    pub fn before(&self) -> &PixelBuffer {
        &self.before
    }

    pub fn after(&self) -> Option<&PixelBuffer> {
        self.after.as_ref()
    }

    /// Put the after-state back on the surface.
    pub fn apply(&self, surface: &mut DrawingSurface) -> PaintResult<()> {
        let after = self.after.as_ref().ok_or(PaintError::IncompleteCommand)?;
        surface.restore_fitted(after)
    }

    /// Put the before-state back on the surface.
    pub fn invert(&self, surface: &mut DrawingSurface) -> PaintResult<()> {
        surface.restore_fitted(&self.before)
    }
}

/// Bounded undo/redo stacks.
///
/// The undo stack is a ring: once it holds `capacity` commands, pushing
/// another silently drops the oldest.
#[derive(Debug)]
pub struct CommandHistory {
    undo_stack: VecDeque<Command>,
    redo_stack: Vec<Command>,
    capacity: usize,
}

impl CommandHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            undo_stack: VecDeque::with_capacity(capacity),
            redo_stack: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record a completed command. Clears the redo stack.
    pub fn push(&mut self, command: Command) -> PaintResult<()> {
        let Some(after) = command.after() else {
            return Err(PaintError::IncompleteCommand);
        };
        if after.dimensions() != command.before().dimensions() {
            return Err(PaintError::DimensionMismatch {
                expected: command.before().dimensions(),
                actual: after.dimensions(),
            });
        }

        self.undo_stack.push_back(command);
        if self.undo_stack.len() > self.capacity {
            self.undo_stack.pop_front();
            log::debug!(target: "canvas", "history full, dropped oldest command");
        }
        self.redo_stack.clear();
        Ok(())
    }

    /// Revert the most recent command. Returns false when there is nothing to undo.
    pub fn undo(&mut self, surface: &mut DrawingSurface) -> bool {
        let Some(command) = self.undo_stack.pop_back() else {
            return false;
        };
        if let Err(err) = command.invert(surface) {
            log::warn!(target: "canvas", "undo restore failed: {}", err);
        }
        self.redo_stack.push(command);
        true
    }

    /// Reapply the most recently undone command. Returns false when there is nothing to redo.
    pub fn redo(&mut self, surface: &mut DrawingSurface) -> bool {
        let Some(command) = self.redo_stack.pop() else {
            return false;
        };
        if let Err(err) = command.apply(surface) {
            log::warn!(target: "canvas", "redo restore failed: {}", err);
        }
        self.undo_stack.push_back(command);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Drop every recorded command.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
