//! Snapshot undo/redo stacks.

use crate::buffer::BgrImage;

/// Undo and redo stacks of full image copies. Both are unbounded.
#[derive(Debug, Clone, Default)]
pub struct SnapshotHistory {
    undo: Vec<BgrImage>,
    redo: Vec<BgrImage>,
}

impl SnapshotHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `snapshot` as the latest undo state. Clears the redo stack.
    pub fn push(&mut self, snapshot: BgrImage) {
        self.undo.push(snapshot);
        self.redo.clear();
    }

    /// Step back: returns the previous state and stores `current` for redo.
    pub fn undo(&mut self, current: &BgrImage) -> Option<BgrImage> {
        let previous = self.undo.pop()?;
        self.redo.push(current.clone());
        Some(previous)
    }

    /// Step forward: returns the next state and stores `current` for undo.
    pub fn redo(&mut self, current: &BgrImage) -> Option<BgrImage> {
        let next = self.redo.pop()?;
        self.undo.push(current.clone());
        Some(next)
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }
}
