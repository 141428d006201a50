//! Snapshot-based undo/redo history

use crate::core::error::PlannerError;
use std::collections::VecDeque;

/// Stack of committed states with a movable pointer
///
/// `commit` drops every state after the pointer before appending, so a new
/// change always discards what could have been redone. An optional limit
/// caps how many undo steps are kept; the oldest states are evicted first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History<T> {
    snapshots: VecDeque<T>,
    pointer: usize,
    limit: Option<usize>,
}

impl<T: Clone> History<T> {
    /// Start a history whose only state is `initial`
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            snapshots: VecDeque::from([initial]),
            pointer: 0,
            limit: None,
        }
    }

    /// Start a history that keeps at most `limit` undo steps (0 means unbounded)
    #[must_use]
    pub fn with_limit(initial: T, limit: usize) -> Self {
        Self {
            limit: (limit > 0).then_some(limit),
            ..Self::new(initial)
        }
    }

    /// Record `state` as the newest snapshot, discarding the redo tail
    pub fn commit(&mut self, state: T) {
        self.snapshots.truncate(self.pointer + 1);
        self.snapshots.push_back(state);
        if let Some(limit) = self.limit {
            while self.snapshots.len() > limit + 1 {
                self.snapshots.pop_front();
            }
        }
        self.pointer = self.snapshots.len() - 1;
    }

    /// Step back one snapshot and return it
    ///
    /// # Errors
    /// Returns `PlannerError::NoUndoableState` at the oldest snapshot.
    pub fn undo(&mut self) -> Result<&T, PlannerError> {
        if !self.can_undo() {
            return Err(PlannerError::NoUndoableState);
        }
        self.pointer -= 1;
        Ok(self.current())
    }

    /// Step forward one snapshot and return it
    ///
    /// # Errors
    /// Returns `PlannerError::NoRedoableState` at the newest snapshot.
    pub fn redo(&mut self) -> Result<&T, PlannerError> {
        if !self.can_redo() {
            return Err(PlannerError::NoRedoableState);
        }
        self.pointer += 1;
        Ok(self.current())
    }

    /// Snapshot at the pointer
    #[must_use]
    pub fn current(&self) -> &T {
        &self.snapshots[self.pointer]
    }

    /// Whether an older snapshot exists
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.pointer > 0
    }

    /// Whether a newer snapshot exists
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.pointer + 1 < self.snapshots.len()
    }

    /// Number of undo steps available
    #[must_use]
    pub const fn undo_depth(&self) -> usize {
        self.pointer
    }

    /// Number of redo steps available
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.snapshots.len() - 1 - self.pointer
    }

    /// Number of stored snapshots
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a history holds at least its initial state
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
