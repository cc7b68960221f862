//! Ordered record of snapshots plus the navigation pointer.

use super::snapshot::BoardSnapshot;
use serde::Serialize;
use tracing::{debug, instrument};

/// Snapshots from game start to the furthest move since the last branch.
///
/// `current_step` always indexes an existing snapshot, and
/// `snapshots[0]` is always the empty board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    pub(crate) snapshots: Vec<BoardSnapshot>,
    pub(crate) current_step: usize,
}

impl History {
    /// A history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![BoardSnapshot::initial()],
            current_step: 0,
        }
    }

    /// All recorded snapshots.
    pub fn snapshots(&self) -> &[BoardSnapshot] {
        &self.snapshots
    }

    /// Index of the snapshot being viewed.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Number of recorded snapshots (never zero).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; a history holds at least the game start.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the most recent snapshot.
    pub fn latest_step(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// The snapshot being viewed.
    pub fn current(&self) -> &BoardSnapshot {
        &self.snapshots[self.current_step]
    }

    /// Discards everything after the current step, appends `next`, and moves
    /// the pointer onto it.
    #[instrument(skip(self, next), fields(step = self.current_step, len = self.snapshots.len()))]
    pub(crate) fn branch(&mut self, next: BoardSnapshot) {
        let discarded = self.snapshots.len() - (self.current_step + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future snapshots");
        }
        self.snapshots.truncate(self.current_step + 1);
        self.snapshots.push(next);
        self.current_step = self.snapshots.len() - 1;
    }

    /// Moves the pointer. Returns false, leaving it untouched, if `step` is
    /// not a recorded index.
    pub(crate) fn seek(&mut self, step: usize) -> bool {
        if step < self.snapshots.len() {
            self.current_step = step;
            true
        } else {
            false
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
