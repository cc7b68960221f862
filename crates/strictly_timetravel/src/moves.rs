//! Move list over the recorded history.

use super::history::History;
use super::position::Coords;
use super::snapshot::BoardSnapshot;
use derive_getters::Getters;
use serde::Serialize;
use std::iter::FusedIterator;

/// One navigable entry in the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MoveEntry {
    /// History index to pass to `jump_to`.
    step: usize,
    /// "Go to game start" or "Go to move #i".
    label: String,
    /// Cell changed by this step; `None` at game start.
    coords: Option<Coords>,
    /// Set on the most recent snapshot only.
    is_latest: bool,
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.coords {
            Some(coords) => write!(f, "{} {}", self.label, coords),
            None => write!(f, "{}", self.label),
        }
    }
}

/// Lazy iterator over the history, one [`MoveEntry`] per snapshot.
///
/// Clone it to walk the list again from where the clone was taken.
#[derive(Debug, Clone)]
pub struct MoveList<'a> {
    snapshots: &'a [BoardSnapshot],
    latest_step: usize,
    next: usize,
}

impl<'a> MoveList<'a> {
    pub(crate) fn new(history: &'a History) -> Self {
        Self {
            snapshots: history.snapshots(),
            latest_step: history.latest_step(),
            next: 0,
        }
    }
}

impl Iterator for MoveList<'_> {
    type Item = MoveEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.next;
        let snapshot = self.snapshots.get(step)?;
        self.next += 1;

        let label = if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        };

        Some(MoveEntry {
            step,
            label,
            coords: snapshot.move_coords(),
            is_latest: step == self.latest_step,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.snapshots.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveList<'_> {}

impl FusedIterator for MoveList<'_> {}
