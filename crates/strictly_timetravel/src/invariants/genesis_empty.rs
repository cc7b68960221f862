//! The first snapshot is the empty board.

use super::Invariant;
use crate::{Cell, History};

/// Invariant: `snapshots[0]` is all empty and carries no move.
pub struct GenesisEmptyInvariant;

impl Invariant<History> for GenesisEmptyInvariant {
    fn holds(history: &History) -> bool {
        history.snapshots().first().is_some_and(|start| {
            start.last_move().is_none() && start.cells().iter().all(|c| *c == Cell::Empty)
        })
    }

    fn description() -> &'static str {
        "History starts from an empty board with no move"
    }
}
