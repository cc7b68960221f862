//! The game state machine: move application and time travel.

use super::action::MoveRejection;
use super::history::History;
use super::moves::MoveList;
use super::position::Position;
use super::rules::{detect_winner, is_draw};
use super::snapshot::BoardSnapshot;
use super::status::{Outcome, Status};
use super::types::Mark;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game with a navigable history.
///
/// The only mutable state is the [`History`]. Whose turn it is, the winner
/// and the status line are recomputed from the viewed step on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    history: History,
}

impl GameState {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
        }
    }

    /// Plays `cells` in order from a fresh game.
    ///
    /// Illegal entries are skipped the same way [`apply_move`](Self::apply_move)
    /// skips them.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Self {
        let mut game = Self::new();
        for &cell in cells {
            game.apply_move(cell);
        }
        game
    }

    /// Checks whether a mark may be placed at `cell_index` on the viewed board.
    ///
    /// # Errors
    ///
    /// [`MoveRejection::GameOver`] if the viewed board is already won,
    /// [`MoveRejection::OutOfRange`] or [`MoveRejection::Occupied`] for a bad cell.
    pub fn check_move(&self, cell_index: usize) -> Result<Position, MoveRejection> {
        let board = self.current_snapshot().board();
        if let Some(winner) = detect_winner(board) {
            return Err(MoveRejection::GameOver(winner));
        }
        let position =
            Position::from_index(cell_index).ok_or(MoveRejection::OutOfRange(cell_index))?;
        if !board.is_empty(cell_index) {
            return Err(MoveRejection::Occupied(position));
        }
        Ok(position)
    }

    /// Places the current player's mark at `cell_index`.
    ///
    /// Does nothing if the viewed board is won, the cell is taken, or the index
    /// is off the board. Otherwise every snapshot after the viewed one is
    /// discarded, the new snapshot is appended and becomes the viewed one.
    #[instrument(skip(self), fields(step = self.history.current_step()))]
    pub fn apply_move(&mut self, cell_index: usize) {
        if let Err(rejection) = self.check_move(cell_index) {
            debug!(%rejection, "Ignoring move");
            return;
        }

        let mark = self.current_player();
        let next = match BoardSnapshot::derive(self.current_snapshot(), cell_index, mark) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(%err, "Move passed checks but could not be derived");
                return;
            }
        };

        self.history.branch(next);
        info!(%mark, cell_index, step = self.history.current_step(), "Move applied");

        #[cfg(debug_assertions)]
        self.assert_invariants();
    }

    /// Views the snapshot at `step`.
    ///
    /// Only the pointer moves; no snapshots are added or removed. A step that
    /// was never recorded is a caller error: it is logged and ignored.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        if self.history.seek(step) {
            info!(step, "Jumped");
        } else {
            warn!(step, len = self.history.len(), "Jump to unrecorded step ignored");
        }
    }

    /// Returns to a single empty snapshot.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.history = History::new();
        info!("Game reset");
    }

    /// The viewed snapshot.
    pub fn current_snapshot(&self) -> &BoardSnapshot {
        self.history.current()
    }

    /// Mark to play at the viewed step: X on even steps, O on odd.
    pub fn current_player(&self) -> Mark {
        Mark::to_move_at(self.history.current_step())
    }

    /// Winner on the viewed board, if any.
    pub fn winner(&self) -> Option<Mark> {
        detect_winner(self.current_snapshot().board())
    }

    /// Status line for the viewed board.
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(mark) => Status::Winner(mark),
            None => Status::NextPlayer(self.current_player()),
        }
    }

    /// Win or draw on the viewed board; `None` while play can continue.
    pub fn outcome(&self) -> Option<Outcome> {
        let board = self.current_snapshot().board();
        if let Some(mark) = detect_winner(board) {
            Some(Outcome::Winner(mark))
        } else if is_draw(board) {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Cells that [`apply_move`](Self::apply_move) would accept right now.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.winner().is_some() {
            return Vec::new();
        }
        Position::valid_moves(self.current_snapshot().board())
    }

    /// One entry per recorded snapshot, for jumping around the history.
    pub fn move_list(&self) -> MoveList<'_> {
        MoveList::new(&self.history)
    }

    /// Index of the viewed snapshot.
    pub fn step_number(&self) -> usize {
        self.history.current_step()
    }

    /// The full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        use super::invariants::{HistoryInvariants, InvariantSet};

        if let Err(violations) = HistoryInvariants::check_all(&self.history) {
            for violation in &violations {
                warn!(%violation, "History invariant violated");
            }
            debug_assert!(violations.is_empty(), "History invariants violated");
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
