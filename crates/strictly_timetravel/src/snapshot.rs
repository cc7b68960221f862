//! Immutable board snapshots.

use super::action::{InvalidMoveError, Move};
use super::position::{Coords, Position};
use super::types::{Board, CELL_COUNT, Cell, Mark};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One board configuration, tagged with the move that produced it.
///
/// Snapshots have no mutating API; the next one is always built with
/// [`BoardSnapshot::derive`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// The board.
    board: Board,
    /// Move that produced this snapshot; `None` for the game start.
    last_move: Option<Move>,
}

impl BoardSnapshot {
    /// The empty board at game start.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Builds the snapshot that follows `previous` once `mark` is placed at
    /// `cell_index`.
    ///
    /// # Errors
    ///
    /// [`InvalidMoveError::OutOfRange`] if `cell_index` is not in 0-8,
    /// [`InvalidMoveError::Occupied`] if the cell already holds a mark.
    #[instrument(skip(previous))]
    pub fn derive(
        previous: &BoardSnapshot,
        cell_index: usize,
        mark: Mark,
    ) -> Result<Self, InvalidMoveError> {
        let position =
            Position::from_index(cell_index).ok_or(InvalidMoveError::OutOfRange(cell_index))?;
        if !previous.board.is_empty(cell_index) {
            return Err(InvalidMoveError::Occupied(position));
        }

        Ok(Self {
            board: previous.board.with_cell(cell_index, Cell::Occupied(mark)),
            last_move: Some(Move::new(mark, position)),
        })
    }

    /// Display coordinates of the changed cell; `None` at game start.
    pub fn move_coords(&self) -> Option<Coords> {
        self.last_move.map(|m| m.coords())
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        self.board.cells()
    }

    /// Builds a snapshot without checking it against any predecessor.
    #[cfg(test)]
    pub(crate) fn forge(board: Board, last_move: Option<Move>) -> Self {
        Self { board, last_move }
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self::initial()
    }
}
