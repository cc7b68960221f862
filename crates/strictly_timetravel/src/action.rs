//! Moves and the ways they can be refused.

use super::position::{Coords, Position};
use super::types::Mark;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
///
/// Every snapshot after the first records the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("{mark} -> {}", position.label())]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }

    /// Display coordinates of the cell this move changed.
    pub fn coords(&self) -> Coords {
        self.position.coords()
    }
}

/// Raised when a snapshot is derived from an illegal move.
///
/// `GameState` filters illegal moves before deriving snapshots, so this only
/// surfaces through direct use of [`BoardSnapshot::derive`](crate::BoardSnapshot::derive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMoveError {
    /// Cell index outside the board.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// Cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),
}

/// Why a move was refused by the game.
///
/// `apply_move` treats every rejection as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveRejection {
    /// The viewed board already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(Mark),

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Position),

    /// Cell index outside the board.
    #[display("Cell index {} is out of range", _0)]
    OutOfRange(usize),
}

impl From<InvalidMoveError> for MoveRejection {
    fn from(err: InvalidMoveError) -> Self {
        match err {
            InvalidMoveError::OutOfRange(index) => MoveRejection::OutOfRange(index),
            InvalidMoveError::Occupied(position) => MoveRejection::Occupied(position),
        }
    }
}
