//! What the game reports about the viewed snapshot.

use super::types::Mark;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Status line for the viewed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Status {
    /// A line is complete.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// Play continues with this mark.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
}

/// Result of a terminal board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed a line.
    #[display("Player {} wins", _0)]
    Winner(Mark),
    /// Full board, no line.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(Status::Winner(Mark::O).to_string(), "Winner: O");
        assert_eq!(Status::NextPlayer(Mark::X).to_string(), "Next player: X");
    }

    #[test]
    fn test_outcome_accessors() {
        assert!(!Outcome::Winner(Mark::X).is_draw());
        assert!(Outcome::Draw.is_draw());
        assert_eq!(Outcome::Draw.to_string(), "Draw");
    }
}
