//! Each snapshot differs from its predecessor by one placed mark.

use super::Invariant;
use crate::{Cell, History};

/// Invariant: for every step `i > 0`, exactly one cell went from empty to a
/// mark, and that cell is the one named by the snapshot's move.
pub struct SingleCellDeltaInvariant;

impl Invariant<History> for SingleCellDeltaInvariant {
    fn holds(history: &History) -> bool {
        history.snapshots().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(last) = after.last_move() else {
                return false;
            };

            let mut changed = before
                .cells()
                .iter()
                .zip(after.cells())
                .enumerate()
                .filter(|(_, (b, a))| b != a);

            match (changed.next(), changed.next()) {
                (Some((index, (b, a))), None) => {
                    *b == Cell::Empty
                        && *a == Cell::Occupied(last.mark)
                        && index == last.position.to_index()
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each move fills exactly the one empty cell it names"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invariants::fixtures::forged;
    use crate::{BoardSnapshot, GameState, Mark, Move, Position};

    #[test]
    fn test_played_game_holds() {
        let game = GameState::replay(&[4, 0, 8, 2, 1]);
        assert!(SingleCellDeltaInvariant::holds(game.history()));
    }

    #[test]
    fn test_overwrite_violates() {
        // O overwrites X's cell.
        let history = forged(&[(Mark::X, 4), (Mark::O, 4)]);
        assert!(!SingleCellDeltaInvariant::holds(&history));
    }

    #[test]
    fn test_mislabelled_move_violates() {
        let mut history = forged(&[(Mark::X, 4)]);
        let board = history.snapshots[1].board().clone();
        history.snapshots[1] =
            BoardSnapshot::forge(board, Some(Move::new(Mark::X, Position::TopLeft)));
        assert!(!SingleCellDeltaInvariant::holds(&history));
    }

    #[test]
    fn test_unchanged_board_violates() {
        let mut history = forged(&[(Mark::X, 4)]);
        let repeated = history.snapshots[1].clone();
        history.snapshots.push(repeated);
        assert!(!SingleCellDeltaInvariant::holds(&history));
    }
}
