//! X and O alternate by step number.

use super::Invariant;
use crate::{History, Mark};

/// Invariant: the mark placed to produce step `i` is X iff `i` is odd.
pub struct AlternatingMarkInvariant;

impl Invariant<History> for AlternatingMarkInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, snap)| {
                snap.last_move()
                    .is_some_and(|m| m.mark == Mark::to_move_at(step - 1))
            })
    }

    fn description() -> &'static str {
        "Players alternate marks (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameState;
    use crate::invariants::fixtures::forged;

    #[test]
    fn test_empty_history_holds() {
        assert!(AlternatingMarkInvariant::holds(&History::new()));
    }

    #[test]
    fn test_played_game_holds() {
        let game = GameState::replay(&[0, 1, 2, 3, 4]);
        assert!(AlternatingMarkInvariant::holds(game.history()));
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let history = forged(&[(Mark::X, 0), (Mark::X, 4)]);
        assert!(!AlternatingMarkInvariant::holds(&history));
    }

    #[test]
    fn test_o_first_violates() {
        let history = forged(&[(Mark::O, 0)]);
        assert!(!AlternatingMarkInvariant::holds(&history));
    }
}
