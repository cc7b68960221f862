//! Text and JSON views of a game.

use serde::Serialize;
use strictly_timetravel::{BoardSnapshot, GameState, MoveEntry, Outcome};
use tracing::instrument;

/// Everything a presentation layer reads after an action.
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    /// Status line.
    pub status: String,
    /// Viewed step.
    pub step: usize,
    /// Viewed snapshot.
    pub snapshot: &'a BoardSnapshot,
    /// Win or draw on the viewed board.
    pub outcome: Option<Outcome>,
    /// Navigable history.
    pub moves: Vec<MoveEntry>,
}

impl<'a> Report<'a> {
    /// Captures the current view of `game`.
    #[instrument(skip(game))]
    pub fn capture(game: &'a GameState) -> Self {
        Self {
            status: game.status().to_string(),
            step: game.step_number(),
            snapshot: game.current_snapshot(),
            outcome: game.outcome(),
            moves: game.move_list().collect(),
        }
    }

    /// Renders the board, status and move list as plain text.
    ///
    /// The latest entry's coordinates are wrapped in `**`, and `<` marks the
    /// viewed step.
    pub fn to_text(&self) -> String {
        let mut out = self.snapshot.board().display();
        out.push_str("\n\n");
        out.push_str(&self.status);
        out.push('\n');
        if self.outcome.is_some_and(|o| o.is_draw()) {
            out.push_str("Draw\n");
        }
        for entry in &self.moves {
            out.push_str(&format!("{:>2}. {}", entry.step(), entry.label()));
            if let Some(coords) = entry.coords() {
                if *entry.is_latest() {
                    out.push_str(&format!(" **{}**", coords));
                } else {
                    out.push_str(&format!(" {}", coords));
                }
            }
            if *entry.step() == self.step {
                out.push_str(" <");
            }
            out.push('\n');
        }
        out
    }

    /// Renders the report as pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_marks_latest_and_viewed() {
        let mut game = GameState::replay(&[4, 0]);
        game.jump_to(1);
        let text = Report::capture(&game).to_text();
        assert!(text.starts_with("1|2|3\n-+-+-\n4|X|6"));
        assert!(text.contains("Next player: O"));
        assert!(text.contains(" 0. Go to game start\n"));
        assert!(text.contains(" 1. Go to move #1 (2, 2) <\n"));
        assert!(text.contains(" 2. Go to move #2 **(1, 1)**\n"));
    }

    #[test]
    fn test_text_reports_draw() {
        let game = GameState::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        let text = Report::capture(&game).to_text();
        assert!(text.contains("Draw\n"));
    }

    #[test]
    fn test_json_shape() {
        let game = GameState::replay(&[0, 4, 1, 7, 2]);
        let json = Report::capture(&game).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "Winner: X");
        assert_eq!(value["step"], 5);
        assert_eq!(value["moves"].as_array().map(Vec::len), Some(6));
        assert_eq!(value["moves"][5]["is_latest"], true);
        assert_eq!(value["moves"][5]["coords"]["row"], 1);
    }
}
