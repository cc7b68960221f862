//! Scripted sequences of game actions, loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_timetravel::GameState;
use tracing::{debug, info, instrument};

/// One call into the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Action {
    /// Place the current player's mark.
    Move {
        /// Cell index, 0-8.
        cell: usize,
    },
    /// View a recorded step.
    Jump {
        /// History index.
        step: usize,
    },
    /// Start over.
    Reset,
}

/// A named list of actions.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct PlayScript {
    /// Name shown in logs.
    #[serde(default = "default_name")]
    name: String,

    /// Print the final state as JSON instead of text.
    #[serde(default)]
    json: bool,

    /// Actions, run in order.
    #[serde(default)]
    actions: Vec<Action>,
}

#[instrument]
fn default_name() -> String {
    "script".to_string()
}

impl PlayScript {
    /// Builds a script that plays `cells` and then optionally jumps.
    #[instrument]
    pub fn from_cells(cells: &[usize], jump: Option<usize>, json: bool) -> Self {
        let mut actions: Vec<Action> = cells.iter().map(|&cell| Action::Move { cell }).collect();
        actions.extend(jump.map(|step| Action::Jump { step }));
        Self::new("command line".to_string(), json, actions)
    }

    /// Parses a script from TOML text.
    #[instrument(skip(content))]
    pub fn parse(content: &str) -> Result<Self, ScriptError> {
        toml::from_str(content)
            .map_err(|e| ScriptError::new(format!("Failed to parse script: {}", e)))
    }

    /// Loads a script from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        debug!("Loading script from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScriptError::new(format!("Failed to read script file: {}", e)))?;

        let script = Self::parse(&content)?;
        info!(name = %script.name, actions = script.actions.len(), "Script loaded");
        Ok(script)
    }

    /// Runs every action against `game`.
    ///
    /// Illegal moves are ignored by the game itself. A jump to a step that is
    /// not recorded stops the script with an error, leaving `game` as it was
    /// after the previous action.
    #[instrument(skip(self, game), fields(name = %self.name))]
    pub fn run(&self, game: &mut GameState) -> Result<(), ScriptError> {
        for (index, action) in self.actions.iter().enumerate() {
            debug!(index, ?action, "Running action");
            match *action {
                Action::Move { cell } => game.apply_move(cell),
                Action::Jump { step } => {
                    let len = game.history().len();
                    if step >= len {
                        return Err(ScriptError::new(format!(
                            "Action {}: cannot jump to step {} (history has {} steps)",
                            index + 1,
                            step,
                            len
                        )));
                    }
                    game.jump_to(step);
                }
                Action::Reset => game.reset(),
            }
        }
        Ok(())
    }
}

/// Script loading or execution error.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let script = PlayScript::parse("").unwrap();
        assert_eq!(script.name(), "script");
        assert!(!*script.json());
        assert!(script.actions().is_empty());
    }

    #[test]
    fn test_parse_actions() {
        let script = PlayScript::parse(
            r#"
            name = "demo"
            [[actions]]
            kind = "move"
            cell = 4
            [[actions]]
            kind = "jump"
            step = 0
            [[actions]]
            kind = "reset"
            "#,
        )
        .unwrap();
        assert_eq!(
            script.actions(),
            &vec![
                Action::Move { cell: 4 },
                Action::Jump { step: 0 },
                Action::Reset
            ]
        );
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        let err = PlayScript::parse("[[actions]]\nkind = \"undo\"\n").unwrap_err();
        assert!(err.message.contains("Failed to parse script"));
    }

    #[test]
    fn test_from_cells() {
        let script = PlayScript::from_cells(&[0, 4], Some(1), true);
        assert!(*script.json());
        assert_eq!(
            script.actions(),
            &vec![
                Action::Move { cell: 0 },
                Action::Move { cell: 4 },
                Action::Jump { step: 1 }
            ]
        );
    }

    #[test]
    fn test_run_rejects_unrecorded_jump() {
        let script = PlayScript::from_cells(&[0], Some(5), false);
        let mut game = GameState::new();
        let err = script.run(&mut game).unwrap_err();
        assert!(err.message.contains("cannot jump to step 5"));
        assert_eq!(game.step_number(), 1);
    }

    #[test]
    fn test_error_records_location() {
        let err = ScriptError::new("boom");
        assert!(err.file.ends_with("script.rs"));
        assert!(err.to_string().starts_with("Script error: boom at "));
    }
}
