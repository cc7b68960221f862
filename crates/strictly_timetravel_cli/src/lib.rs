//! Scripted driver for the [`strictly_timetravel`] state machine.
//!
//! Stands in for a presentation layer: it feeds moves and jumps into a
//! [`GameState`](strictly_timetravel::GameState) and prints what a UI would show.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod report;
mod script;

pub use cli::{Cli, Command, parse_cell};
pub use report::Report;
pub use script::{Action, PlayScript, ScriptError};
