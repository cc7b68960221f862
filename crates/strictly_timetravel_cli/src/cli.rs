//! Command-line interface for strictly_timetravel.

use clap::{Parser, Subcommand};
use strictly_timetravel::Position;
use tracing::instrument;

/// Strictly Time Travel - drive a tic-tac-toe game with a navigable history
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Tic-tac-toe state machine with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play cells in order and print the result
    Play {
        /// Cells to play, X first: an index (0-8) or a label such as "center"
        #[arg(value_parser = parse_cell)]
        cells: Vec<usize>,

        /// Step to view after playing
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Run a TOML script of moves, jumps and resets
    Script {
        /// Path to the script file
        path: std::path::PathBuf,

        /// Print JSON instead of text (overrides the script)
        #[arg(long)]
        json: bool,
    },
}

/// Parses a cell given as an index (0-8) or a position label.
#[instrument]
pub fn parse_cell(s: &str) -> Result<usize, String> {
    Position::from_label_or_number(s)
        .map(Position::to_index)
        .ok_or_else(|| format!("'{}' is not a cell: use 0-8 or a label like \"top-left\"", s))
}
