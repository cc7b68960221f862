//! Strictly Time Travel - CLI

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_timetravel::GameState;
use strictly_timetravel_cli::{Cli, Command, PlayScript, Report};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let script = match cli.command {
        Command::Play { cells, jump, json } => PlayScript::from_cells(&cells, jump, json),
        Command::Script { path, json } => {
            let script = PlayScript::from_file(&path)?;
            if json {
                PlayScript::new(script.name().clone(), true, script.actions().clone())
            } else {
                script
            }
        }
    };

    run(&script)
}

/// Runs a script from a fresh game and prints the final view.
#[instrument(skip(script), fields(name = %script.name()))]
fn run(script: &PlayScript) -> Result<()> {
    let mut game = GameState::new();
    script.run(&mut game)?;
    info!(step = game.step_number(), status = %game.status(), "Script finished");

    let report = Report::capture(&game);
    if *script.json() {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}
