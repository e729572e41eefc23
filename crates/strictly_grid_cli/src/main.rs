//! Strictly Grid - play N-in-a-row in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use strictly_grid::{GameController, validate};
use strictly_grid_cli::{Cli, Command, Console, GameFile, run};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr and stay quiet by default so they do not interleave
    // with the board.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            config,
            dimension,
            seed,
            no_undo,
            json,
        } => play(config, dimension, seed, !no_undo, json),
        Command::CheckConfig { path } => check_config(&path),
    }
}

/// Play one console game.
#[instrument(skip_all, fields(config = ?config))]
fn play(
    config: Option<PathBuf>,
    dimension: Option<usize>,
    seed: Option<u64>,
    offer_undo: bool,
    json: bool,
) -> Result<()> {
    let game_file = match config {
        Some(path) => GameFile::from_file(&path)?,
        None => GameFile::reference(),
    }
    .with_overrides(dimension, seed);

    let console = Console::new(std::io::stdin().lock(), std::io::stdout());
    let controller = GameController::new();
    let mut game = controller
        .start_game(game_file.build(&console)?)
        .context("Could not start the game")?;

    let summary = run(&controller, &mut game, &console, offer_undo)?;
    if json {
        console.say(&serde_json::to_string_pretty(&summary)?)?;
    } else {
        console.say(&summary.to_string())?;
    }
    Ok(())
}

/// Validate a game file and print its roster.
#[instrument(skip_all, fields(path = %path.display()))]
fn check_config(path: &Path) -> Result<()> {
    let game_file = GameFile::from_file(path)?;
    let console = Console::new(std::io::empty(), std::io::sink());
    validate(&game_file.build(&console)?)
        .with_context(|| format!("{} is not a playable game", path.display()))?;

    info!("Game file is valid");
    println!("{}", game_file.describe());
    Ok(())
}
