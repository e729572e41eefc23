//! Command-line interface for strictly_grid.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Grid - N-in-a-row for humans and bots on an N×N board
#[derive(Parser, Debug)]
#[command(name = "strictly-grid")]
#[command(about = "Play N-in-a-row in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in this terminal
    Play {
        /// Game file (TOML). Without one, a human plays a medium bot on 3×3.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the board dimension
        #[arg(short, long)]
        dimension: Option<usize>,

        /// Seed for bot randomness
        #[arg(short, long)]
        seed: Option<u64>,

        /// Skip the undo prompt after human moves
        #[arg(long)]
        no_undo: bool,

        /// Print the final summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load and validate a game file
    CheckConfig {
        /// Path to the game file
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_flags_parse() {
        let cli = Cli::parse_from([
            "strictly-grid",
            "play",
            "--dimension",
            "5",
            "--seed",
            "42",
            "--no-undo",
        ]);
        match cli.command {
            Command::Play {
                config,
                dimension,
                seed,
                no_undo,
                json,
            } => {
                assert!(config.is_none());
                assert_eq!(dimension, Some(5));
                assert_eq!(seed, Some(42));
                assert!(no_undo);
                assert!(!json);
            }
            other => panic!("Expected play, got {other:?}"),
        }
    }

    #[test]
    fn test_check_config_takes_path() {
        let cli = Cli::parse_from(["strictly-grid", "check-config", "game.toml"]);
        assert!(matches!(
            cli.command,
            Command::CheckConfig { path } if path == PathBuf::from("game.toml")
        ));
    }
}
