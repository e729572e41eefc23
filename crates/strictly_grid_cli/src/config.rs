//! Game file: board, rules and roster loaded from TOML.

use crate::console::Console;
use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use std::num::NonZeroUsize;
use std::path::Path;
use strictly_grid::{
    BotDifficulty, BotPlayer, GameConfig, HumanPlayer, Player, WinningStrategyKind,
    default_strategies,
};
use tracing::{debug, info, instrument, warn};

/// Who sits in a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Reads moves from the terminal.
    Human,
    /// Picks moves with a bot playing strategy.
    Bot,
}

/// One `[[players]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerEntry {
    /// Stable identifier.
    id: String,

    /// Display name.
    name: String,

    /// Symbol drawn on claimed cells.
    symbol: char,

    /// Human or bot.
    kind: PlayerKind,

    /// Bot difficulty. Ignored for humans.
    #[serde(default)]
    difficulty: Option<BotDifficulty>,
}

impl PlayerEntry {
    /// Creates a roster entry.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        symbol: char,
        kind: PlayerKind,
        difficulty: Option<BotDifficulty>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            symbol,
            kind,
            difficulty,
        }
    }
}

/// Game file contents.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameFile {
    /// Board side length.
    #[serde(default = "default_dimension")]
    dimension: usize,

    /// Seed for bot randomness. Bots draw from entropy without one.
    #[serde(default)]
    seed: Option<u64>,

    /// Win detection, in evaluation order.
    #[serde(default = "default_winning_strategies")]
    winning_strategies: Vec<WinningStrategyKind>,

    /// Bound on rejected proposals per turn.
    #[serde(default)]
    max_attempts_per_turn: Option<NonZeroUsize>,

    /// Upper limit on bot players.
    #[serde(default)]
    max_bots: Option<usize>,

    /// Players in turn order.
    players: Vec<PlayerEntry>,
}

fn default_dimension() -> usize {
    3
}

fn default_winning_strategies() -> Vec<WinningStrategyKind> {
    default_strategies()
        .iter()
        .filter_map(|strategy| strategy.name().parse().ok())
        .collect()
}

impl GameFile {
    /// Human "Akash" ('X') against medium bot "Botty" ('O') on 3×3.
    pub fn reference() -> Self {
        Self {
            dimension: default_dimension(),
            seed: None,
            winning_strategies: default_winning_strategies(),
            max_attempts_per_turn: None,
            max_bots: None,
            players: vec![
                PlayerEntry::new("11", "Akash", 'X', PlayerKind::Human, None),
                PlayerEntry::new(
                    "12",
                    "Botty",
                    'O',
                    PlayerKind::Bot,
                    Some(BotDifficulty::Medium),
                ),
            ],
        }
    }

    /// Loads a game file from TOML.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading game file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read game file: {}", e)))?;

        let file: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse game file: {}", e)))?;

        info!(
            dimension = file.dimension,
            players = file.players.len(),
            "Game file loaded"
        );
        Ok(file)
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, dimension: Option<usize>, seed: Option<u64>) -> Self {
        if let Some(dimension) = dimension {
            self.dimension = dimension;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Builds the players, seating humans at `console`.
    ///
    /// With a seed, the bot in seat `n` draws from `seed + n` so that games
    /// replay exactly. Bots without a difficulty play medium.
    #[instrument(skip_all, fields(players = self.players.len()))]
    pub fn seat_players<R: BufRead + 'static, W: Write + 'static>(
        &self,
        console: &Console<R, W>,
    ) -> Result<Vec<Box<dyn Player>>, ConfigError> {
        self.players
            .iter()
            .enumerate()
            .map(|(seat, entry)| -> Result<Box<dyn Player>, ConfigError> {
                match entry.kind {
                    PlayerKind::Human => {
                        if entry.difficulty.is_some() {
                            warn!(player = %entry.name, "Difficulty ignored for human player");
                        }
                        Ok(Box::new(HumanPlayer::new(
                            entry.id.clone(),
                            entry.name.clone(),
                            entry.symbol,
                            console.source(),
                        )))
                    }
                    PlayerKind::Bot => {
                        let rng = match self.seed {
                            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(seat as u64)),
                            None => StdRng::from_entropy(),
                        };
                        let bot = BotPlayer::new(
                            entry.id.clone(),
                            entry.name.clone(),
                            entry.symbol,
                            entry.difficulty.unwrap_or(BotDifficulty::Medium),
                            rng,
                        )
                        .map_err(|e| ConfigError::new(format!("Player '{}': {}", entry.name, e)))?;
                        Ok(Box::new(bot))
                    }
                }
            })
            .collect()
    }

    /// Builds a game configuration, seating humans at `console`.
    ///
    /// Player counts and symbols are checked when the game starts.
    pub fn build<R: BufRead + 'static, W: Write + 'static>(
        &self,
        console: &Console<R, W>,
    ) -> Result<GameConfig, ConfigError> {
        let mut config = GameConfig::new(self.dimension, self.seat_players(console)?)
            .with_winning_strategies(
                self.winning_strategies
                    .iter()
                    .map(|kind| kind.build())
                    .collect(),
            );
        if let Some(attempts) = self.max_attempts_per_turn {
            config = config.with_max_attempts_per_turn(attempts);
        }
        if let Some(max) = self.max_bots {
            config = config.with_max_bots(max);
        }
        Ok(config)
    }

    /// Human-readable description of the board, rules and roster.
    pub fn describe(&self) -> String {
        let strategies = self
            .winning_strategies
            .iter()
            .map(|kind| kind.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let mut lines = vec![format!(
            "{0}x{0} board, winning lines: {1}",
            self.dimension,
            if strategies.is_empty() { "none" } else { strategies.as_str() }
        )];
        for (seat, entry) in self.players.iter().enumerate() {
            let detail = match entry.kind {
                PlayerKind::Human => entry.kind.to_string(),
                PlayerKind::Bot => format!(
                    "{} bot",
                    entry.difficulty.unwrap_or(BotDifficulty::Medium)
                ),
            };
            lines.push(format!(
                "  {}: {} '{}' ({})",
                seat + 1,
                entry.name,
                entry.symbol,
                detail
            ));
        }
        lines.join("\n")
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
