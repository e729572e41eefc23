//! Checks applied to a [`GameConfig`] before a game is built.
//!
//! Each rule is a unit type implementing [`ConfigRule`] so it can be tested
//! on its own; [`validate`] runs them in a fixed order and stops at the
//! first failure.

use crate::config::GameConfig;
use crate::error::ConfigurationError;
use crate::player::PlayerType;
use std::collections::HashSet;
use tracing::{instrument, warn};

/// A precondition on game configuration.
pub trait ConfigRule {
    /// Checks the rule.
    fn check(config: &GameConfig) -> Result<(), ConfigurationError>;
}

/// At least two players.
pub struct PlayerCount;

impl ConfigRule for PlayerCount {
    fn check(config: &GameConfig) -> Result<(), ConfigurationError> {
        let count = config.players.len();
        if count <= 1 {
            return Err(ConfigurationError::InvalidPlayerCount { count });
        }
        Ok(())
    }
}

/// Fewer players than the board dimension.
pub struct DimensionAndPlayerCount;

impl ConfigRule for DimensionAndPlayerCount {
    fn check(config: &GameConfig) -> Result<(), ConfigurationError> {
        let players = config.players.len();
        if players >= config.dimension {
            return Err(ConfigurationError::DimensionAndPlayerCountMismatch {
                dimension: config.dimension,
                players,
            });
        }
        Ok(())
    }
}

/// Pairwise-distinct symbols, when enabled.
///
/// Win detection counts by symbol, so two players sharing one would pool
/// their cells.
pub struct UniqueSymbols;

impl ConfigRule for UniqueSymbols {
    fn check(config: &GameConfig) -> Result<(), ConfigurationError> {
        if !config.enforce_unique_symbols {
            return Ok(());
        }
        let mut seen = HashSet::new();
        for player in &config.players {
            if !seen.insert(player.symbol()) {
                return Err(ConfigurationError::DuplicateSymbol {
                    symbol: player.symbol(),
                });
            }
        }
        Ok(())
    }
}

/// At most `max_bots` bots, when a limit is set.
pub struct BotLimit;

impl ConfigRule for BotLimit {
    fn check(config: &GameConfig) -> Result<(), ConfigurationError> {
        let Some(max) = config.max_bots else {
            return Ok(());
        };
        let count = config
            .players
            .iter()
            .filter(|player| player.player_type() == PlayerType::Bot)
            .count();
        if count > max {
            return Err(ConfigurationError::TooManyBots { count, max });
        }
        Ok(())
    }
}

/// Runs every rule.
#[instrument(skip(config), fields(dimension = config.dimension, players = config.players.len()))]
pub fn validate(config: &GameConfig) -> Result<(), ConfigurationError> {
    let result = PlayerCount::check(config)
        .and_then(|()| DimensionAndPlayerCount::check(config))
        .and_then(|()| UniqueSymbols::check(config))
        .and_then(|()| BotLimit::check(config));
    if let Err(e) = &result {
        warn!(error = %e, "Game configuration rejected");
    }
    result
}
