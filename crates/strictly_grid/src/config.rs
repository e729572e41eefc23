//! Game configuration.

use crate::player::Player;
use crate::rules::{WinningStrategy, default_strategies};
use derive_setters::Setters;
use std::num::NonZeroUsize;

/// Everything needed to start a game.
///
/// Players take turns in the order given. Winning strategies are consulted
/// in the order given and the first to report a win decides the game.
#[derive(Debug, Setters)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Board side length.
    #[setters(skip)]
    pub dimension: usize,

    /// Players in turn order.
    #[setters(skip)]
    pub players: Vec<Box<dyn Player>>,

    /// Win detection, in evaluation order.
    pub winning_strategies: Vec<Box<dyn WinningStrategy>>,

    /// Bound on rejected proposals per turn. `None` asks until a valid move
    /// arrives.
    #[setters(strip_option)]
    pub max_attempts_per_turn: Option<NonZeroUsize>,

    /// Reject player lists that reuse a symbol.
    pub enforce_unique_symbols: bool,

    /// Upper limit on bot players, if any.
    #[setters(strip_option)]
    pub max_bots: Option<usize>,
}

impl GameConfig {
    /// Creates a configuration with row and column win detection, unique
    /// symbols enforced, unbounded retries and no bot limit.
    pub fn new(dimension: usize, players: Vec<Box<dyn Player>>) -> Self {
        Self {
            dimension,
            players,
            winning_strategies: default_strategies(),
            max_attempts_per_turn: None,
            enforce_unique_symbols: true,
            max_bots: None,
        }
    }
}
