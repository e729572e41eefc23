//! Strictly Grid - N-in-a-row on an N×N board
//!
//! A turn-based grid game engine for any number of human and bot players,
//! with pluggable win detection and undo.
//!
//! # Architecture
//!
//! - **Board**: cells owned by the game; players and strategies read it
//! - **Players**: humans read coordinates from a [`MoveSource`], bots ask a
//!   [`BotPlayingStrategy`]
//! - **Rules**: [`WinningStrategy`] implementations keep per-line counters
//!   updated one move at a time and roll them back on undo
//! - **Game**: validates and commits moves, tracks state and history
//!
//! # Example
//!
//! ```
//! use strictly_grid::{BotDifficulty, BotPlayer, GameConfig, GameController, GameState, Player};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let players: Vec<Box<dyn Player>> = vec![
//!     Box::new(BotPlayer::new("1", "Ada", 'X', BotDifficulty::Easy, StdRng::seed_from_u64(1))?),
//!     Box::new(BotPlayer::new("2", "Bob", 'O', BotDifficulty::Medium, StdRng::seed_from_u64(2))?),
//! ];
//!
//! let controller = GameController::new();
//! let mut game = controller.start_game(GameConfig::new(3, players))?;
//! while controller.state(&game) == GameState::InProgress {
//!     controller.advance_turn(&mut game)?;
//! }
//! println!("{}", controller.render(&game));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod bot_strategy;
mod config;
mod controller;
mod error;
mod game;
pub mod invariants;
mod player;
mod position;
pub mod rules;
mod validation;

#[cfg(test)]
mod test_support;

pub use action::Move;
pub use board::{Board, Cell, CellState, Mark};
pub use bot_strategy::{
    BotPlayingStrategy, EasyBotPlayingStrategy, MediumBotPlayingStrategy, bot_strategy_for,
};
pub use config::GameConfig;
pub use controller::GameController;
pub use error::{ConfigurationError, GameError, InvalidMove, MoveAttemptError, PlayerError};
pub use game::{Game, GameState, GameSummary, MoveRecord, TurnOutcome};
pub use player::{
    BotDifficulty, BotPlayer, HumanPlayer, LineSource, MoveSource, Player, PlayerProfile,
    PlayerType,
};
pub use position::{Coordinates, Position};
pub use rules::{
    ColumnWinningStrategy, RowWinningStrategy, WinningStrategy, WinningStrategyKind,
    default_strategies,
};
pub use validation::{
    BotLimit, ConfigRule, DimensionAndPlayerCount, PlayerCount, UniqueSymbols, validate,
};
