//! Player trait and implementations.

mod bot;
mod human;

pub use bot::{BotDifficulty, BotPlayer};
pub use human::{HumanPlayer, LineSource, MoveSource};

use crate::board::Board;
use crate::error::{InvalidMove, PlayerError};
use crate::position::Coordinates;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Kind of player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum PlayerType {
    /// Moves come from a person.
    Human,
    /// Moves come from a bot playing strategy.
    Bot,
}

/// Identity shared by every player kind. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct PlayerProfile {
    /// Stable identifier.
    id: String,
    /// Display name.
    name: String,
    /// Symbol drawn on claimed cells.
    symbol: char,
    /// Human or bot.
    player_type: PlayerType,
}

/// Trait for players that can make moves.
pub trait Player: std::fmt::Debug {
    /// Identity of this player.
    fn profile(&self) -> &PlayerProfile;

    /// Proposes coordinates for the next move.
    ///
    /// Proposals are not validated here; the game checks bounds and
    /// occupancy and asks again on rejection. Human implementations may
    /// block on input.
    fn next_move(&mut self, board: &Board) -> Result<Coordinates, PlayerError>;

    /// Tells the player its last proposal was refused.
    fn notify_rejected(&mut self, _reason: &InvalidMove) {}

    /// Returns the player's display name.
    fn name(&self) -> &str {
        self.profile().name()
    }

    /// Returns the player's symbol.
    fn symbol(&self) -> char {
        *self.profile().symbol()
    }

    /// Returns the player's kind.
    fn player_type(&self) -> PlayerType {
        *self.profile().player_type()
    }
}
