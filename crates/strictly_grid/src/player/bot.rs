//! Bot player backed by a move selection strategy.

use super::{Player, PlayerProfile, PlayerType};
use crate::board::Board;
use crate::bot_strategy::{BotPlayingStrategy, bot_strategy_for};
use crate::error::{ConfigurationError, PlayerError};
use crate::position::Coordinates;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Bot strength.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BotDifficulty {
    /// First empty cell.
    Easy,
    /// Random empty cell.
    Medium,
    /// Reserved; no strategy is registered for it yet.
    Hard,
}

/// Automated player.
#[derive(Debug)]
pub struct BotPlayer {
    profile: PlayerProfile,
    difficulty: BotDifficulty,
    strategy: Box<dyn BotPlayingStrategy>,
}

impl BotPlayer {
    /// Creates a bot whose strategy is resolved from `difficulty`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownBotDifficulty`] if no strategy
    /// exists for the difficulty.
    #[instrument(skip(id, name, rng))]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        symbol: char,
        difficulty: BotDifficulty,
        rng: StdRng,
    ) -> Result<Self, ConfigurationError> {
        let strategy = bot_strategy_for(difficulty, rng)?;
        Ok(Self::with_strategy(id, name, symbol, difficulty, strategy))
    }

    /// Creates a bot with an explicit strategy.
    pub fn with_strategy(
        id: impl Into<String>,
        name: impl Into<String>,
        symbol: char,
        difficulty: BotDifficulty,
        strategy: Box<dyn BotPlayingStrategy>,
    ) -> Self {
        Self {
            profile: PlayerProfile::new(id.into(), name.into(), symbol, PlayerType::Bot),
            difficulty,
            strategy,
        }
    }

    /// Configured difficulty.
    pub fn difficulty(&self) -> BotDifficulty {
        self.difficulty
    }
}

impl Player for BotPlayer {
    fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    #[instrument(skip_all, fields(player = %self.profile.name(), difficulty = %self.difficulty))]
    fn next_move(&mut self, board: &Board) -> Result<Coordinates, PlayerError> {
        let position = self
            .strategy
            .select_cell(board)
            .ok_or_else(|| PlayerError::NoEmptyCell {
                player: self.profile.name().clone(),
            })?;
        debug!(%position, "Bot chose cell");
        Ok(position.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_bot_profile() {
        let bot = BotPlayer::new("12", "Botty", 'O', BotDifficulty::Easy, StdRng::seed_from_u64(3))
            .unwrap();
        assert_eq!(bot.name(), "Botty");
        assert_eq!(bot.symbol(), 'O');
        assert_eq!(bot.player_type(), PlayerType::Bot);
        assert_eq!(bot.difficulty(), BotDifficulty::Easy);
    }

    #[test]
    fn test_easy_bot_plays_first_cell() {
        let mut bot =
            BotPlayer::new("12", "Botty", 'O', BotDifficulty::Easy, StdRng::seed_from_u64(3))
                .unwrap();
        assert_eq!(bot.next_move(&Board::new(3)).unwrap(), Coordinates::new(0, 0));
    }

    #[test]
    fn test_unknown_difficulty_fails() {
        let result = BotPlayer::new("12", "Botty", 'O', BotDifficulty::Hard, StdRng::seed_from_u64(3));
        assert!(result.is_err());
    }
}
