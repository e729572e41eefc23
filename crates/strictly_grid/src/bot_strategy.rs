//! Move selection for bot players.

use crate::board::Board;
use crate::error::ConfigurationError;
use crate::player::BotDifficulty;
use crate::position::Position;
use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, instrument};

/// Picks a cell for a bot to play.
pub trait BotPlayingStrategy: std::fmt::Debug {
    /// Returns an empty position on `board`, or `None` if the board is full.
    fn select_cell(&mut self, board: &Board) -> Option<Position>;
}

/// Plays the first empty cell in row-major order.
#[derive(Debug, Clone, Copy, Default)]
pub struct EasyBotPlayingStrategy;

impl BotPlayingStrategy for EasyBotPlayingStrategy {
    fn select_cell(&mut self, board: &Board) -> Option<Position> {
        board
            .cells()
            .find(|cell| cell.is_empty())
            .map(|cell| cell.position())
    }
}

/// Plays a uniformly random empty cell.
///
/// Draws an index into the list of empty positions, so a nearly full board
/// costs no retries.
#[derive(Debug, Clone)]
pub struct MediumBotPlayingStrategy {
    rng: StdRng,
}

impl MediumBotPlayingStrategy {
    /// Creates a strategy drawing from `rng`.
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl BotPlayingStrategy for MediumBotPlayingStrategy {
    fn select_cell(&mut self, board: &Board) -> Option<Position> {
        let empty = board.empty_positions();
        if empty.is_empty() {
            return None;
        }
        let choice = empty[self.rng.gen_range(0..empty.len())];
        debug!(candidates = empty.len(), position = %choice, "Random cell chosen");
        Some(choice)
    }
}

/// Resolves a difficulty to its strategy.
///
/// `rng` seeds strategies that need randomness and is dropped otherwise.
#[instrument(skip(rng))]
pub fn bot_strategy_for(
    difficulty: BotDifficulty,
    rng: StdRng,
) -> Result<Box<dyn BotPlayingStrategy>, ConfigurationError> {
    match difficulty {
        BotDifficulty::Easy => Ok(Box::new(EasyBotPlayingStrategy)),
        BotDifficulty::Medium => Ok(Box::new(MediumBotPlayingStrategy::new(rng))),
        BotDifficulty::Hard => Err(ConfigurationError::UnknownBotDifficulty { difficulty }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;
    use rand::SeedableRng;

    #[test]
    fn test_easy_skips_filled_cells() {
        let mut board = Board::new(3);
        board.cell_mut(Position::new(0, 0)).set_occupied(Mark::new(0, 'X'));
        board.cell_mut(Position::new(0, 1)).set_occupied(Mark::new(1, 'O'));
        assert_eq!(
            EasyBotPlayingStrategy.select_cell(&board),
            Some(Position::new(0, 2))
        );
    }

    #[test]
    fn test_full_board_yields_none() {
        let mut board = Board::new(2);
        for index in 0..4 {
            let pos = Position::from_index(index, 2).unwrap();
            board.cell_mut(pos).set_occupied(Mark::new(index % 2, 'X'));
        }
        assert_eq!(EasyBotPlayingStrategy.select_cell(&board), None);
        let mut medium = MediumBotPlayingStrategy::new(StdRng::seed_from_u64(1));
        assert_eq!(medium.select_cell(&board), None);
    }

    #[test]
    fn test_hard_has_no_strategy() {
        let result = bot_strategy_for(BotDifficulty::Hard, StdRng::seed_from_u64(0));
        assert!(matches!(
            result,
            Err(ConfigurationError::UnknownBotDifficulty {
                difficulty: BotDifficulty::Hard
            })
        ));
    }
}
