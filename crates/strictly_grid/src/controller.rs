//! Stateless entry points for drivers.

use crate::action::Move;
use crate::config::GameConfig;
use crate::error::{ConfigurationError, GameError};
use crate::game::{Game, GameState, GameSummary, TurnOutcome};
use crate::player::Player;
use tracing::instrument;

/// Facade that drivers call instead of reaching into [`Game`].
///
/// Holds no state, so one controller can serve any number of games.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameController;

impl GameController {
    /// Creates a controller.
    pub fn new() -> Self {
        Self
    }

    /// Validates the configuration and starts a game.
    #[instrument(skip(self, config))]
    pub fn start_game(&self, config: GameConfig) -> Result<Game, ConfigurationError> {
        Game::start(config)
    }

    /// Current lifecycle state.
    pub fn state(&self, game: &Game) -> GameState {
        game.state()
    }

    /// Plays one turn for the next player.
    pub fn advance_turn(&self, game: &mut Game) -> Result<TurnOutcome, GameError> {
        game.advance_turn()
    }

    /// Reverts the most recent move.
    pub fn undo(&self, game: &mut Game) -> Result<Move, GameError> {
        game.undo()
    }

    /// Winner, once the game is won.
    pub fn winner<'g>(&self, game: &'g Game) -> Option<&'g dyn Player> {
        game.winner()
    }

    /// The player who made the most recent move.
    pub fn current_player<'g>(&self, game: &'g Game) -> &'g dyn Player {
        game.current_player()
    }

    /// Text snapshot of the board.
    pub fn render(&self, game: &Game) -> String {
        game.render()
    }

    /// Move-by-move record of the game.
    pub fn summary(&self, game: &Game) -> GameSummary {
        game.summary()
    }
}
