//! Game lifecycle: turns, win detection, draw detection and undo.

use crate::action::Move;
use crate::board::{Board, Mark};
use crate::config::GameConfig;
use crate::error::{ConfigurationError, GameError, InvalidMove, MoveAttemptError};
use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use crate::player::Player;
use crate::position::{Coordinates, Position};
use crate::rules::{WinningStrategy, is_draw};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use tracing::{debug, info, instrument, warn};

/// Lifecycle state.
///
/// `GameWon` and `Draw` are terminal for play; only undo leaves them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum GameState {
    /// Moves may be made.
    InProgress,
    /// The last move completed a line.
    GameWon,
    /// Every cell is filled and nobody won.
    Draw,
}

/// A committed move plus how many strategies evaluated it.
///
/// Evaluation stops at the first strategy reporting a win, so undo must
/// roll back only that prefix of strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Committed {
    pub(crate) mv: Move,
    pub(crate) evaluated_by: usize,
}

/// Result of a committed turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// The move that was committed.
    pub mv: Move,
    /// Game state after the move.
    pub state: GameState,
}

/// A single game: owns its board, players, strategies and move history.
///
/// The move history doubles as the undo stack; undo can walk it back to an
/// empty board.
#[derive(Debug)]
pub struct Game {
    board: Board,
    players: Vec<Box<dyn Player>>,
    next_player_index: usize,
    history: Vec<Committed>,
    winner: Option<usize>,
    state: GameState,
    winning_strategies: Vec<Box<dyn WinningStrategy>>,
    max_attempts_per_turn: Option<NonZeroUsize>,
}

impl Game {
    /// Validates `config` and starts a game with an empty board.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] when the player count, board
    /// dimension, symbols or bot count are not acceptable.
    #[instrument(skip(config), fields(dimension = config.dimension, players = config.players.len()))]
    pub fn start(config: GameConfig) -> Result<Self, ConfigurationError> {
        crate::validation::validate(&config)?;

        let GameConfig {
            dimension,
            players,
            winning_strategies,
            max_attempts_per_turn,
            ..
        } = config;

        info!(
            strategies = ?winning_strategies.iter().map(|s| s.name()).collect::<Vec<_>>(),
            "Starting game"
        );

        Ok(Self {
            board: Board::new(dimension),
            players,
            next_player_index: 0,
            history: Vec::new(),
            winner: None,
            state: GameState::InProgress,
            winning_strategies,
            max_attempts_per_turn,
        })
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board side length.
    pub fn dimension(&self) -> usize {
        self.board.dimension()
    }

    /// Number of players.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Player at `seat`, if any.
    pub fn player(&self, seat: usize) -> Option<&dyn Player> {
        self.players.get(seat).map(|player| player.as_ref())
    }

    /// Players in turn order.
    pub fn players(&self) -> impl Iterator<Item = &dyn Player> {
        self.players.iter().map(|player| player.as_ref())
    }

    /// Seat of the player who moves next.
    pub fn next_player_index(&self) -> usize {
        self.next_player_index
    }

    /// The player who moves next.
    pub fn next_player(&self) -> &dyn Player {
        self.players[self.next_player_index].as_ref()
    }

    /// The player who made the most recent move.
    ///
    /// Before any move this wraps around to the last seat.
    pub fn current_player(&self) -> &dyn Player {
        let count = self.players.len();
        self.players[(self.next_player_index + count - 1) % count].as_ref()
    }

    /// The winner, once the game is won.
    pub fn winner(&self) -> Option<&dyn Player> {
        self.winner.and_then(|seat| self.player(seat))
    }

    pub(crate) fn winner_seat(&self) -> Option<usize> {
        self.winner
    }

    /// Committed moves, oldest first.
    pub fn moves(&self) -> impl ExactSizeIterator<Item = Move> + '_ {
        self.history.iter().map(|entry| entry.mv)
    }

    /// Number of committed moves.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// The most recent committed move.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|entry| entry.mv)
    }

    pub(crate) fn committed(&self) -> &[Committed] {
        &self.history
    }

    pub(crate) fn strategies(&self) -> &[Box<dyn WinningStrategy>] {
        &self.winning_strategies
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Checks coordinates against the board: in bounds and empty.
    pub fn validate(&self, coordinates: Coordinates) -> Result<Position, InvalidMove> {
        let position = self
            .board
            .contains(coordinates)
            .ok_or(InvalidMove::OutOfBounds {
                row: coordinates.row,
                col: coordinates.col,
                dimension: self.board.dimension(),
            })?;

        if !self.board.cell(position).is_empty() {
            return Err(InvalidMove::CellOccupied {
                row: position.row,
                col: position.col,
            });
        }

        Ok(position)
    }

    /// Makes one move for the next player at `coordinates`.
    ///
    /// Nothing changes unless the move is valid.
    ///
    /// # Errors
    ///
    /// Returns [`MoveAttemptError::GameOver`] once the game has finished,
    /// or [`MoveAttemptError::Invalid`] for out-of-bounds or occupied
    /// targets.
    #[instrument(skip(self), fields(player = %self.next_player().name()))]
    pub fn try_move(&mut self, coordinates: Coordinates) -> Result<TurnOutcome, MoveAttemptError> {
        if self.state != GameState::InProgress {
            return Err(MoveAttemptError::GameOver);
        }
        let position = self.validate(coordinates)?;
        Ok(self.commit(position))
    }

    /// Plays one turn: asks the next player for a move until a valid one
    /// arrives, commits it and updates the game state.
    ///
    /// Rejected proposals are reported back to the player and asked again,
    /// without limit unless the game was configured with
    /// `max_attempts_per_turn`.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if called after the game finished.
    /// - [`GameError::Player`] if the player cannot produce a move.
    /// - [`GameError::TooManyInvalidAttempts`] if the attempt limit is hit.
    #[instrument(skip(self), fields(player = %self.next_player().name()))]
    pub fn advance_turn(&mut self) -> Result<TurnOutcome, GameError> {
        if self.state != GameState::InProgress {
            warn!(state = %self.state, "Turn requested on a finished game");
            return Err(GameError::GameOver);
        }

        let seat = self.next_player_index;
        let mut attempts = 0;
        let position = loop {
            let coordinates = self.players[seat].next_move(&self.board)?;
            attempts += 1;

            match self.validate(coordinates) {
                Ok(position) => break position,
                Err(reason) => {
                    warn!(%coordinates, %reason, attempts, "Move rejected");
                    self.players[seat].notify_rejected(&reason);
                    if let Some(max) = self.max_attempts_per_turn {
                        if attempts >= max.get() {
                            return Err(GameError::TooManyInvalidAttempts { attempts });
                        }
                    }
                }
            }
        };

        Ok(self.commit(position))
    }

    fn commit(&mut self, position: Position) -> TurnOutcome {
        let seat = self.next_player_index;
        let mark = Mark::new(seat, self.players[seat].symbol());
        let mv = Move::new(position, mark);

        self.board.cell_mut(position).set_occupied(mark);

        let mut evaluated_by = 0;
        let mut won = false;
        for strategy in self.winning_strategies.iter_mut() {
            evaluated_by += 1;
            if strategy.evaluate(&self.board, &mv) {
                info!(strategy = strategy.name(), "Winning line completed");
                won = true;
                break;
            }
        }
        self.history.push(Committed { mv, evaluated_by });

        if won {
            self.state = GameState::GameWon;
            self.winner = Some(seat);
            info!(winner = %self.players[seat].name(), "Game won");
        } else if is_draw(&self.board, self.history.len()) {
            self.state = GameState::Draw;
            self.winner = None;
            info!("Game drawn");
        }

        self.next_player_index = (seat + 1) % self.players.len();
        debug!(%mv, state = %self.state, "Move committed");
        self.debug_check_invariants();

        TurnOutcome {
            mv,
            state: self.state,
        }
    }

    /// Reverts the most recent move.
    ///
    /// Clears the cell, rolls back the strategies that counted the move,
    /// returns the game to [`GameState::InProgress`] with no winner, and
    /// gives the turn back to the player who made the move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyUndoHistory`] when there is nothing to
    /// undo; the game is unchanged.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn undo(&mut self) -> Result<Move, GameError> {
        let Some(last) = self.history.pop() else {
            info!("No moves left to undo");
            return Err(GameError::EmptyUndoHistory);
        };

        self.board.cell_mut(last.mv.position()).clear();

        for strategy in self.winning_strategies[..last.evaluated_by].iter_mut().rev() {
            strategy.rollback(&last.mv);
        }

        self.state = GameState::InProgress;
        self.winner = None;

        let count = self.players.len();
        self.next_player_index = (self.next_player_index + count - 1) % count;

        info!(mv = %last.mv, "Move undone");
        self.debug_check_invariants();
        Ok(last.mv)
    }

    /// Text snapshot of the board.
    pub fn render(&self) -> String {
        self.board.render()
    }

    /// Move-by-move record of the game so far.
    pub fn summary(&self) -> GameSummary {
        let moves = self
            .moves()
            .map(|mv| MoveRecord {
                player: self.players[mv.seat()].name().to_string(),
                symbol: mv.symbol(),
                row: mv.position().row,
                col: mv.position().col,
            })
            .collect();

        GameSummary {
            dimension: self.dimension(),
            state: self.state,
            winner: self.winner().map(|player| player.name().to_string()),
            moves,
        }
    }

    /// Checks every game invariant.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        GameInvariants::check_all(self)
    }

    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions) {
            if let Err(violations) = self.check_invariants() {
                panic!("Game invariants violated: {violations:?}");
            }
        }
    }
}

/// One line of a game summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Name of the player who moved.
    pub player: String,
    /// Symbol placed.
    pub symbol: char,
    /// Row played.
    pub row: usize,
    /// Column played.
    pub col: usize,
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} play '{}' on cell: {}, {}",
            self.player, self.symbol, self.row, self.col
        )
    }
}

/// Serializable record of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Board side length.
    pub dimension: usize,
    /// State at the time of the summary.
    pub state: GameState,
    /// Winner's name, if won.
    pub winner: Option<String>,
    /// Committed moves, oldest first.
    pub moves: Vec<MoveRecord>,
}

impl std::fmt::Display for GameSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "<-------- Summary: -------->")?;
        for record in &self.moves {
            writeln!(f, "{record}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{two_player_game, scripted_game};

    #[test]
    fn test_row_win_scenario() {
        let mut game = two_player_game(3);
        let moves = [(0, 0), (1, 1), (0, 1), (1, 2)];
        for (row, col) in moves {
            let outcome = game.try_move(Coordinates::new(row, col)).unwrap();
            assert_eq!(outcome.state, GameState::InProgress);
        }
        let outcome = game.try_move(Coordinates::new(0, 2)).unwrap();
        assert_eq!(outcome.state, GameState::GameWon);
        assert_eq!(game.winner().unwrap().name(), "Akash");
        assert_eq!(game.current_player().name(), "Akash");
        assert_eq!(game.next_player().name(), "Botty");
    }

    #[test]
    fn test_moves_refused_after_win() {
        let mut game = two_player_game(3);
        for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 2), (0, 2)] {
            game.try_move(Coordinates::new(row, col)).unwrap();
        }
        assert_eq!(
            game.try_move(Coordinates::new(2, 2)),
            Err(MoveAttemptError::GameOver)
        );
        assert_eq!(game.advance_turn(), Err(GameError::GameOver));
    }

    #[test]
    fn test_invalid_attempt_commits_nothing() {
        let mut game = two_player_game(3);
        game.try_move(Coordinates::new(1, 1)).unwrap();
        let before = game.render();

        assert!(matches!(
            game.try_move(Coordinates::new(1, 1)),
            Err(MoveAttemptError::Invalid(InvalidMove::CellOccupied { row: 1, col: 1 }))
        ));
        assert!(matches!(
            game.try_move(Coordinates::new(-1, 0)),
            Err(MoveAttemptError::Invalid(InvalidMove::OutOfBounds { .. }))
        ));
        assert_eq!(game.render(), before);
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.next_player_index(), 1);
    }

    #[test]
    fn test_advance_turn_retries_until_valid() {
        // Human proposes off-board, then occupied, then a free cell.
        let mut game = scripted_game(3, "0 0\n5 5\n0 0\n2 2\n");
        game.advance_turn().unwrap(); // human takes (0, 0)
        game.advance_turn().unwrap(); // easy bot takes (0, 1)
        let outcome = game.advance_turn().unwrap();
        assert_eq!(outcome.mv.position(), Position::new(2, 2));
        assert_eq!(game.move_count(), 3);
    }

    #[test]
    fn test_attempt_limit() {
        let config_limit = NonZeroUsize::new(2).unwrap();
        let mut game = crate::test_support::scripted_game_with(3, "9 9\n-3 0\n1 1\n", |config| {
            config.with_max_attempts_per_turn(config_limit)
        });
        assert_eq!(
            game.advance_turn(),
            Err(GameError::TooManyInvalidAttempts { attempts: 2 })
        );
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_undo_empty_history() {
        let mut game = two_player_game(3);
        assert_eq!(game.undo(), Err(GameError::EmptyUndoHistory));
        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(game.next_player_index(), 0);
    }

    #[test]
    fn test_summary_lines() {
        let mut game = two_player_game(3);
        game.try_move(Coordinates::new(0, 0)).unwrap();
        game.try_move(Coordinates::new(2, 1)).unwrap();
        let summary = game.summary();
        assert_eq!(summary.moves[0].to_string(), "Akash play 'X' on cell: 0, 0");
        assert_eq!(summary.moves[1].to_string(), "Botty play 'O' on cell: 2, 1");
        assert!(summary.to_string().starts_with("<-------- Summary: -------->"));
    }
}
