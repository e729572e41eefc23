//! Error types for game setup and play.

use crate::player::BotDifficulty;
use derive_more::{Display, Error, From};

/// Rejected game or player configuration. No game is built when this is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigurationError {
    /// Fewer than two players.
    #[display("Player count is invalid: {count} (need at least 2)")]
    InvalidPlayerCount {
        /// Number of players supplied.
        count: usize,
    },

    /// Too many players for the board.
    #[display("Player count should be lesser than dimension ({players} players, dimension {dimension})")]
    DimensionAndPlayerCountMismatch {
        /// Board dimension.
        dimension: usize,
        /// Number of players supplied.
        players: usize,
    },

    /// Two players share a symbol.
    #[display("Symbol '{symbol}' is used by more than one player")]
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: char,
    },

    /// More bots than the configured limit.
    #[display("Too many bots: {count} (at most {max} allowed)")]
    TooManyBots {
        /// Number of bots supplied.
        count: usize,
        /// Configured limit.
        max: usize,
    },

    /// Difficulty with no move-selection strategy behind it.
    #[display("No bot playing strategy for difficulty {difficulty}")]
    UnknownBotDifficulty {
        /// The unresolved difficulty.
        difficulty: BotDifficulty,
    },
}

/// Why a proposed move was refused. Nothing is committed when this occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMove {
    /// Coordinates fall off the board.
    #[display("Invalid Move ({row}, {col}) is outside a {dimension}x{dimension} board")]
    OutOfBounds {
        /// Proposed row.
        row: i64,
        /// Proposed column.
        col: i64,
        /// Board dimension.
        dimension: usize,
    },

    /// Target cell already holds a mark.
    #[display("Cell ({row}, {col}) already filled")]
    CellOccupied {
        /// Row of the occupied cell.
        row: usize,
        /// Column of the occupied cell.
        col: usize,
    },
}

/// Failure of a player to produce candidate coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PlayerError {
    /// The input source reached end of input.
    #[display("Input closed")]
    InputClosed,

    /// Reading from or prompting on the input source failed.
    #[display("Input error: {message}")]
    Io {
        /// Underlying error text.
        message: String,
    },

    /// A bot was asked to move on a board with no empty cell.
    #[display("{player} has no empty cell to play")]
    NoEmptyCell {
        /// Name of the bot.
        player: String,
    },
}

impl From<std::io::Error> for PlayerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

/// Failure of a single validated move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum MoveAttemptError {
    /// The game has already finished.
    #[display("Game is already over")]
    GameOver,

    /// The move was refused.
    #[display("{_0}")]
    #[from]
    Invalid(InvalidMove),
}

/// Failure of a game operation.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// The game has already finished; check the state before advancing.
    #[display("Game is already over")]
    GameOver,

    /// Undo requested with no committed moves.
    #[display("No moves left to Undo")]
    EmptyUndoHistory,

    /// The configured attempt limit was reached without a valid move.
    #[display("No valid move after {attempts} attempts")]
    TooManyInvalidAttempts {
        /// Attempts made.
        attempts: usize,
    },

    /// The current player could not produce a move.
    #[display("{_0}")]
    #[from]
    Player(PlayerError),
}
