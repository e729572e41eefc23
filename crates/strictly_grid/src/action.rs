//! Committed moves.

use crate::board::Mark;
use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A move accepted by the game: a player's mark placed at a position.
///
/// Moves only exist once validated; candidate input from players is
/// [`crate::Coordinates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    position: Position,
    mark: Mark,
}

impl Move {
    /// Creates a new move.
    pub fn new(position: Position, mark: Mark) -> Self {
        Self { position, mark }
    }

    /// Where the mark was placed.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Mark of the player who moved.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Seat of the player who moved.
    pub fn seat(&self) -> usize {
        self.mark.seat
    }

    /// Symbol placed.
    pub fn symbol(&self) -> char {
        self.mark.symbol
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' -> {}", self.mark.symbol, self.position)
    }
}
