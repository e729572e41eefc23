//! Board coordinates, raw and validated.
//!
//! Players propose [`Coordinates`], which may point anywhere (including off
//! the board or at negative indices). Only the game turns them into a
//! [`Position`], and only after a bounds check.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// Unvalidated row/column pair proposed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Coordinates {
    /// Proposed row.
    pub row: i64,
    /// Proposed column.
    pub col: i64,
}

impl From<Position> for Coordinates {
    fn from(position: Position) -> Self {
        // Board dimensions are small; a usize index always fits in i64.
        Self::new(position.row as i64, position.col as i64)
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A position known to lie on a particular board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new,
)]
pub struct Position {
    /// Row index, `0..dimension`.
    pub row: usize,
    /// Column index, `0..dimension`.
    pub col: usize,
}

impl Position {
    /// Converts coordinates into a position if they fall inside a board of
    /// the given dimension.
    pub fn within(coordinates: Coordinates, dimension: usize) -> Option<Self> {
        let row = usize::try_from(coordinates.row).ok()?;
        let col = usize::try_from(coordinates.col).ok()?;
        (row < dimension && col < dimension).then_some(Self { row, col })
    }

    /// Row-major index on a board of the given dimension.
    pub fn to_index(self, dimension: usize) -> usize {
        self.row * dimension + self.col
    }

    /// Inverse of [`Position::to_index`].
    pub fn from_index(index: usize, dimension: usize) -> Option<Self> {
        (dimension > 0 && index < dimension * dimension)
            .then(|| Self::new(index / dimension, index % dimension))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_accepts_inside() {
        let pos = Position::within(Coordinates::new(2, 0), 3);
        assert_eq!(pos, Some(Position::new(2, 0)));
    }

    #[test]
    fn test_within_rejects_negative_and_overflow() {
        assert_eq!(Position::within(Coordinates::new(-1, 0), 3), None);
        assert_eq!(Position::within(Coordinates::new(0, 3), 3), None);
        assert_eq!(Position::within(Coordinates::new(3, 3), 3), None);
    }

    #[test]
    fn test_index_round_trip() {
        assert_eq!(Position::new(1, 2).to_index(4), 6);
        assert_eq!(Position::from_index(6, 4), Some(Position::new(1, 2)));
        assert_eq!(Position::from_index(16, 4), None);
    }
}
