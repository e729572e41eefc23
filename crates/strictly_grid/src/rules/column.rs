//! Column win detection.

use super::{LineTally, WinningStrategy};
use crate::action::Move;
use crate::board::Board;
use tracing::{debug, instrument};

/// Wins when one symbol fills an entire column.
#[derive(Debug, Clone, Default)]
pub struct ColumnWinningStrategy {
    tally: LineTally,
}

impl ColumnWinningStrategy {
    /// Creates a strategy with no moves counted.
    pub fn new() -> Self {
        Self::default()
    }
}

impl WinningStrategy for ColumnWinningStrategy {
    fn name(&self) -> &'static str {
        "column"
    }

    #[instrument(skip_all, fields(mv = %mv))]
    fn evaluate(&mut self, board: &Board, mv: &Move) -> bool {
        let col = mv.position().col;
        let count = self.tally.increment(col, mv.symbol());
        let won = count == board.dimension();
        if won {
            debug!(col, symbol = %mv.symbol(), "Column completed");
        }
        won
    }

    fn rollback(&mut self, mv: &Move) {
        self.tally.decrement(mv.position().col, mv.symbol());
    }

    fn accounts_for(&self, seen: &[Move]) -> bool {
        self.tally.matches(seen, |mv| mv.position().col)
    }
}
