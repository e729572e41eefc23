//! Row win detection.

use super::{LineTally, WinningStrategy};
use crate::action::Move;
use crate::board::Board;
use tracing::{debug, instrument};

/// Wins when one symbol fills an entire row.
#[derive(Debug, Clone, Default)]
pub struct RowWinningStrategy {
    tally: LineTally,
}

impl RowWinningStrategy {
    /// Creates a strategy with no moves counted.
    pub fn new() -> Self {
        Self::default()
    }
}

impl WinningStrategy for RowWinningStrategy {
    fn name(&self) -> &'static str {
        "row"
    }

    #[instrument(skip_all, fields(mv = %mv))]
    fn evaluate(&mut self, board: &Board, mv: &Move) -> bool {
        let row = mv.position().row;
        let count = self.tally.increment(row, mv.symbol());
        let won = count == board.dimension();
        if won {
            debug!(row, symbol = %mv.symbol(), "Row completed");
        }
        won
    }

    fn rollback(&mut self, mv: &Move) {
        self.tally.decrement(mv.position().row, mv.symbol());
    }

    fn accounts_for(&self, seen: &[Move]) -> bool {
        self.tally.matches(seen, |mv| mv.position().row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;
    use crate::position::Position;

    fn play(board: &mut Board, strategy: &mut RowWinningStrategy, row: usize, col: usize, mark: Mark) -> bool {
        let mv = Move::new(Position::new(row, col), mark);
        board.cell_mut(mv.position()).set_occupied(mark);
        strategy.evaluate(board, &mv)
    }

    #[test]
    fn test_full_row_wins() {
        let x = Mark::new(0, 'X');
        let mut board = Board::new(3);
        let mut strategy = RowWinningStrategy::new();
        assert!(!play(&mut board, &mut strategy, 1, 0, x));
        assert!(!play(&mut board, &mut strategy, 1, 2, x));
        assert!(play(&mut board, &mut strategy, 1, 1, x));
    }

    #[test]
    fn test_mixed_row_does_not_win() {
        let mut board = Board::new(3);
        let mut strategy = RowWinningStrategy::new();
        assert!(!play(&mut board, &mut strategy, 0, 0, Mark::new(0, 'X')));
        assert!(!play(&mut board, &mut strategy, 0, 1, Mark::new(1, 'O')));
        assert!(!play(&mut board, &mut strategy, 0, 2, Mark::new(0, 'X')));
    }

    #[test]
    fn test_rollback_undoes_count() {
        let x = Mark::new(0, 'X');
        let mut board = Board::new(3);
        let mut strategy = RowWinningStrategy::new();
        play(&mut board, &mut strategy, 2, 0, x);
        play(&mut board, &mut strategy, 2, 1, x);
        let last = Move::new(Position::new(2, 1), x);
        strategy.rollback(&last);
        board.cell_mut(last.position()).clear();

        assert!(strategy.accounts_for(&[Move::new(Position::new(2, 0), x)]));
        assert!(!play(&mut board, &mut strategy, 2, 1, x));
        assert!(play(&mut board, &mut strategy, 2, 2, x));
    }
}
