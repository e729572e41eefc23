//! Draw detection.

use crate::board::Board;

/// A game is drawn once as many moves have been committed as the board has
/// cells and no strategy reported a win.
pub fn is_draw(board: &Board, moves_committed: usize) -> bool {
    moves_committed == board.area()
}
