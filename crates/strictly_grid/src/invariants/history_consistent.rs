//! History consistency invariant: the board is exactly the replayed history.

use super::Invariant;
use crate::game::Game;

/// Invariant: every committed move owns its cell, no other cell is filled,
/// and the turn index equals the number of moves modulo the player count.
pub struct HistoryConsistentInvariant;

impl Invariant for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let owners_match = game
            .moves()
            .all(|mv| board.cell(mv.position()).owner() == Some(mv.mark()));
        let filled_match = board.filled_count() == game.move_count();
        let turn_match = game.next_player_index() == game.move_count() % game.player_count();

        owners_match && filled_match && turn_match
    }

    fn description() -> &'static str {
        "Board cells and turn index match the move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;
    use crate::position::{Coordinates, Position};
    use crate::test_support::two_player_game;

    #[test]
    fn test_fresh_game_holds() {
        let game = two_player_game(3);
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_moves_and_undo_hold() {
        let mut game = two_player_game(3);
        game.try_move(Coordinates::new(1, 1)).unwrap();
        game.try_move(Coordinates::new(0, 0)).unwrap();
        assert!(HistoryConsistentInvariant::holds(&game));

        game.undo().unwrap();
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_stray_mark_violates() {
        let mut game = two_player_game(3);
        game.try_move(Coordinates::new(1, 1)).unwrap();
        game.board_mut()
            .cell_mut(Position::new(2, 2))
            .set_occupied(Mark::new(1, 'O'));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
