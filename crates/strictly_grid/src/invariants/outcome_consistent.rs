//! Outcome consistency invariant: state and winner agree.

use super::Invariant;
use crate::game::{Game, GameState};

/// Invariant: a won game has a winner who made the last move, a drawn game
/// has no winner and a full history, and a game in progress has no winner.
pub struct OutcomeConsistentInvariant;

impl Invariant for OutcomeConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let last_seat = game.last_move().map(|mv| mv.seat());
        match game.state() {
            GameState::InProgress => game.winner_seat().is_none(),
            GameState::GameWon => game.winner_seat().is_some() && game.winner_seat() == last_seat,
            GameState::Draw => {
                game.winner_seat().is_none() && game.move_count() == game.board().area()
            }
        }
    }

    fn description() -> &'static str {
        "Game state and winner are consistent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Coordinates;
    use crate::test_support::two_player_game;

    #[test]
    fn test_win_then_undo_holds() {
        let mut game = two_player_game(3);
        for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 2), (0, 2)] {
            game.try_move(Coordinates::new(row, col)).unwrap();
            assert!(OutcomeConsistentInvariant::holds(&game));
        }
        assert_eq!(game.state(), GameState::GameWon);

        game.undo().unwrap();
        assert!(OutcomeConsistentInvariant::holds(&game));
    }
}
