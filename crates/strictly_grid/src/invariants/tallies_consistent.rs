//! Tally consistency invariant: strategy counters match the moves they saw.

use super::Invariant;
use crate::action::Move;
use crate::game::Game;

/// Invariant: each winning strategy's counters equal the tally of the
/// committed moves it evaluated.
///
/// Evaluation stops at the first strategy reporting a win, so on a won game
/// the strategies after the winner never saw the final move.
pub struct TalliesConsistentInvariant;

impl Invariant for TalliesConsistentInvariant {
    fn holds(game: &Game) -> bool {
        game.strategies().iter().enumerate().all(|(index, strategy)| {
            let seen: Vec<Move> = game
                .committed()
                .iter()
                .filter(|entry| entry.evaluated_by > index)
                .map(|entry| entry.mv)
                .collect();
            strategy.accounts_for(&seen)
        })
    }

    fn description() -> &'static str {
        "Winning strategy counters match the evaluated moves"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Coordinates;
    use crate::test_support::two_player_game;

    #[test]
    fn test_row_win_leaves_column_untouched() {
        let mut game = two_player_game(3);
        for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 2), (0, 2)] {
            game.try_move(Coordinates::new(row, col)).unwrap();
        }
        let last = game.committed().last().copied().unwrap();
        assert_eq!(last.evaluated_by, 1);
        assert!(TalliesConsistentInvariant::holds(&game));

        game.undo().unwrap();
        assert!(TalliesConsistentInvariant::holds(&game));
    }
}
