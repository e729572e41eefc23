//! Game fixtures shared by unit tests.

use crate::config::GameConfig;
use crate::game::Game;
use crate::player::{BotDifficulty, BotPlayer, HumanPlayer, LineSource, Player};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{Cursor, sink};

/// Human "Akash" ('X') against an easy bot "Botty" ('O').
///
/// The human's input is `script`, one `row col` pair per line.
pub(crate) fn scripted_game_with(
    dimension: usize,
    script: &str,
    configure: impl FnOnce(GameConfig) -> GameConfig,
) -> Game {
    let source = LineSource::new(Cursor::new(script.as_bytes().to_vec()), sink());
    let players: Vec<Box<dyn Player>> = vec![
        Box::new(HumanPlayer::new("11", "Akash", 'X', Box::new(source))),
        Box::new(
            BotPlayer::new("12", "Botty", 'O', BotDifficulty::Easy, StdRng::seed_from_u64(7))
                .expect("easy bot"),
        ),
    ];
    Game::start(configure(GameConfig::new(dimension, players))).expect("valid config")
}

pub(crate) fn scripted_game(dimension: usize, script: &str) -> Game {
    scripted_game_with(dimension, script, |config| config)
}

/// Same roster with no scripted input; drive it with `try_move`.
pub(crate) fn two_player_game(dimension: usize) -> Game {
    scripted_game(dimension, "")
}
