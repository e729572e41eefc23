//! End-to-end tests: game files played through the console driver.

use std::io::{Cursor, Write};
use strictly_grid::{ConfigurationError, GameController, GameState, validate};
use strictly_grid_cli::{Console, GameFile, run};

fn game_file(content: &str) -> GameFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    GameFile::from_file(file.path()).unwrap()
}

#[test]
fn test_two_humans_share_one_console() {
    let file = game_file(
        r#"
dimension = 3
winning_strategies = ["row"]

[[players]]
id = "1"
name = "Ada"
symbol = "A"
kind = "human"

[[players]]
id = "2"
name = "Bea"
symbol = "B"
kind = "human"
"#,
    );
    // Ada takes the top row; Bea's second try repeats an occupied cell.
    let input = "0 0\n1 0\n0 1\n0 1\n1 1\n0 2\n";
    let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let controller = GameController::new();
    let mut game = controller.start_game(file.build(&console).unwrap()).unwrap();

    let summary = run(&controller, &mut game, &console, false).unwrap();
    assert_eq!(summary.state, GameState::GameWon);
    assert_eq!(summary.winner.as_deref(), Some("Ada"));
    assert_eq!(summary.moves.len(), 5);

    drop(game);
    let output = String::from_utf8(console.into_writer().unwrap()).unwrap();
    assert!(output.contains("Bea's move. Please make your move."));
    assert!(output.contains("Cell (0, 1) already filled, Please try again!"));
    assert!(output.contains("Ada wins the game!"));
}

#[test]
fn test_bot_only_file_plays_to_a_draw_or_win() {
    let file = game_file(
        r#"
dimension = 5
seed = 3

[[players]]
id = "1"
name = "One"
symbol = "1"
kind = "bot"
difficulty = "medium"

[[players]]
id = "2"
name = "Two"
symbol = "2"
kind = "bot"
difficulty = "easy"

[[players]]
id = "3"
name = "Three"
symbol = "3"
kind = "bot"
"#,
    );
    let console = Console::new(std::io::empty(), Vec::new());
    let controller = GameController::new();
    let mut game = controller.start_game(file.build(&console).unwrap()).unwrap();

    let summary = run(&controller, &mut game, &console, true).unwrap();
    assert_ne!(summary.state, GameState::InProgress);
    assert_eq!(summary.winner.is_some(), summary.state == GameState::GameWon);
    assert!(summary.moves.len() <= 25);
}

#[test]
fn test_too_many_players_for_board_fails_validation() {
    let file = game_file(
        r#"
dimension = 3

[[players]]
id = "1"
name = "A"
symbol = "A"
kind = "bot"

[[players]]
id = "2"
name = "B"
symbol = "B"
kind = "bot"

[[players]]
id = "3"
name = "C"
symbol = "C"
kind = "bot"
"#,
    );
    let console = Console::new(std::io::empty(), std::io::sink());
    let config = file.build(&console).unwrap();
    assert_eq!(
        validate(&config),
        Err(ConfigurationError::DimensionAndPlayerCountMismatch {
            dimension: 3,
            players: 3
        })
    );
}

#[test]
fn test_bot_limit_from_file_is_enforced() {
    let file = game_file(
        r#"
dimension = 4
max_bots = 1

[[players]]
id = "1"
name = "A"
symbol = "A"
kind = "bot"

[[players]]
id = "2"
name = "B"
symbol = "B"
kind = "bot"
"#,
    );
    let console = Console::new(std::io::empty(), std::io::sink());
    let result = GameController::new().start_game(file.build(&console).unwrap());
    assert!(matches!(
        result,
        Err(ConfigurationError::TooManyBots { count: 2, max: 1 })
    ));
}

#[test]
fn test_bundled_game_file_is_playable() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/games/three_way.toml");
    let file = GameFile::from_file(path).unwrap();
    let console = Console::new(std::io::empty(), std::io::sink());
    let config = file.build(&console).unwrap();
    assert_eq!(validate(&config), Ok(()));
    assert!(file.describe().contains("3: Tausif 'T' (easy bot)"));
}
