//! Terminal driver: shows the board, runs turns, offers undo.

use anyhow::Result;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use strictly_grid::{
    Board, Coordinates, Game, GameController, GameState, GameSummary, LineSource, MoveSource,
    Player, PlayerError, PlayerProfile, PlayerType,
};
use tracing::{debug, info, instrument};

const UNDO_PROMPT: &str = "Do you want to undo? Press 1 to confirm and 2 to continue.";

/// One terminal shared by every human player and the driver.
///
/// Clones read and write the same underlying streams, in the order calls
/// are made.
pub struct Console<R, W> {
    inner: Rc<RefCell<LineSource<R, W>>>,
}

impl<R, W> Clone for Console<R, W> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<R: BufRead + 'static, W: Write + 'static> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            inner: Rc::new(RefCell::new(LineSource::new(reader, writer))),
        }
    }

    /// A move source for a human player seated at this console.
    pub fn source(&self) -> Box<dyn MoveSource> {
        Box::new(self.clone())
    }

    /// Prints one message.
    pub fn say(&self, message: &str) -> Result<(), PlayerError> {
        self.inner.borrow_mut().report(message)
    }

    /// Asks whether to take back the last move. Closed input means no.
    pub fn confirm_undo(&self) -> Result<bool, PlayerError> {
        loop {
            match self.inner.borrow_mut().ask(UNDO_PROMPT)?.as_deref() {
                Some("1") => return Ok(true),
                Some("2") | None => return Ok(false),
                Some(other) => debug!(reply = other, "Unrecognized undo reply"),
            }
        }
    }

    /// Returns the writer once no other clone is alive.
    pub fn into_writer(self) -> Option<W> {
        Rc::try_unwrap(self.inner)
            .ok()
            .map(|cell| cell.into_inner().into_writer())
    }
}

impl<R: BufRead, W: Write> MoveSource for Console<R, W> {
    fn read_coordinates(
        &mut self,
        profile: &PlayerProfile,
        board: &Board,
    ) -> Result<Coordinates, PlayerError> {
        self.inner.borrow_mut().read_coordinates(profile, board)
    }

    fn report(&mut self, message: &str) -> Result<(), PlayerError> {
        self.inner.borrow_mut().report(message)
    }
}

/// Plays `game` to the end on `console` and returns its summary.
///
/// After each human move the console offers to undo it, unless
/// `offer_undo` is false.
#[instrument(skip_all, fields(dimension = game.dimension(), offer_undo = offer_undo))]
pub fn run<R: BufRead + 'static, W: Write + 'static>(
    controller: &GameController,
    game: &mut Game,
    console: &Console<R, W>,
    offer_undo: bool,
) -> Result<GameSummary> {
    info!("Game started");
    while controller.state(game) == GameState::InProgress {
        console.say(&controller.render(game))?;
        let outcome = controller.advance_turn(game)?;
        debug!(mv = %outcome.mv, state = %outcome.state, "Turn played");

        let mover = controller.current_player(game).player_type();
        if offer_undo && mover == PlayerType::Human {
            console.say(&controller.render(game))?;
            if console.confirm_undo()? {
                let undone = controller.undo(game)?;
                info!(mv = %undone, "Move undone");
                continue;
            }
        }
    }

    match controller.winner(game) {
        Some(winner) => console.say(&format!("{} wins the game!", winner.name()))?,
        None => console.say("The game is a draw!")?,
    }
    console.say(&controller.render(game))?;

    let summary = controller.summary(game);
    info!(state = %summary.state, moves = summary.moves.len(), "Game finished");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;
    use strictly_grid::{BotDifficulty, BotPlayer, GameConfig, HumanPlayer, Player};

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    fn human_vs_easy_bot(console: &TestConsole) -> Game {
        let players: Vec<Box<dyn Player>> = vec![
            Box::new(HumanPlayer::new("11", "Akash", 'X', console.source())),
            Box::new(
                BotPlayer::new("12", "Botty", 'O', BotDifficulty::Easy, StdRng::seed_from_u64(0))
                    .unwrap(),
            ),
        ];
        GameController::new()
            .start_game(GameConfig::new(3, players))
            .unwrap()
    }

    fn play(input: &str, offer_undo: bool) -> (GameSummary, String) {
        let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut game = human_vs_easy_bot(&console);
        let summary = run(&GameController::new(), &mut game, &console, offer_undo).unwrap();
        drop(game);
        let output = String::from_utf8(console.into_writer().unwrap()).unwrap();
        (summary, output)
    }

    #[test]
    fn test_human_wins_down_last_column() {
        // Easy bot answers (0,0) then (0,1).
        let (summary, output) = play("0 2\n1 2\n2 2\n", false);
        assert_eq!(summary.state, GameState::GameWon);
        assert_eq!(summary.winner.as_deref(), Some("Akash"));
        assert_eq!(summary.moves.len(), 5);
        assert!(output.contains("Akash wins the game!"));
        assert!(!output.contains(UNDO_PROMPT));
    }

    #[test]
    fn test_undo_takes_back_human_move() {
        let input = "1 1\n1\n0 2\n2\n1 2\n2\n2 2\n2\n";
        let (summary, output) = play(input, true);
        assert_eq!(summary.winner.as_deref(), Some("Akash"));
        assert!(output.contains(UNDO_PROMPT));
        assert!(summary.moves.iter().all(|m| (m.row, m.col) != (1, 1)));
        assert_eq!(summary.moves[0].row, 0);
        assert_eq!(summary.moves[0].col, 2);
    }

    #[test]
    fn test_closed_input_fails_the_game() {
        let console = Console::new(Cursor::new(Vec::new()), Vec::new());
        let mut game = human_vs_easy_bot(&console);
        let result = run(&GameController::new(), &mut game, &console, true);
        assert!(result.is_err());
    }

    #[test]
    fn test_unrecognized_undo_reply_asks_again() {
        let console: TestConsole = Console::new(Cursor::new(b"maybe\n2\n".to_vec()), Vec::new());
        assert!(!console.confirm_undo().unwrap());
        let output = String::from_utf8(console.into_writer().unwrap()).unwrap();
        assert_eq!(output.matches(UNDO_PROMPT).count(), 2);
    }
}
