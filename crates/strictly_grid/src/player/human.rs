//! Human player that reads coordinates from an input source.

use super::{Player, PlayerProfile, PlayerType};
use crate::board::Board;
use crate::error::{InvalidMove, PlayerError};
use crate::position::Coordinates;
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

/// Blocking source of coordinates for a human player.
pub trait MoveSource {
    /// Waits for the next pair of coordinates.
    fn read_coordinates(
        &mut self,
        profile: &PlayerProfile,
        board: &Board,
    ) -> Result<Coordinates, PlayerError>;

    /// Shows a message to the person at this source.
    fn report(&mut self, _message: &str) -> Result<(), PlayerError> {
        Ok(())
    }
}

/// Human player.
pub struct HumanPlayer {
    profile: PlayerProfile,
    source: Box<dyn MoveSource>,
}

impl HumanPlayer {
    /// Creates a new human player reading from `source`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        symbol: char,
        source: Box<dyn MoveSource>,
    ) -> Self {
        Self {
            profile: PlayerProfile::new(id.into(), name.into(), symbol, PlayerType::Human),
            source,
        }
    }
}

impl std::fmt::Debug for HumanPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HumanPlayer")
            .field("profile", &self.profile)
            .finish_non_exhaustive()
    }
}

impl Player for HumanPlayer {
    fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    #[instrument(skip_all, fields(player = %self.profile.name()))]
    fn next_move(&mut self, board: &Board) -> Result<Coordinates, PlayerError> {
        let coordinates = self.source.read_coordinates(&self.profile, board)?;
        debug!(%coordinates, "Human proposed move");
        Ok(coordinates)
    }

    fn notify_rejected(&mut self, reason: &InvalidMove) {
        let message = format!("{reason}, Please try again!");
        if let Err(e) = self.source.report(&message) {
            warn!(error = %e, "Failed to report rejected move");
        }
    }
}

/// Line-oriented source: prompts on `writer`, reads `row col` from `reader`.
///
/// Row and column may be separated by whitespace or a comma. Lines that do
/// not hold two integers are re-prompted; values are passed on unchecked.
pub struct LineSource<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineSource<R, W> {
    /// Creates a source over the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the source, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Writes `question` and reads one trimmed line of reply. `None` on EOF.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>, PlayerError> {
        writeln!(self.writer, "{question}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn parse(line: &str) -> Option<Coordinates> {
        let mut parts = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty());
        let row = parts.next()?.parse().ok()?;
        let col = parts.next()?.parse().ok()?;
        parts
            .next()
            .is_none()
            .then_some(Coordinates::new(row, col))
    }
}

impl<R: BufRead, W: Write> MoveSource for LineSource<R, W> {
    fn read_coordinates(
        &mut self,
        profile: &PlayerProfile,
        _board: &Board,
    ) -> Result<Coordinates, PlayerError> {
        writeln!(self.writer, "{}'s move. Please make your move.", profile.name())?;
        loop {
            write!(self.writer, "Enter row and column: ")?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(PlayerError::InputClosed);
            }

            match Self::parse(line.trim()) {
                Some(coordinates) => return Ok(coordinates),
                None => writeln!(
                    self.writer,
                    "Could not read '{}'; enter two numbers such as `1 2`.",
                    line.trim()
                )?,
            }
        }
    }

    fn report(&mut self, message: &str) -> Result<(), PlayerError> {
        writeln!(self.writer, "{message}")?;
        Ok(())
    }
}
