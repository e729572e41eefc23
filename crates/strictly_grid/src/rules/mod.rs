//! Win detection rules.
//!
//! Each [`WinningStrategy`] keeps its own incremental counters and answers
//! one question per committed move: did this move complete a line? The
//! counters hold no move history, so undo relies on the caller rolling
//! moves back in exact reverse order of evaluation.

pub mod column;
pub mod draw;
pub mod row;
pub mod tally;

pub use column::ColumnWinningStrategy;
pub use draw::is_draw;
pub use row::RowWinningStrategy;
pub use tally::LineTally;

use crate::action::Move;
use crate::board::Board;
use serde::{Deserialize, Serialize};

/// Incremental win detection over one family of lines.
pub trait WinningStrategy: std::fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Records a committed move and reports whether it completed a line.
    ///
    /// `board` must already contain the move.
    fn evaluate(&mut self, board: &Board, mv: &Move) -> bool;

    /// Forgets a move previously passed to [`WinningStrategy::evaluate`].
    ///
    /// Precondition: `mv` is the most recent move this strategy evaluated
    /// and has not yet rolled back.
    fn rollback(&mut self, mv: &Move);

    /// Checks that the counters equal exactly the tally of `seen`, the
    /// moves this strategy has evaluated and not rolled back.
    fn accounts_for(&self, seen: &[Move]) -> bool;
}

/// Named strategy families, for configuration files.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WinningStrategyKind {
    /// A full row wins.
    Row,
    /// A full column wins.
    Column,
}

impl WinningStrategyKind {
    /// Builds a fresh strategy of this kind.
    pub fn build(self) -> Box<dyn WinningStrategy> {
        match self {
            WinningStrategyKind::Row => Box::new(RowWinningStrategy::new()),
            WinningStrategyKind::Column => Box::new(ColumnWinningStrategy::new()),
        }
    }
}

/// The strategies wired in by default: rows, then columns.
pub fn default_strategies() -> Vec<Box<dyn WinningStrategy>> {
    vec![
        WinningStrategyKind::Row.build(),
        WinningStrategyKind::Column.build(),
    ]
}
