//! Sparse per-line symbol counters shared by line-based strategies.

use crate::action::Move;
use std::collections::HashMap;
use tracing::error;

/// Counts of each symbol on each line, keyed by line index.
///
/// Only lines and symbols that have been played appear in the map. A count
/// that drops back to zero stays in the map as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineTally {
    counts: HashMap<usize, HashMap<char, usize>>,
}

impl LineTally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current count of `symbol` on `line`.
    pub fn count(&self, line: usize, symbol: char) -> usize {
        self.counts
            .get(&line)
            .and_then(|symbols| symbols.get(&symbol))
            .copied()
            .unwrap_or(0)
    }

    /// Adds one `symbol` to `line` and returns the new count.
    pub fn increment(&mut self, line: usize, symbol: char) -> usize {
        let count = self
            .counts
            .entry(line)
            .or_default()
            .entry(symbol)
            .or_insert(0);
        *count += 1;
        *count
    }

    /// Removes one `symbol` from `line`.
    ///
    /// Decrementing a count that is already zero means the caller broke the
    /// LIFO rollback contract; the tally is left untouched.
    pub fn decrement(&mut self, line: usize, symbol: char) {
        match self
            .counts
            .get_mut(&line)
            .and_then(|symbols| symbols.get_mut(&symbol))
        {
            Some(count) if *count > 0 => *count -= 1,
            _ => {
                error!(line, %symbol, "Rollback of a move that was never counted");
                debug_assert!(false, "rollback without matching evaluate");
            }
        }
    }

    /// Checks that this tally equals the one obtained by counting `moves`
    /// along lines chosen by `line_of`.
    pub fn matches(&self, moves: &[Move], line_of: impl Fn(&Move) -> usize) -> bool {
        let mut expected = LineTally::new();
        for mv in moves {
            expected.increment(line_of(mv), mv.symbol());
        }
        self.nonzero() == expected.nonzero()
    }

    fn nonzero(&self) -> Vec<(usize, char, usize)> {
        let mut entries: Vec<_> = self
            .counts
            .iter()
            .flat_map(|(line, symbols)| {
                symbols
                    .iter()
                    .filter(|(_, count)| **count > 0)
                    .map(move |(symbol, count)| (*line, *symbol, *count))
            })
            .collect();
        entries.sort_unstable();
        entries
    }
}
