//! Invariants of a running game.
//!
//! Invariants are logical properties that must hold between any two
//! public operations on a [`Game`]. They are checked after every mutation
//! in debug builds and can be tested independently.

mod history_consistent;
mod outcome_consistent;
mod tallies_consistent;

pub use history_consistent::HistoryConsistentInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;
pub use tallies_consistent::TalliesConsistentInvariant;

use crate::game::Game;

/// A logical property that must hold for a game.
pub trait Invariant {
    /// Checks if the invariant holds.
    fn holds(game: &Game) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(game: &Game) -> Result<(), Vec<InvariantViolation>>;
}

impl<I1, I2, I3> InvariantSet for (I1, I2, I3)
where
    I1: Invariant,
    I2: Invariant,
    I3: Invariant,
{
    fn check_all(game: &Game) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(game) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(game) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(game) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every invariant a game maintains.
pub type GameInvariants = (
    HistoryConsistentInvariant,
    OutcomeConsistentInvariant,
    TalliesConsistentInvariant,
);
