//! Invariants every [`Game`] must satisfy.
//!
//! The game constructor checks the full [`GameInvariants`] set on each new
//! instance, so a value assembled from copied parts is held to the same rules
//! as a fresh one.

use super::game::Game;

pub mod board_contents;
pub mod roster;
pub mod round_state;

pub use board_contents::BoardContentsInvariant;
pub use roster::RosterInvariant;
pub use round_state::RoundStateInvariant;

/// A property of a whole game.
pub trait Invariant {
    /// Returns true if `game` satisfies the property.
    fn holds(game: &Game) -> bool;

    /// Names the property in violation reports.
    fn description() -> &'static str;

    /// Reports a violation when the property does not hold.
    fn check(game: &Game) -> Option<InvariantViolation> {
        (!Self::holds(game)).then(|| InvariantViolation::new(Self::description()))
    }
}

/// A property that did not hold.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated property.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a violation report.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariants checked together, reporting every failure rather than the first.
pub trait InvariantSet {
    /// Collects the violations of every member, in order.
    fn violations(game: &Game) -> Vec<InvariantViolation>;

    /// Fails with every violation found.
    fn check_all(game: &Game) -> Result<(), Vec<InvariantViolation>> {
        let violations = Self::violations(game);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<A: Invariant, B: Invariant, C: Invariant> InvariantSet for (A, B, C) {
    fn violations(game: &Game) -> Vec<InvariantViolation> {
        [A::check(game), B::check(game), C::check(game)]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Roster, board contents and round state.
pub type GameInvariants = (RosterInvariant, BoardContentsInvariant, RoundStateInvariant);
