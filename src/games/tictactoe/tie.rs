//! Tie counter value type.

use super::error::ValidationError;
use super::validation::ensure;
use serde::Serialize;

/// Drawn-round bookkeeping.
///
/// The score accumulates across rounds; the flag marks whether the current
/// round ended in a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Tie {
    score: u32,
    is_tie: bool,
}

impl Tie {
    /// Creates a tie counter with no drawn rounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of drawn rounds.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns true if the current round ended in a tie.
    pub fn is_tie(&self) -> bool {
        self.is_tie
    }

    /// Returns a copy with the tie flag set to `is_tie`.
    pub fn set_is_tie(&self, is_tie: bool) -> Result<Self, ValidationError> {
        Self { is_tie, ..*self }.validated()
    }

    /// Returns a copy with one more drawn round.
    pub fn increment_score(&self) -> Result<Self, ValidationError> {
        let score = self
            .score
            .checked_add(1)
            .ok_or_else(|| ValidationError::new("Tie score overflowed"))?;
        Self { score, ..*self }.validated()
    }

    /// Returns a copy with a zero score and the tie flag cleared.
    pub fn reset_score(&self) -> Result<Self, ValidationError> {
        Self {
            score: 0,
            is_tie: false,
        }
        .validated()
    }

    /// Returns a copy with the tie flag cleared.
    pub fn reset_is_tie(&self) -> Result<Self, ValidationError> {
        self.set_is_tie(false)
    }

    /// Returns a fresh tie counter.
    pub fn reset_tie(&self) -> Result<Self, ValidationError> {
        Self::new().validated()
    }

    fn validated(self) -> Result<Self, ValidationError> {
        ensure(!self.is_tie || self.score > 0, || {
            "Round flagged as tie with a zero tie score".to_string()
        })?;
        Ok(self)
    }
}
