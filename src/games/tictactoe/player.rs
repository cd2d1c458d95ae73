//! Player value type.

use super::error::ValidationError;
use super::validation::{MAX_NAME_LEN, ensure, player_name};
use serde::Serialize;
use tracing::instrument;

/// A participant in the game.
///
/// Players are immutable: every setter validates and returns a new player.
/// The identity, name and symbol are fixed for a session; turn and winner
/// flags and the score evolve through the copy-on-write setters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Player {
    id: u32,
    name: String,
    symbol: char,
    is_current: bool,
    is_winner: bool,
    score: u32,
}

impl Player {
    /// Creates a player with cleared flags and a zero score.
    #[instrument]
    pub fn new(id: u32, name: &str, symbol: char) -> Result<Self, ValidationError> {
        Self {
            id,
            name: player_name(name)?,
            symbol,
            is_current: false,
            is_winner: false,
            score: 0,
        }
        .validated()
    }

    /// Returns the player's id.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's symbol.
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Returns true if it is this player's turn.
    pub fn is_current(&self) -> bool {
        self.is_current
    }

    /// Returns true if this player won the current round.
    pub fn is_winner(&self) -> bool {
        self.is_winner
    }

    /// Returns the number of rounds this player has won.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns a copy with a new id.
    pub fn set_id(&self, id: u32) -> Result<Self, ValidationError> {
        Self { id, ..self.clone() }.validated()
    }

    /// Returns a copy with a new name, truncated to twelve characters.
    pub fn set_name(&self, name: &str) -> Result<Self, ValidationError> {
        Self {
            name: player_name(name)?,
            ..self.clone()
        }
        .validated()
    }

    /// Returns a copy with a new symbol.
    pub fn set_symbol(&self, symbol: char) -> Result<Self, ValidationError> {
        Self {
            symbol,
            ..self.clone()
        }
        .validated()
    }

    /// Returns a copy with the current-turn flag set to `is_current`.
    pub fn set_is_current(&self, is_current: bool) -> Result<Self, ValidationError> {
        Self {
            is_current,
            ..self.clone()
        }
        .validated()
    }

    /// Returns a copy that waits for the next turn.
    pub fn set_is_next(&self) -> Result<Self, ValidationError> {
        self.set_is_current(false)
    }

    /// Returns a copy with the winner flag set to `is_winner`.
    pub fn set_is_winner(&self, is_winner: bool) -> Result<Self, ValidationError> {
        Self {
            is_winner,
            ..self.clone()
        }
        .validated()
    }

    /// Returns a copy with one more round won.
    pub fn increment_score(&self) -> Result<Self, ValidationError> {
        let score = self.score.checked_add(1).ok_or_else(|| {
            ValidationError::new(format!("Score of player {} overflowed", self.id))
        })?;
        Self {
            score,
            ..self.clone()
        }
        .validated()
    }

    /// Returns a copy with the winner flag cleared.
    pub fn reset_is_winner(&self) -> Result<Self, ValidationError> {
        self.set_is_winner(false)
    }

    /// Returns a copy with a zero score and the winner flag cleared.
    pub fn reset_score(&self) -> Result<Self, ValidationError> {
        Self {
            score: 0,
            is_winner: false,
            ..self.clone()
        }
        .validated()
    }

    /// Checks every field, not only the one a setter changed.
    fn validated(self) -> Result<Self, ValidationError> {
        ensure(!self.name.is_empty(), || {
            format!("Player {} has an empty name", self.id)
        })?;
        ensure(
            self.name.chars().count() <= MAX_NAME_LEN,
            || format!("Player {} name {:?} is too long", self.id, self.name),
        )?;
        ensure(
            !self.symbol.is_control() && !self.symbol.is_whitespace(),
            || format!("Player {} symbol {:?} is not visible", self.id, self.symbol),
        )?;
        ensure(!self.is_winner || self.score > 0, || {
            format!("Player {} is flagged winner with a zero score", self.id)
        })?;
        Ok(self)
    }
}
