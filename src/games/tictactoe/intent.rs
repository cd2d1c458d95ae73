//! First-class user intents.
//!
//! Front ends translate input into an [`Intent`] and hand it to
//! [`Game::apply`]; the engine never sees keys, clicks or argument strings.

use super::error::GameError;
use super::game::Game;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A command a player can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Play the current player's symbol at a zero-based cell.
    Play {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
    },
    /// Clear the board and keep the scores.
    NewRound,
    /// Reset scores and start over with the same players.
    Restart,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Play { row, col } => write!(f, "{},{}", row, col),
            Intent::NewRound => write!(f, "new"),
            Intent::Restart => write!(f, "restart"),
        }
    }
}

/// An intent string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid intent {:?}: expected ROW,COL, `new` or `restart`", input)]
pub struct ParseIntentError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Intent {
    type Err = ParseIntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ParseIntentError {
            input: s.to_string(),
        };
        match s.to_ascii_lowercase().as_str() {
            "new" | "n" => Ok(Intent::NewRound),
            "restart" | "r" => Ok(Intent::Restart),
            other => {
                let (row, col) = other.split_once(',').ok_or_else(err)?;
                Ok(Intent::Play {
                    row: row.trim().parse().map_err(|_| err())?,
                    col: col.trim().parse().map_err(|_| err())?,
                })
            }
        }
    }
}

impl Game {
    /// Applies `intent`, returning the resulting game.
    #[instrument(skip(self))]
    pub fn apply(&self, intent: Intent) -> Result<Self, GameError> {
        match intent {
            Intent::Play { row, col } => self.play_turn(row, col),
            Intent::NewRound => Ok(self.start_new_round()?),
            Intent::Restart => Ok(self.restart()?),
        }
    }
}
