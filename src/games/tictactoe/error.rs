//! Error types for the tic-tac-toe engine.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A value failed its invariant during construction.
///
/// Raised by every constructor in the engine; a failed construction never
/// falls back to a default value.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Validation error: {} at {}:{}", message, file, line)]
pub struct ValidationError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ValidationError {
    /// Creates a new validation error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Which coordinate of a cell was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Axis {
    /// Row index.
    #[strum(to_string = "Row")]
    Row,
    /// Column index.
    #[strum(to_string = "Column")]
    Column,
}

/// A row or column index fell outside `[0, size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("{} index {} out of range 0..{}", axis, index, size)]
pub struct IndexError {
    /// The offending coordinate.
    pub axis: Axis,
    /// The index that was requested.
    pub index: usize,
    /// The board size the index was checked against.
    pub size: usize,
}

impl IndexError {
    /// Creates a new index error.
    pub fn new(axis: Axis, index: usize, size: usize) -> Self {
        Self { axis, index, size }
    }
}

/// Any error raised by a game operation.
#[derive(Debug, Clone, PartialEq, Eq, Display, derive_more::From)]
pub enum GameError {
    /// A constructed value violated its invariant.
    #[display("{}", _0)]
    Validation(ValidationError),

    /// A coordinate was out of range.
    #[display("{}", _0)]
    Index(IndexError),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Validation(err) => Some(err),
            GameError::Index(err) => Some(err),
        }
    }
}
