//! Inline invariant checks shared by the value types.

use super::error::ValidationError;

/// Longest name a player may carry; longer names are truncated.
pub const MAX_NAME_LEN: usize = 12;

/// Fails with `message` unless `condition` holds.
#[track_caller]
pub fn ensure(condition: bool, message: impl FnOnce() -> String) -> Result<(), ValidationError> {
    if condition {
        Ok(())
    } else {
        Err(ValidationError::new(message()))
    }
}

/// Parses a string that must hold exactly one character.
#[track_caller]
pub fn single_char(field: &str, value: &str) -> Result<char, ValidationError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ValidationError::new(format!(
            "{} must be exactly one character, got {:?}",
            field, value
        ))),
    }
}

/// Truncates a player name to [`MAX_NAME_LEN`] characters, rejecting empty names.
#[track_caller]
pub fn player_name(value: &str) -> Result<String, ValidationError> {
    ensure(!value.is_empty(), || "Player name must not be empty".to_string())?;
    Ok(value.chars().take(MAX_NAME_LEN).collect())
}
