//! Game configuration loaded from TOML.

use crate::games::tictactoe::{
    BOARD_SIZE, Board, DEFAULT_FILLER, DEFAULT_PLAYER1_NAME, DEFAULT_PLAYER1_SYMBOL,
    DEFAULT_PLAYER2_NAME, DEFAULT_PLAYER2_SYMBOL, Game, Player, ValidationError, single_char,
};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Names and symbols for a game session.
///
/// Every key is optional in the file; missing keys take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Name of player 1.
    player1_name: String,

    /// Name of player 2.
    player2_name: String,

    /// Symbol of player 1 (one character).
    player1_symbol: String,

    /// Symbol of player 2 (one character).
    player2_symbol: String,

    /// Symbol for empty cells (one character).
    filler: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player1_name: DEFAULT_PLAYER1_NAME.to_string(),
            player2_name: DEFAULT_PLAYER2_NAME.to_string(),
            player1_symbol: DEFAULT_PLAYER1_SYMBOL.to_string(),
            player2_symbol: DEFAULT_PLAYER2_SYMBOL.to_string(),
            filler: DEFAULT_FILLER.to_string(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            player1 = %config.player1_name,
            player2 = %config.player2_name,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Returns a copy with player names overridden where given.
    #[instrument(skip(self))]
    pub fn with_names(self, player1: Option<String>, player2: Option<String>) -> Self {
        Self {
            player1_name: player1.unwrap_or(self.player1_name),
            player2_name: player2.unwrap_or(self.player2_name),
            ..self
        }
    }

    /// Builds a new game from this configuration.
    ///
    /// Symbols and filler must be single characters, names non-empty.
    #[instrument(skip(self))]
    pub fn new_game(&self) -> Result<Game, ValidationError> {
        let filler = single_char("filler", &self.filler)?;
        let player1 = Player::new(
            1,
            &self.player1_name,
            single_char("player1_symbol", &self.player1_symbol)?,
        )?;
        let player2 = Player::new(
            2,
            &self.player2_name,
            single_char("player2_symbol", &self.player2_symbol)?,
        )?;
        Game::with_players(player1, player2, Board::new(BOARD_SIZE, filler)?)
    }
}

impl Game {
    /// Builds a new game from `config`.
    pub fn from_config(config: &GameConfig) -> Result<Self, ValidationError> {
        config.new_game()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
