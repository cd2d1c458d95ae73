//! Strictly Rounds - two-player tic-tac-toe with round scoring
//!
//! The core is an immutable game engine: every move or round reset builds a
//! new, re-validated [`Game`] and notifies subscribed observers with it.
//!
//! # Architecture
//!
//! - **Games**: board, players, tie counter and the game state machine
//! - **Config**: TOML configuration for names, symbols and filler
//! - **Rendering**: plain-text snapshots shared by the front ends
//!
//! # Example
//!
//! ```
//! use strictly_rounds::{Game, RoundStatus, shared};
//!
//! # fn example() -> Result<(), strictly_rounds::GameError> {
//! let mut game = Game::with_names("Ada", "Grace")?;
//! game.add_observer(shared(|g: &Game| println!("{}", g.board())));
//!
//! let game = game.play_turn(0, 0)?.play_turn(1, 1)?;
//! assert_eq!(game.status(), RoundStatus::Playable);
//! assert_eq!(game.current_player().map(|p| p.name()), Some("Ada"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Axis, BOARD_SIZE, Board, Cell, DEFAULT_FILLER, DEFAULT_PLAYER1_NAME, DEFAULT_PLAYER1_SYMBOL,
    DEFAULT_PLAYER2_NAME, DEFAULT_PLAYER2_SYMBOL, Game, GameError, IndexError, Intent, Invariant,
    InvariantSet, InvariantViolation, Line, MAX_NAME_LEN, Observer, ObserverList,
    ParseIntentError, Player, RoundStatus, SharedObserver, Tie, ValidationError, player_name,
    render_scoreboard, render_status, render_text, shared, single_char,
};

// Crate-level exports - Rules and invariants
pub use games::tictactoe::{invariants, rules};
