//! Two-player tic-tac-toe with immutable state and round scoring.

mod board;
mod error;
mod game;
mod intent;
mod observer;
mod player;
mod render;
mod tie;
mod types;
mod validation;

pub mod invariants;
pub mod rules;

pub use board::{BOARD_SIZE, Board, DEFAULT_FILLER};
pub use error::{Axis, GameError, IndexError, ValidationError};
pub use game::{
    DEFAULT_PLAYER1_NAME, DEFAULT_PLAYER1_SYMBOL, DEFAULT_PLAYER2_NAME, DEFAULT_PLAYER2_SYMBOL,
    Game, RoundStatus,
};
pub use intent::{Intent, ParseIntentError};
pub use invariants::{Invariant, InvariantSet, InvariantViolation};
pub use observer::{Observer, ObserverList, SharedObserver, shared};
pub use player::Player;
pub use render::{render_scoreboard, render_status, render_text};
pub use tie::Tie;
pub use types::{Cell, Line};
pub use validation::{MAX_NAME_LEN, player_name, single_char};
