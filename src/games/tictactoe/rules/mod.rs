//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board around the most recent move. Rules are
//! separated from board storage so the board stays a plain value.

pub mod draw;
pub mod win;

pub use draw::{has_tie, is_full};
pub use win::{has_win, win_cells, winning_lines};
