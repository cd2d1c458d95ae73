//! Tie detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use super::win::has_win;
use tracing::instrument;

/// Checks if the board is full (no cell holds the filler).
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|(_, symbol)| symbol != board.filler())
}

/// Checks whether the move at `cell` ended the round in a tie.
///
/// A move that wins is never a tie, even when it fills the last cell.
#[instrument(skip(board))]
pub fn has_tie(board: &Board, cell: Cell, symbol: char) -> bool {
    !has_win(board, cell, symbol) && is_full(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: [&str; 3]) -> Board {
        Board::from_grid(3, '_', rows.iter().map(|r| r.chars().collect()).collect()).unwrap()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::default()));
    }

    #[test]
    fn test_partial_board_not_tie() {
        let board = board(["xox", "oxo", "ox_"]);
        assert!(!is_full(&board));
        assert!(!has_tie(&board, Cell::new(2, 1), 'x'));
    }

    #[test]
    fn test_tie_detection() {
        // x o x / x o o / o x x
        let board = board(["xox", "xoo", "oxx"]);
        assert!(is_full(&board));
        assert!(has_tie(&board, Cell::new(2, 2), 'x'));
        assert!(!has_win(&board, Cell::new(2, 2), 'x'));
    }

    #[test]
    fn test_winning_last_move_is_not_tie() {
        // x fills the board and completes the bottom row.
        let board = board(["xoo", "oxx", "xxx"]);
        assert!(is_full(&board));
        assert!(!has_tie(&board, Cell::new(2, 2), 'x'));
    }
}
