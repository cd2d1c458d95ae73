//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Line};
use strum::IntoEnumIterator;
use tracing::{instrument, trace};

/// Returns the lines through `cell` that are entirely `symbol`.
///
/// Only lines through the move are inspected: a win can only be completed
/// by the most recent move.
#[instrument(skip(board))]
pub fn winning_lines(board: &Board, cell: Cell, symbol: char) -> Vec<Line> {
    let size = board.size();
    Line::iter()
        .filter(|line| line.passes_through(cell, size))
        .filter(|line| {
            line.cells(cell, size)
                .into_iter()
                .all(|c| board.symbol_at(c) == symbol)
        })
        .inspect(|line| trace!(%line, "Line complete"))
        .collect()
}

/// Returns true if `symbol` fills any line through `cell`.
pub fn has_win(board: &Board, cell: Cell, symbol: char) -> bool {
    !winning_lines(board, cell, symbol).is_empty()
}

/// Returns the cells of every winning line through `cell`.
///
/// Lines are reported in row, column, diagonal, anti-diagonal order. A cell
/// shared by two winning lines is listed once, at its first occurrence.
#[instrument(skip(board))]
pub fn win_cells(board: &Board, cell: Cell, symbol: char) -> Vec<Cell> {
    let mut cells: Vec<Cell> = Vec::new();
    for line in winning_lines(board, cell, symbol) {
        for c in line.cells(cell, board.size()) {
            if !cells.contains(&c) {
                cells.push(c);
            }
        }
    }
    cells
}
