//! Core coordinate types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A `{row, col}` coordinate on the board, zero-based.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    derive_new::new,
)]
pub struct Cell {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four kinds of line that can pass through a cell.
///
/// Iteration order is the order win cells are reported in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
    strum::Display,
)]
pub enum Line {
    /// The cell's row.
    Row,
    /// The cell's column.
    Column,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// Returns true if this line passes through `cell` on a board of `size`.
    pub fn passes_through(self, cell: Cell, size: usize) -> bool {
        match self {
            Line::Row | Line::Column => true,
            Line::Diagonal => cell.row == cell.col,
            Line::AntiDiagonal => cell.row + cell.col + 1 == size,
        }
    }

    /// Returns the cells of this line through `cell`, in traversal order.
    ///
    /// Callers check [`Line::passes_through`] first; diagonals ignore `cell`.
    pub fn cells(self, cell: Cell, size: usize) -> Vec<Cell> {
        (0..size)
            .map(|i| match self {
                Line::Row => Cell::new(cell.row, i),
                Line::Column => Cell::new(i, cell.col),
                Line::Diagonal => Cell::new(i, i),
                Line::AntiDiagonal => Cell::new(i, size - 1 - i),
            })
            .collect()
    }
}
