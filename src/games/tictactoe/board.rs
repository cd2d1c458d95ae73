//! Copy-on-write 3x3 board.

use super::error::{Axis, GameError, IndexError, ValidationError};
use super::rules;
use super::types::Cell;
use super::validation::ensure;
use serde::Serialize;
use tracing::{debug, instrument};

/// The only board size the game supports.
pub const BOARD_SIZE: usize = 3;

/// Symbol marking an empty cell unless configured otherwise.
pub const DEFAULT_FILLER: char = '_';

/// Tic-tac-toe board.
///
/// Boards are never modified in place: [`Board::set_cell`] copies the grid
/// and returns a new board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: usize,
    filler: char,
    grid: Vec<Vec<char>>,
}

impl Board {
    /// Creates an empty board of `size` filled with `filler`.
    #[instrument]
    pub fn new(size: usize, filler: char) -> Result<Self, ValidationError> {
        Self::from_grid(size, filler, vec![vec![filler; size]; size])
    }

    /// Creates a board from an existing grid, validating its shape.
    #[instrument(skip(grid))]
    pub fn from_grid(
        size: usize,
        filler: char,
        grid: Vec<Vec<char>>,
    ) -> Result<Self, ValidationError> {
        ensure(size == BOARD_SIZE, || {
            format!("Board size must be {}, got {}", BOARD_SIZE, size)
        })?;
        ensure(!filler.is_control() && !filler.is_whitespace(), || {
            format!("Board filler must be a visible character, got {:?}", filler)
        })?;
        ensure(grid.len() == size, || {
            format!("Board must have {} rows, got {}", size, grid.len())
        })?;
        for (row, cells) in grid.iter().enumerate() {
            ensure(cells.len() == size, || {
                format!("Board row {} must have {} cells, got {}", row, size, cells.len())
            })?;
        }
        Ok(Self { size, filler, grid })
    }

    /// Returns the board size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the empty-cell symbol.
    pub fn filler(&self) -> char {
        self.filler
    }

    /// Returns the grid rows.
    pub fn rows(&self) -> &[Vec<char>] {
        &self.grid
    }

    /// Iterates every cell with its coordinate, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, char)> + '_ {
        self.grid.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, symbol)| (Cell::new(row, col), *symbol))
        })
    }

    /// Fails with [`IndexError`] unless both coordinates are in `[0, size)`.
    pub fn check_index(&self, row: usize, col: usize) -> Result<Cell, IndexError> {
        if row >= self.size {
            return Err(IndexError::new(Axis::Row, row, self.size));
        }
        if col >= self.size {
            return Err(IndexError::new(Axis::Column, col, self.size));
        }
        Ok(Cell::new(row, col))
    }

    /// Returns the symbol at `(row, col)`.
    pub fn get_cell(&self, row: usize, col: usize) -> Result<char, IndexError> {
        let cell = self.check_index(row, col)?;
        Ok(self.symbol_at(cell))
    }

    /// Returns true if `(row, col)` holds the filler.
    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, IndexError> {
        Ok(self.get_cell(row, col)? == self.filler)
    }

    /// Returns a new board with `symbol` placed at `(row, col)`.
    ///
    /// Placement only happens on an empty cell; on an occupied cell the new
    /// board equals this one.
    #[instrument(skip(self))]
    pub fn set_cell(&self, row: usize, col: usize, symbol: char) -> Result<Self, GameError> {
        let cell = self.check_index(row, col)?;
        let mut grid = self.grid.clone();
        if grid[cell.row][cell.col] == self.filler {
            grid[cell.row][cell.col] = symbol;
        } else {
            debug!(%cell, "Cell already played, placement ignored");
        }
        Ok(Self::from_grid(self.size, self.filler, grid)?)
    }

    /// Returns true if the move at `(row, col)` completes a line of `symbol`.
    #[instrument(skip(self))]
    pub fn has_win(&self, row: usize, col: usize, symbol: char) -> Result<bool, IndexError> {
        let cell = self.check_index(row, col)?;
        Ok(rules::has_win(self, cell, symbol))
    }

    /// Returns true if the move at `(row, col)` filled the board without winning.
    #[instrument(skip(self))]
    pub fn has_tie(&self, row: usize, col: usize, symbol: char) -> Result<bool, IndexError> {
        let cell = self.check_index(row, col)?;
        Ok(rules::has_tie(self, cell, symbol))
    }

    /// Returns the cells of every line through `(row, col)` filled with `symbol`.
    #[instrument(skip(self))]
    pub fn get_win_cells(
        &self,
        row: usize,
        col: usize,
        symbol: char,
    ) -> Result<Vec<Cell>, IndexError> {
        let cell = self.check_index(row, col)?;
        Ok(rules::win_cells(self, cell, symbol))
    }

    /// Returns true if no cell holds the filler.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns a cleared board with the same size and filler.
    #[instrument(skip(self))]
    pub fn reset_board(&self) -> Result<Self, ValidationError> {
        Self::new(self.size, self.filler)
    }

    /// Reads a cell already known to be in range.
    pub(super) fn symbol_at(&self, cell: Cell) -> char {
        self.grid[cell.row][cell.col]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            filler: DEFAULT_FILLER,
            grid: vec![vec![DEFAULT_FILLER; BOARD_SIZE]; BOARD_SIZE],
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.grid.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f, "{}", vec!["-"; self.size].join("+"))?;
            }
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            write!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}
