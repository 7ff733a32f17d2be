//! Board value type: a rectangular grid of dead/alive cells.

use std::fmt;

use crate::error::{LifeError, Result};

pub const DEAD: u8 = 0;
pub const ALIVE: u8 = 1;

/// One generation of the automaton.
///
/// Cells are stored row-major in a flat buffer (`row * cols + col`).
/// The shape is fixed at construction; a 3x0 board stays 3x0.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<u8>, // 0 = dead, 1 = alive
}

impl Board {
    /// Create an all-dead board.
    ///
    /// # Panics
    /// If `rows * cols` overflows `usize`. Use [`Board::try_new`] for
    /// dimensions that come from user input.
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Ok(board) => board,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create an all-dead board, failing with `BoardTooLarge` when the cell
    /// count overflows.
    pub fn try_new(rows: usize, cols: usize) -> Result<Self> {
        let size = cell_count(rows, cols)?;
        Ok(Board {
            rows,
            cols,
            cells: vec![DEAD; size],
        })
    }

    /// Build a board from nested rows.
    ///
    /// Fails with `InvalidBoardShape` if any row differs in length from row 0,
    /// and with `InvalidCellValue` if a cell is neither 0 nor 1.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self> {
        let cols = check_shape(&rows)?;
        let num_rows = rows.len();

        let mut cells = Vec::with_capacity(num_rows * cols);
        for (r, row) in rows.into_iter().enumerate() {
            for (c, value) in row.into_iter().enumerate() {
                check_value(r, c, value)?;
                cells.push(value);
            }
        }

        Ok(Board {
            rows: num_rows,
            cols,
            cells,
        })
    }

    /// Build a board from a flat row-major buffer.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<u8>) -> Result<Self> {
        let expected = cell_count(rows, cols)?;
        if cells.len() != expected {
            return Err(LifeError::CellCountMismatch {
                expected,
                found: cells.len(),
            });
        }
        for (i, &value) in cells.iter().enumerate() {
            check_value(i / cols, i % cols, value)?;
        }
        Ok(Board { rows, cols, cells })
    }

    /// Build a board with the listed `(row, col)` cells alive.
    pub fn from_alive(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Result<Self> {
        let mut board = Board::try_new(rows, cols)?;
        for &(r, c) in alive {
            board.set(r, c, true)?;
        }
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True when the board has no cells at all (0 rows or 0 columns).
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat row-major cell buffer.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Cell value at `(row, col)`, or `None` outside the board.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Out-of-range coordinates read as dead.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(ALIVE)
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(LifeError::CellOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.cells[row * self.cols + col] = if alive { ALIVE } else { DEAD };
        Ok(())
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == ALIVE).count()
    }

    /// Copy the board out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|r| self.cells[r * self.cols..(r + 1) * self.cols].to_vec())
            .collect()
    }

    /// Internal constructor for buffers already known to be valid.
    pub(crate) fn from_raw(rows: usize, cols: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Board { rows, cols, cells }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                let ch = if self.is_alive(r, c) { 'O' } else { '.' };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Check that every row matches row 0 in length and return the column count.
pub(crate) fn check_shape(rows: &[Vec<u8>]) -> Result<usize> {
    let expected = rows.first().map_or(0, Vec::len);
    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != expected {
            return Err(LifeError::InvalidBoardShape {
                row,
                expected,
                found: cells.len(),
            });
        }
    }
    Ok(expected)
}

fn cell_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols)
        .ok_or(LifeError::BoardTooLarge { rows, cols })
}

#[inline]
fn check_value(row: usize, col: usize, value: u8) -> Result<()> {
    if value > ALIVE {
        return Err(LifeError::InvalidCellValue { row, col, value });
    }
    Ok(())
}
