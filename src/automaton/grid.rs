//! Boundary policy and neighbour counting helpers.

use serde::Deserialize;

use crate::board::Board;

/// How neighbours outside the grid are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    /// Cells outside the grid count as dead.
    #[default]
    Dead,
    /// Opposite edges are joined. Each neighbour offset wraps independently,
    /// so on an axis of length 1 or 2 a cell may be counted more than once.
    Toroidal,
}

/// Calculate the linear index for a 2D coordinate.
#[inline]
pub fn index_of(board: &Board, row: usize, col: usize) -> usize {
    row * board.cols() + col
}

/// Check if signed coordinates are within board bounds.
#[inline]
pub fn in_bounds(board: &Board, row: isize, col: isize) -> bool {
    row >= 0 && (row as usize) < board.rows() && col >= 0 && (col as usize) < board.cols()
}

/// Count alive neighbours using the Moore neighbourhood (8 neighbours).
pub fn count_neighbors(board: &Board, row: usize, col: usize, boundary: Boundary) -> u8 {
    let rows = board.rows() as isize;
    let cols = board.cols() as isize;
    let cells = board.cells();
    let mut count = 0;

    for dr in -1..=1 {
        for dc in -1..=1 {
            // Skip the center cell
            if dr == 0 && dc == 0 {
                continue;
            }

            let nr = row as isize + dr;
            let nc = col as isize + dc;

            match boundary {
                Boundary::Dead => {
                    if in_bounds(board, nr, nc) {
                        count += cells[index_of(board, nr as usize, nc as usize)];
                    }
                }
                Boundary::Toroidal => {
                    let wr = nr.rem_euclid(rows) as usize;
                    let wc = nc.rem_euclid(cols) as usize;
                    count += cells[index_of(board, wr, wc)];
                }
            }
        }
    }

    count
}
