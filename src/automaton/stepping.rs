//! Conway stepping (B3/S23) over a 2D board.
//!
//! All reads come from the immutable generation-N board and all writes go to a
//! fresh generation-N+1 buffer, so cell updates are simultaneous.

use rayon::prelude::*;

use super::grid::{count_neighbors, Boundary};
use crate::board::{Board, ALIVE, DEAD};
use crate::error::Result;

/// Apply Conway's rules to one cell.
///
/// - Survival: an alive cell with 2 or 3 neighbours stays alive
/// - Birth: a dead cell with exactly 3 neighbours becomes alive
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> u8 {
    match (alive, neighbors) {
        (true, 2) | (true, 3) | (false, 3) => ALIVE,
        _ => DEAD,
    }
}

/// Step a board forward one generation with dead boundaries.
pub fn advance(board: &Board) -> Board {
    step_sequential(board, Boundary::Dead)
}

/// Step a nested-row grid forward one generation.
///
/// Ragged input is rejected before any cell is computed.
pub fn advance_rows(rows: &[Vec<u8>]) -> Result<Vec<Vec<u8>>> {
    let board = Board::from_rows(rows.to_vec())?;
    Ok(advance(&board).to_rows())
}

/// Stateless stepping engine with a configurable boundary and optional
/// row-parallel execution.
pub struct StepEngine {
    boundary: Boundary,

    /// Rayon thread pool, present only when more than one thread was requested.
    thread_pool: Option<rayon::ThreadPool>,
}

impl StepEngine {
    /// Create a single-threaded engine.
    pub fn new(boundary: Boundary) -> Self {
        StepEngine {
            boundary,
            thread_pool: None,
        }
    }

    /// Create an engine that spreads rows across `num_threads` workers.
    /// 0 or 1 thread means sequential stepping.
    pub fn with_threads(boundary: Boundary, num_threads: usize) -> Self {
        if num_threads <= 1 {
            return StepEngine::new(boundary);
        }

        let thread_pool = match rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
        {
            Ok(pool) => Some(pool),
            Err(err) => {
                tracing::warn!(num_threads, %err, "thread pool unavailable, stepping sequentially");
                None
            }
        };

        StepEngine {
            boundary,
            thread_pool,
        }
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Number of worker threads used per step.
    pub fn threads(&self) -> usize {
        self.thread_pool
            .as_ref()
            .map_or(1, rayon::ThreadPool::current_num_threads)
    }

    /// Compute the next generation. The input board is left untouched.
    pub fn advance(&self, board: &Board) -> Board {
        match &self.thread_pool {
            Some(pool) => step_parallel(board, self.boundary, pool),
            None => step_sequential(board, self.boundary),
        }
    }
}

impl Default for StepEngine {
    fn default() -> Self {
        StepEngine::new(Boundary::Dead)
    }
}

fn step_sequential(board: &Board, boundary: Boundary) -> Board {
    if board.is_empty() {
        return board.clone();
    }

    let cols = board.cols();
    let mut next_cells = vec![DEAD; board.cells().len()];
    for (r, row) in next_cells.chunks_mut(cols).enumerate() {
        fill_row(board, boundary, r, row);
    }

    Board::from_raw(board.rows(), cols, next_cells)
}

fn step_parallel(board: &Board, boundary: Boundary, pool: &rayon::ThreadPool) -> Board {
    if board.is_empty() {
        return board.clone();
    }

    let cols = board.cols();
    let mut next_cells = vec![DEAD; board.cells().len()];
    pool.install(|| {
        next_cells
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(r, row)| fill_row(board, boundary, r, row));
    });

    Board::from_raw(board.rows(), cols, next_cells)
}

#[inline]
fn fill_row(board: &Board, boundary: Boundary, r: usize, out: &mut [u8]) {
    for (c, cell) in out.iter_mut().enumerate() {
        let neighbors = count_neighbors(board, r, c, boundary);
        *cell = next_state(board.is_alive(r, c), neighbors);
    }
}
