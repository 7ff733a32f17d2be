//! Core automaton logic.
//!
//! `grid` holds the boundary policy and neighbour counting; `stepping`
//! applies Conway's rules to produce the next generation.

pub mod grid;
pub mod stepping;

pub use grid::{count_neighbors, in_bounds, index_of, Boundary};
pub use stepping::{advance, advance_rows, next_state, StepEngine};
