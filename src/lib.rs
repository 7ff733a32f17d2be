//! Conway Life - Game of Life on a finite 2D board
//!
//! The core is [`advance`], a pure function from one generation to the next.
//! Around it sit a board loader, a frame renderer and a simulation driver
//! used by the `conway-life` binary.

pub mod automaton;
pub mod board;
pub mod config;
pub mod error;
pub mod loader;
pub mod patterns;
pub mod render;
pub mod simulation;

#[cfg(test)]
mod tests;

pub use automaton::{advance, advance_rows, Boundary, StepEngine};
pub use board::{Board, ALIVE, DEAD};
pub use config::SimConfig;
pub use error::{LifeError, Result};
pub use loader::BoardLoader;
pub use patterns::Pattern;
pub use render::{FrameRenderer, RenderOptions, Renderer};
pub use simulation::Simulation;
