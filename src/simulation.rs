//! Simulation driver: owns the current board and its generation counter.

use crate::automaton::StepEngine;
use crate::board::Board;
use crate::error::Result;
use crate::render::Renderer;

pub struct Simulation<R: Renderer> {
    board: Board,
    generation: u64,
    engine: StepEngine,
    renderer: R,
}

impl<R: Renderer> Simulation<R> {
    /// Start a simulation at generation 0. The initial board is rendered
    /// right away when the renderer is enabled.
    pub fn new(board: Board, engine: StepEngine, renderer: R) -> Result<Self> {
        let mut sim = Simulation {
            board,
            generation: 0,
            engine,
            renderer,
        };
        sim.render_current()?;
        Ok(sim)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Advance one generation and render it.
    pub fn step(&mut self) -> Result<()> {
        self.board = self.engine.advance(&self.board);
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            alive = self.board.alive_count(),
            "advanced"
        );
        self.render_current()
    }

    /// Advance `n_steps` generations, rendering each one.
    pub fn propagate(&mut self, n_steps: u64) -> Result<()> {
        tracing::info!(
            from = self.generation,
            steps = n_steps,
            rows = self.board.rows(),
            cols = self.board.cols(),
            boundary = ?self.engine.boundary(),
            "propagating"
        );
        for _ in 0..n_steps {
            self.step()?;
        }
        Ok(())
    }

    fn render_current(&mut self) -> Result<()> {
        if self.renderer.enabled() {
            self.renderer.render(&self.board, self.generation)?;
        }
        Ok(())
    }
}
