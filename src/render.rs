//! Frame rendering: terminal display and per-generation bitmap snapshots.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use serde::Deserialize;

use crate::board::Board;
use crate::error::Result;

/// Receives every generation the simulation produces.
pub trait Renderer {
    fn render(&mut self, board: &Board, generation: u64) -> Result<()>;

    /// Whether frames should be produced at all.
    fn enabled(&self) -> bool {
        true
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Print each frame to the display writer.
    pub show: bool,
    /// Write each frame to `{output_dir}/{name_prefix}_{generation}.pbm`.
    pub save: bool,
    pub name_prefix: String,
    pub output_dir: PathBuf,
    /// Pixels per cell edge in saved frames.
    pub scale: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            show: false,
            save: true,
            name_prefix: "plot".to_string(),
            output_dir: PathBuf::from("plots"),
            scale: 1,
        }
    }
}

impl RenderOptions {
    /// Whether any rendering happens at all.
    pub fn enabled(&self) -> bool {
        self.show || self.save
    }
}

/// Path of the saved frame for `generation`.
pub fn frame_path(options: &RenderOptions, generation: u64) -> PathBuf {
    options
        .output_dir
        .join(format!("{}_{}.pbm", options.name_prefix, generation))
}

/// Renders to a text writer (`show`) and to PBM files (`save`).
pub struct FrameRenderer<W: Write> {
    options: RenderOptions,
    display: W,
}

impl<W: Write> FrameRenderer<W> {
    pub fn new(options: RenderOptions, display: W) -> Self {
        FrameRenderer { options, display }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn into_display(self) -> W {
        self.display
    }

    fn show_frame(&mut self, board: &Board, generation: u64) -> Result<()> {
        writeln!(self.display, "Step {generation}")?;
        write!(self.display, "{board}")?;
        writeln!(self.display)?;
        self.display.flush()?;
        Ok(())
    }

    fn save_frame(&self, board: &Board, generation: u64) -> Result<PathBuf> {
        fs::create_dir_all(&self.options.output_dir)?;
        let path = frame_path(&self.options, generation);
        let mut out = BufWriter::new(File::create(&path)?);
        write_pbm(&mut out, board, generation, self.options.scale.max(1))?;
        out.flush()?;
        Ok(path)
    }
}

impl FrameRenderer<std::io::Stdout> {
    /// Renderer that shows frames on standard output.
    pub fn stdout(options: RenderOptions) -> Self {
        FrameRenderer::new(options, std::io::stdout())
    }
}

impl<W: Write> Renderer for FrameRenderer<W> {
    fn enabled(&self) -> bool {
        self.options.enabled()
    }

    fn render(&mut self, board: &Board, generation: u64) -> Result<()> {
        if self.options.show {
            self.show_frame(board, generation)?;
        }
        if self.options.save {
            let path = self.save_frame(board, generation)?;
            tracing::debug!(generation, path = %path.display(), "saved frame");
        }
        Ok(())
    }
}

/// Write a plain (P1) PBM image. Alive cells are black (`1`), and each cell
/// becomes a `scale`x`scale` block of pixels.
pub fn write_pbm<W: Write>(out: &mut W, board: &Board, generation: u64, scale: usize) -> Result<()> {
    writeln!(out, "P1")?;
    writeln!(out, "# Step {generation}")?;
    writeln!(out, "{} {}", board.cols() * scale, board.rows() * scale)?;

    for r in 0..board.rows() {
        let mut line = String::with_capacity(board.cols() * scale * 2);
        for c in 0..board.cols() {
            let bit = if board.is_alive(r, c) { "1 " } else { "0 " };
            for _ in 0..scale {
                line.push_str(bit);
            }
        }
        let line = line.trim_end();
        for _ in 0..scale {
            writeln!(out, "{line}")?;
        }
    }

    Ok(())
}
