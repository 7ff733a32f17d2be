use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use conway_life::{
    Board, BoardLoader, Boundary, FrameRenderer, Pattern, SimConfig, Simulation, StepEngine,
};

#[derive(Parser)]
#[command(about = "Conway's Game of Life on a finite board")]
pub struct LifeArgs {
    #[command(subcommand)]
    mode: LifeMode,
}

#[derive(Subcommand)]
pub enum LifeMode {
    /// Run a simulation and render each generation
    Run {
        #[command(flatten)]
        run_args: RunArgs,
    },
    /// List the built-in patterns
    Patterns,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum BoundaryArg {
    Dead,
    Toroidal,
}

impl From<BoundaryArg> for Boundary {
    fn from(arg: BoundaryArg) -> Self {
        match arg {
            BoundaryArg::Dead => Boundary::Dead,
            BoundaryArg::Toroidal => Boundary::Toroidal,
        }
    }
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Board file (digit grid or plaintext .cells)
    board: Option<PathBuf>,

    /// Built-in pattern to centre on an empty board instead of a file
    #[arg(long, conflicts_with = "board")]
    pattern: Option<String>,

    /// Rows of the pattern board
    #[arg(long, default_value_t = 20)]
    rows: usize,

    /// Columns of the pattern board
    #[arg(long, default_value_t = 20)]
    cols: usize,

    /// TOML config file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of generations to propagate
    #[arg(long)]
    steps: Option<u64>,

    /// Neighbour policy at the board edges
    #[arg(value_enum, long)]
    boundary: Option<BoundaryArg>,

    /// Worker threads per step
    #[arg(long)]
    threads: Option<usize>,

    /// Print every generation to stdout
    #[arg(long)]
    show: bool,

    /// Do not write frame files
    #[arg(long)]
    no_save: bool,

    /// File name prefix for saved frames
    #[arg(long)]
    prefix: Option<String>,

    /// Directory for saved frames
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Pixels per cell in saved frames
    #[arg(long)]
    scale: Option<usize>,
}

impl RunArgs {
    fn resolve_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => SimConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SimConfig::default(),
        };

        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if let Some(boundary) = self.boundary {
            config.boundary = boundary.into();
        }
        if let Some(threads) = self.threads {
            config.threads = threads;
        }
        if self.show {
            config.render.show = true;
        }
        if self.no_save {
            config.render.save = false;
        }
        if let Some(prefix) = &self.prefix {
            config.render.name_prefix = prefix.clone();
        }
        if let Some(out_dir) = &self.out_dir {
            config.render.output_dir = out_dir.clone();
        }
        if let Some(scale) = self.scale {
            config.render.scale = scale;
        }

        Ok(config)
    }

    fn initial_board(&self) -> Result<Board> {
        match (&self.board, &self.pattern) {
            (Some(path), _) => {
                BoardLoader::load(path).with_context(|| format!("loading board {}", path.display()))
            }
            (None, Some(name)) => {
                let pattern: Pattern = name.parse()?;
                let mut board = Board::try_new(self.rows, self.cols)?;
                pattern.stamp_centered(&mut board)?;
                Ok(board)
            }
            (None, None) => bail!("either a board file or --pattern is required"),
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn run(args: &RunArgs) -> Result<()> {
    let config = args.resolve_config()?;
    let board = args.initial_board()?;

    tracing::info!(
        rows = board.rows(),
        cols = board.cols(),
        alive = board.alive_count(),
        steps = config.steps,
        "starting simulation"
    );

    let engine = StepEngine::with_threads(config.boundary, config.threads);
    let renderer = FrameRenderer::stdout(config.render.clone());
    let mut sim = Simulation::new(board, engine, renderer)?;
    sim.propagate(config.steps)?;

    tracing::info!(
        generation = sim.generation(),
        alive = sim.board().alive_count(),
        "simulation finished"
    );
    if config.render.save {
        tracing::info!(dir = %config.render.output_dir.display(), "frames saved");
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let args = LifeArgs::parse();

    match args.mode {
        LifeMode::Run { run_args } => run(&run_args),
        LifeMode::Patterns => {
            for pattern in Pattern::ALL {
                let (rows, cols) = pattern.extent();
                println!("{:<12} {rows}x{cols}", pattern.name());
            }
            Ok(())
        }
    }
}
