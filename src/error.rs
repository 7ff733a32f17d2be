//! Error type shared by every module in the crate.

use std::io::Error as IOError;
use toml::de::Error as TomlError;

#[derive(thiserror::Error, Debug)]
pub enum LifeError {
    #[error("Board row {row} has {found} cells but row 0 has {expected}.")]
    InvalidBoardShape {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Cell ({row}, {col}) holds {value}; cells must be 0 (dead) or 1 (alive).")]
    InvalidCellValue { row: usize, col: usize, value: u8 },
    #[error("A {rows}x{cols} board has more cells than can be addressed.")]
    BoardTooLarge { rows: usize, cols: usize },
    #[error("Board of {expected} cells was given {found} cell values.")]
    CellCountMismatch { expected: usize, found: usize },
    #[error("Cell ({row}, {col}) is outside a {rows}x{cols} board.")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("Pattern `{pattern}` does not fit on a {rows}x{cols} board at that position.")]
    PatternOutOfBounds {
        pattern: &'static str,
        rows: usize,
        cols: usize,
    },
    #[error("Unknown pattern `{0}`.")]
    UnknownPattern(String),
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("IO error")]
    Io(#[from] IOError),
    #[error("Invalid configuration: {0}")]
    Config(#[from] TomlError),
}

pub type Result<T> = std::result::Result<T, LifeError>;
