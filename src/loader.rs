//! Text board loading.
//!
//! Two layouts are accepted:
//! - digit grids, one row per line (`0 1 0`, `010` or `0,1,0`);
//! - plaintext `.cells` files, with `!` comment lines, `.` for dead and `O` or `*` for alive.
//!
//! Rows must all be the same length; nothing is padded.

use std::fs;
use std::path::Path;

use crate::board::{Board, ALIVE, DEAD};
use crate::error::{LifeError, Result};

pub struct BoardLoader;

impl BoardLoader {
    /// Read and parse a board file.
    pub fn load(path: impl AsRef<Path>) -> Result<Board> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let board = Self::parse(&text)?;
        tracing::debug!(
            path = %path.display(),
            rows = board.rows(),
            cols = board.cols(),
            alive = board.alive_count(),
            "loaded board"
        );
        Ok(board)
    }

    /// Parse a board from text.
    ///
    /// Blank lines before the first row and after the last are ignored. A
    /// blank line between rows is rejected rather than dropped.
    pub fn parse(text: &str) -> Result<Board> {
        let mut rows = Vec::new();
        let mut pending_blank = None;

        for (i, line) in text.lines().enumerate() {
            let line_no = i + 1;
            let line = line.trim_end();
            if line.starts_with('!') {
                continue;
            }
            if line.trim().is_empty() {
                if !rows.is_empty() && pending_blank.is_none() {
                    pending_blank = Some(line_no);
                }
                continue;
            }
            if let Some(blank) = pending_blank {
                return Err(LifeError::Parse {
                    line: blank,
                    message: "blank line between board rows".to_string(),
                });
            }
            let row = parse_row(line, line_no, rows.len())?;
            rows.push(row);
        }

        Board::from_rows(rows)
    }
}

fn parse_row(line: &str, line_no: usize, row_index: usize) -> Result<Vec<u8>> {
    let mut row = Vec::with_capacity(line.len());

    for ch in line.chars() {
        match ch {
            '0' | '.' => row.push(DEAD),
            '1' | 'O' | '*' => row.push(ALIVE),
            ' ' | '\t' | ',' => {}
            '2'..='9' => {
                return Err(LifeError::InvalidCellValue {
                    row: row_index,
                    col: row.len(),
                    value: ch as u8 - b'0',
                })
            }
            other => {
                return Err(LifeError::Parse {
                    line: line_no,
                    message: format!("unexpected character `{other}`"),
                })
            }
        }
    }

    Ok(row)
}
