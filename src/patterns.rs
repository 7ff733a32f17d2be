//! Built-in seed patterns.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::{LifeError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    Block,
    Blinker,
    Toad,
    Beacon,
    Glider,
    RPentomino,
}

impl Pattern {
    pub const ALL: [Pattern; 6] = [
        Pattern::Block,
        Pattern::Blinker,
        Pattern::Toad,
        Pattern::Beacon,
        Pattern::Glider,
        Pattern::RPentomino,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Block => "block",
            Pattern::Blinker => "blinker",
            Pattern::Toad => "toad",
            Pattern::Beacon => "beacon",
            Pattern::Glider => "glider",
            Pattern::RPentomino => "r-pentomino",
        }
    }

    /// Alive cells as `(row, col)` offsets from the pattern's top-left corner.
    pub fn cells(&self) -> &'static [(usize, usize)] {
        match self {
            Pattern::Block => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            Pattern::Blinker => &[(0, 0), (0, 1), (0, 2)],
            Pattern::Toad => &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
            Pattern::Beacon => &[
                (0, 0),
                (0, 1),
                (1, 0),
                (1, 1),
                (2, 2),
                (2, 3),
                (3, 2),
                (3, 3),
            ],
            Pattern::Glider => &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
            Pattern::RPentomino => &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
        }
    }

    /// Bounding box as `(rows, cols)`.
    pub fn extent(&self) -> (usize, usize) {
        self.cells().iter().fold((0, 0), |(h, w), &(r, c)| {
            (h.max(r + 1), w.max(c + 1))
        })
    }

    /// Mark the pattern alive with its top-left corner at `(row, col)`.
    /// Nothing is written unless the whole pattern fits.
    pub fn stamp(&self, board: &mut Board, row: usize, col: usize) -> Result<()> {
        let (h, w) = self.extent();
        if row + h > board.rows() || col + w > board.cols() {
            return Err(LifeError::PatternOutOfBounds {
                pattern: self.name(),
                rows: board.rows(),
                cols: board.cols(),
            });
        }

        for &(r, c) in self.cells() {
            board.set(row + r, col + c, true)?;
        }
        Ok(())
    }

    /// Stamp the pattern as close to the middle of the board as it fits.
    pub fn stamp_centered(&self, board: &mut Board) -> Result<()> {
        let (h, w) = self.extent();
        let row = board.rows().saturating_sub(h) / 2;
        let col = board.cols().saturating_sub(w) / 2;
        self.stamp(board, row, col)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Pattern::ALL
            .into_iter()
            .find(|p| p.name() == wanted || p.name().replace('-', "") == wanted)
            .ok_or_else(|| LifeError::UnknownPattern(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::advance;

    #[test]
    fn test_from_str() {
        assert_eq!("glider".parse::<Pattern>().unwrap(), Pattern::Glider);
        assert_eq!("Blinker".parse::<Pattern>().unwrap(), Pattern::Blinker);
        assert_eq!("rpentomino".parse::<Pattern>().unwrap(), Pattern::RPentomino);
        assert!(matches!(
            "pulsar".parse::<Pattern>(),
            Err(LifeError::UnknownPattern(name)) if name == "pulsar"
        ));
    }

    #[test]
    fn test_extent() {
        assert_eq!(Pattern::Block.extent(), (2, 2));
        assert_eq!(Pattern::Blinker.extent(), (1, 3));
        assert_eq!(Pattern::Beacon.extent(), (4, 4));
    }

    #[test]
    fn test_stamp_out_of_bounds_writes_nothing() {
        let mut board = Board::new(4, 4);
        let err = Pattern::Glider.stamp(&mut board, 2, 2).unwrap_err();
        assert!(matches!(err, LifeError::PatternOutOfBounds { pattern: "glider", .. }));
        assert_eq!(board.alive_count(), 0);
    }

    #[test]
    fn test_stamp_centered() {
        let mut board = Board::new(5, 5);
        Pattern::Blinker.stamp_centered(&mut board).unwrap();
        assert_eq!(board, Board::from_alive(5, 5, &[(2, 1), (2, 2), (2, 3)]).unwrap());
    }

    #[test]
    fn test_oscillators_have_period_two() {
        for pattern in [Pattern::Blinker, Pattern::Toad, Pattern::Beacon] {
            let mut board = Board::new(8, 8);
            pattern.stamp(&mut board, 2, 2).unwrap();

            let gen1 = advance(&board);
            assert_ne!(gen1, board, "{pattern} should change after one step");
            assert_eq!(advance(&gen1), board, "{pattern} should have period 2");
        }
    }
}
