//! Board coordinates and compass directions.
//!
//! A `Coord` is always on the board: construction validates both
//! components against `BOARD_SIZE`. The algebraic form is a column letter
//! `a`-`h` followed by a row number `1`-`8`, so row 2 / col 3 is `d3`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Errors produced when building a coordinate from untrusted input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoordError {
    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfRange { row: usize, col: usize },

    #[error("invalid square notation: '{0}'")]
    InvalidNotation(String),
}

/// A validated on-board cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Creates a coordinate, rejecting anything outside `[0, 8)`.
    pub fn new(row: usize, col: usize) -> Result<Coord, CoordError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(CoordError::OutOfRange { row, col });
        }
        Ok(Coord {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Builds a coordinate from a row-major index in `[0, 64)`.
    pub fn from_index(index: usize) -> Option<Coord> {
        if index >= CELL_COUNT {
            return None;
        }
        Some(Coord {
            row: (index / BOARD_SIZE) as u8,
            col: (index % BOARD_SIZE) as u8,
        })
    }

    pub const fn row(self) -> usize {
        self.row as usize
    }

    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index, `row * 8 + col`.
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Returns the neighbouring coordinate in `dir`, or `None` at the edge.
    pub fn step(self, dir: Direction) -> Option<Coord> {
        let r = self.row as i8 + dir.dr;
        let c = self.col as i8 + dir.dc;
        if r < 0 || c < 0 || r >= BOARD_SIZE as i8 || c >= BOARD_SIZE as i8 {
            return None;
        }
        Some(Coord {
            row: r as u8,
            col: c as u8,
        })
    }

    /// Iterates over every coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..CELL_COUNT).filter_map(Coord::from_index)
    }

    /// Walks outward from (but excluding) this coordinate in `dir`
    /// until the board edge.
    pub fn ray(self, dir: Direction) -> Ray {
        Ray { next: self.step(dir), dir }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

impl FromStr for Coord {
    type Err = CoordError;

    /// Parses algebraic notation such as `d3`. Case-insensitive column.
    fn from_str(s: &str) -> Result<Coord, CoordError> {
        let invalid = || CoordError::InvalidNotation(s.to_string());
        let mut chars = s.chars();
        let col_char = chars.next().ok_or_else(invalid)?.to_ascii_lowercase();
        let row_str = chars.as_str();
        if !('a'..='h').contains(&col_char) || row_str.len() != 1 {
            return Err(invalid());
        }
        let row: usize = row_str.parse().map_err(|_| invalid())?;
        if row == 0 {
            return Err(invalid());
        }
        let col = col_char as usize - 'a' as usize;
        Coord::new(row - 1, col).map_err(|_| invalid())
    }
}

/// A compass offset `(dr, dc)` with both components in `{-1, 0, 1}`,
/// never both zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dr: i8,
    pub dc: i8,
}

/// The eight compass directions, clockwise from north-west.
pub const DIRECTIONS: [Direction; 8] = [
    Direction { dr: -1, dc: -1 },
    Direction { dr: -1, dc: 0 },
    Direction { dr: -1, dc: 1 },
    Direction { dr: 0, dc: 1 },
    Direction { dr: 1, dc: 1 },
    Direction { dr: 1, dc: 0 },
    Direction { dr: 1, dc: -1 },
    Direction { dr: 0, dc: -1 },
];

/// Iterator over the cells along one direction, see [`Coord::ray`].
#[derive(Debug, Clone)]
pub struct Ray {
    next: Option<Coord>,
    dir: Direction,
}

impl Iterator for Ray {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let current = self.next?;
        self.next = current.step(self.dir);
        Some(current)
    }
}
