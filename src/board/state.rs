//! Board grid representation.
//!
//! Holds the 8x8 grid of cells. The grid is a plain fixed-size array so the
//! board is trivially copyable and never allocates.

use super::cell::{Cell, Player};
use super::coord::{Coord, BOARD_SIZE};

/// The 8x8 playing grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

/// Disc counts for both colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

impl Score {
    /// Returns the count for one side.
    pub const fn of(self, player: Player) -> u8 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Number of occupied cells.
    pub const fn total(self) -> u8 {
        self.black + self.white
    }
}

impl Board {
    /// Creates a board with every cell empty.
    pub const fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates the standard starting position:
    /// d4 and e5 White, e4 and d5 Black.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }

    /// Clears the grid and places the four centre discs.
    pub fn reset(&mut self) {
        let lo = BOARD_SIZE / 2 - 1;
        let hi = BOARD_SIZE / 2;
        self.cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        self.cells[lo][lo] = Cell::White;
        self.cells[lo][hi] = Cell::Black;
        self.cells[hi][lo] = Cell::Black;
        self.cells[hi][hi] = Cell::White;
    }

    /// Returns the contents of a cell.
    pub fn get(&self, at: Coord) -> Cell {
        self.cells[at.row()][at.col()]
    }

    /// Overwrites a cell. Used by move application and position loading.
    pub fn set(&mut self, at: Coord, cell: Cell) {
        self.cells[at.row()][at.col()] = cell;
    }

    pub fn is_empty_at(&self, at: Coord) -> bool {
        self.get(at) == Cell::Empty
    }

    /// Iterates over the rows of the grid, row 0 first.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE]> + '_ {
        self.cells.iter()
    }

    /// Counts the discs of each colour.
    pub fn score(&self) -> Score {
        let mut score = Score::default();
        for cell in self.cells.iter().flatten() {
            match cell {
                Cell::Black => score.black += 1,
                Cell::White => score.white += 1,
                Cell::Empty => {}
            }
        }
        score
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| *c != Cell::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}
