//! Cell contents and player colours.
//!
//! A cell is empty or holds one disc. The side to move is a `Player`,
//! which maps one way onto the cell colour it places.

use serde::{Deserialize, Serialize};

/// The contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Returns the single-character position-notation abbreviation.
    ///
    /// Empty cells have no letter in the notation (they are run-length
    /// encoded), so they map to `'.'`, which is also what `board` prints.
    pub const fn pos_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'b',
            Cell::White => 'w',
        }
    }

    /// Parses a disc from its position-notation abbreviation.
    pub fn from_pos_char(c: char) -> Option<Cell> {
        match c {
            'b' => Some(Cell::Black),
            'w' => Some(Cell::White),
            _ => None,
        }
    }

    /// Returns the uppercase character used in the printed grid.
    pub const fn display_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }

    /// Returns the player owning the disc on this cell, if any.
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }
}

/// One of the two sides. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    White,
}

/// Both players in move order.
pub const ALL_PLAYERS: [Player; 2] = [Player::Black, Player::White];

impl Player {
    /// Returns the other side.
    pub const fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Returns the disc colour this player places.
    pub const fn cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }

    /// Returns the lowercase name used in protocol and JSON output.
    pub const fn name(self) -> &'static str {
        match self {
            Player::Black => "black",
            Player::White => "white",
        }
    }

    /// Returns the side-to-move character of the position notation.
    pub const fn pos_char(self) -> char {
        match self {
            Player::Black => 'b',
            Player::White => 'w',
        }
    }

    /// Parses a side-to-move character.
    pub fn from_pos_char(c: char) -> Option<Player> {
        match c {
            'b' => Some(Player::Black),
            'w' => Some(Player::White),
            _ => None,
        }
    }

    /// Parses a player from its lowercase name.
    pub fn from_name(s: &str) -> Option<Player> {
        match s {
            "black" => Some(Player::Black),
            "white" => Some(Player::White),
            _ => None,
        }
    }
}
