//! Position notation encoding and decoding.
//!
//! A compact single-line notation for a full position, modelled on chess
//! FEN: eight ranks separated by `/`, rank 1 (row 0) first, with `b` and
//! `w` for discs and the digits `1`-`8` for runs of empty cells, followed
//! by a space and the side to move.
//!
//! Starting position: `8/8/8/3wb3/3bw3/8/8/8 b`

use thiserror::Error;

use crate::board::{Board, Cell, Coord, Player, BOARD_SIZE};

/// The standard starting position, Black to move.
pub const START_POS: &str = "8/8/8/3wb3/3bw3/8/8/8 b";

/// Errors that can occur while parsing a position.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PositionError {
    #[error("expected '<ranks> <side>', got {0} fields")]
    WrongFieldCount(usize),

    #[error("expected 8 ranks separated by '/', got {0}")]
    WrongRankCount(usize),

    #[error("rank {rank} describes {cells} cells, expected 8")]
    WrongRankLength { rank: usize, cells: usize },

    #[error("invalid character '{0}' in rank")]
    InvalidCell(char),

    #[error("invalid side to move: '{0}'")]
    InvalidSide(String),
}

/// Parses a position string into a board and the side to move.
pub fn parse_position(s: &str) -> Result<(Board, Player), PositionError> {
    let fields: Vec<&str> = s.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(PositionError::WrongFieldCount(fields.len()));
    }

    let board = parse_ranks(fields[0])?;

    let side = fields[1];
    let mut chars = side.chars();
    let turn = match (chars.next(), chars.next()) {
        (Some(c), None) => Player::from_pos_char(c),
        _ => None,
    }
    .ok_or_else(|| PositionError::InvalidSide(side.to_string()))?;

    Ok((board, turn))
}

/// Parses the rank section.
fn parse_ranks(s: &str) -> Result<Board, PositionError> {
    let ranks: Vec<&str> = s.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err(PositionError::WrongRankCount(ranks.len()));
    }

    let mut board = Board::empty();
    for (row, rank) in ranks.iter().enumerate() {
        let mut col = 0usize;
        for c in rank.chars() {
            if let Some(run) = c.to_digit(10) {
                if run == 0 || run as usize > BOARD_SIZE {
                    return Err(PositionError::InvalidCell(c));
                }
                col += run as usize;
                continue;
            }
            let cell = Cell::from_pos_char(c).ok_or(PositionError::InvalidCell(c))?;
            // Overlong ranks are reported after the loop.
            if let Ok(at) = Coord::new(row, col) {
                board.set(at, cell);
            }
            col += 1;
        }
        if col != BOARD_SIZE {
            return Err(PositionError::WrongRankLength {
                rank: row + 1,
                cells: col,
            });
        }
    }
    Ok(board)
}

/// Encodes a board and side to move as a position string.
pub fn encode_position(board: &Board, turn: Player) -> String {
    let mut out = String::with_capacity(32);
    for (row, cells) in board.rows().enumerate() {
        if row > 0 {
            out.push('/');
        }
        let mut empty_run = 0u32;
        for cell in cells {
            if *cell == Cell::Empty {
                empty_run += 1;
                continue;
            }
            if empty_run > 0 {
                out.push(char::from_digit(empty_run, 10).unwrap_or('8'));
                empty_run = 0;
            }
            out.push(cell.pos_char());
        }
        if empty_run > 0 {
            out.push(char::from_digit(empty_run, 10).unwrap_or('8'));
        }
    }
    out.push(' ');
    out.push(turn.pos_char());
    out
}
