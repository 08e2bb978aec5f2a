//! Move selection.
//!
//! Simple one-ply choosers used by the `go` command and self-play. None of
//! them look ahead; they differ only in how they rank the legal placements.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, Coord, Player, BOARD_SIZE};
use crate::movegen::{flip_count, legal_moves, random_move};

/// Classic square weights: corners are worth the most, the cells
/// diagonally next to a corner the least.
pub const SQUARE_WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown strategy '{0}' (expected random, greedy or positional)")]
pub struct UnknownStrategy(pub String);

/// How a side picks its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Uniform over the legal placements.
    #[default]
    Random,
    /// Most discs flipped.
    Greedy,
    /// Best square weight, then most discs flipped.
    Positional,
}

impl Strategy {
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::Greedy => "greedy",
            Strategy::Positional => "positional",
        }
    }

    /// Picks a placement for `player`, or `None` if it has to pass.
    /// Deterministic strategies break ties by row-major order.
    pub fn choose(self, board: &Board, player: Player, rng: &mut impl Rng) -> Option<Coord> {
        match self {
            Strategy::Random => random_move(board, player, rng),
            Strategy::Greedy => best_by(board, player, |_, flips| flips as i32),
            Strategy::Positional => best_by(board, player, |at, flips| {
                // Weights are far apart compared to the flip count, which
                // only separates equally weighted squares.
                square_weight(at) * 100 + flips as i32
            }),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Strategy, UnknownStrategy> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(Strategy::Random),
            "greedy" => Ok(Strategy::Greedy),
            "positional" => Ok(Strategy::Positional),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

/// Weight of a square in [`SQUARE_WEIGHTS`].
pub fn square_weight(at: Coord) -> i32 {
    SQUARE_WEIGHTS[at.row()][at.col()]
}

/// Returns the legal placement with the highest score; the first one in
/// row-major order wins ties.
fn best_by<F>(board: &Board, player: Player, score: F) -> Option<Coord>
where
    F: Fn(Coord, usize) -> i32,
{
    let mut best: Option<(Coord, i32)> = None;
    for at in legal_moves(board, player) {
        let s = score(at, flip_count(board, at, player));
        match best {
            Some((_, b)) if b >= s => {}
            _ => best = Some((at, s)),
        }
    }
    best.map(|(at, _)| at)
}
