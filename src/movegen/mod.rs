//! Legal move generation.
//!
//! A placement is legal when the target cell is empty and at least one of
//! the eight directions is capturing: a contiguous run of one or more
//! opponent discs closed off by a disc of the mover's colour. Running into
//! an empty cell or the board edge ends a direction without a capture.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Coord, Direction, Player, DIRECTIONS};

/// Returns the number of opponent discs captured in one direction when
/// `player` places at `from`, or 0 if the direction is not capturing.
///
/// Only the cells beyond `from` are inspected; `from` itself may hold
/// anything.
pub fn capture_len(board: &Board, from: Coord, dir: Direction, player: Player) -> usize {
    let own = player.cell();
    let opponent = player.opponent().cell();
    let mut seen = 0;

    for at in from.ray(dir) {
        let cell = board.get(at);
        if cell == opponent {
            seen += 1;
        } else if cell == own {
            return seen;
        } else {
            return 0;
        }
    }

    // Ran off the edge without a closing disc.
    0
}

/// Returns true if `player` may place a disc at `at`.
pub fn is_legal_move(board: &Board, at: Coord, player: Player) -> bool {
    if !board.is_empty_at(at) {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&dir| capture_len(board, at, dir, player) > 0)
}

/// Total number of discs a placement at `at` would flip. Zero for an
/// illegal placement.
pub fn flip_count(board: &Board, at: Coord, player: Player) -> usize {
    if !board.is_empty_at(at) {
        return 0;
    }
    DIRECTIONS
        .iter()
        .map(|&dir| capture_len(board, at, dir, player))
        .sum()
}

/// Every legal placement for `player`, in row-major order.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Coord> {
    Coord::all()
        .filter(|&at| is_legal_move(board, at, player))
        .collect()
}

/// Returns true if `player` has at least one legal placement.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    Coord::all().any(|at| is_legal_move(board, at, player))
}

/// Picks a uniformly random legal placement, or `None` if there is none.
pub fn random_move(board: &Board, player: Player, rng: &mut impl Rng) -> Option<Coord> {
    legal_moves(board, player).choose(rng).copied()
}
