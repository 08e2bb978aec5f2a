//! Move application.
//!
//! Places the mover's disc and flips every capturing run. Legality is the
//! caller's job: see [`crate::movegen::is_legal_move`].

use crate::board::{Board, Coord, Player, DIRECTIONS};
use crate::movegen::capture_len;

/// Places `player`'s disc at `at` and flips every opponent disc lying
/// strictly between `at` and the nearest own disc in each capturing
/// direction. Non-capturing directions are left untouched.
///
/// Does not check that the move is legal. Returns the flipped cells,
/// grouped by direction, nearest first.
pub fn apply_move(board: &mut Board, at: Coord, player: Player) -> Vec<Coord> {
    debug_assert!(board.is_empty_at(at), "apply_move on occupied cell {}", at);

    // Scan before placing so the runs are measured on the pre-move board.
    let runs: Vec<_> = DIRECTIONS
        .iter()
        .map(|&dir| (dir, capture_len(board, at, dir, player)))
        .filter(|&(_, n)| n > 0)
        .collect();

    board.set(at, player.cell());

    let mut flipped = Vec::new();
    for (dir, n) in runs {
        for cell in at.ray(dir).take(n) {
            board.set(cell, player.cell());
            flipped.push(cell);
        }
    }
    flipped
}
