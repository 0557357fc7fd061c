//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known values to validate the move generator.

use super::generate_moves;
use crate::rules::CapturePolicy;
use crate::Board;
use checkers_core::Color;

/// Counts the number of leaf nodes at the given depth with `side` to move.
pub fn perft(board: &Board, side: Color, depth: u32, policy: CapturePolicy) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_moves(board, side, policy);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for m in &moves {
        let mut next = board.clone();
        if next.play(m).is_err() {
            continue;
        }
        nodes += perft(&next, side.opposite(), depth - 1, policy);
    }
    nodes
}

/// Perft with divide - shows node count for each move at depth-1.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(
    board: &Board,
    side: Color,
    depth: u32,
    policy: CapturePolicy,
) -> Vec<(String, u64)> {
    let moves = generate_moves(board, side, policy);
    let mut results = Vec::with_capacity(moves.len());

    for m in &moves {
        let mut next = board.clone();
        if next.play(m).is_err() {
            continue;
        }
        let nodes = if depth > 1 {
            perft(&next, side.opposite(), depth - 1, policy)
        } else {
            1
        };
        results.push((m.to_notation(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
