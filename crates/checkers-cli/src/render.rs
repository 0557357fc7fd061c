//! Terminal rendering of the board.

use checkers_core::{Move, Square, BOARD_SIZE};
use checkers_engine::Board;
use std::fmt::Write;

/// Renders the board with column letters on top and row numbers on the left.
///
/// Dark empty squares show as `.`; a square where one of `moves` ends shows the
/// move's 1-based number instead (the lowest, if several end there).
pub fn render_board(board: &Board, moves: &[Move]) -> String {
    let mut out = String::new();

    out.push_str("   ");
    for x in 0..BOARD_SIZE {
        let _ = write!(out, "{:>3}", (b'A' + x as u8) as char);
    }
    out.push('\n');

    for y in 0..BOARD_SIZE {
        let _ = write!(out, "{:>3}", y + 1);
        for x in 0..BOARD_SIZE {
            let cell = match Square::new(x as u8, y as u8) {
                Some(sq) => cell_text(board, sq, moves),
                None => String::new(),
            };
            let _ = write!(out, "{:>3}", cell);
        }
        out.push('\n');
    }
    out
}

fn cell_text(board: &Board, sq: Square, moves: &[Move]) -> String {
    if let Some(number) = moves.iter().position(|m| m.end() == sq) {
        return (number + 1).to_string();
    }
    match board.piece_at(sq) {
        Some(piece) => piece.to_char().to_string(),
        None if sq.is_playable() => ".".to_string(),
        None => String::new(),
    }
}

/// Lists moves one per line, numbered from 1.
pub fn render_move_list(moves: &[Move]) -> String {
    let mut out = String::new();
    for (i, m) in moves.iter().enumerate() {
        let _ = writeln!(out, "[{}] {}", i + 1, m);
    }
    out
}
