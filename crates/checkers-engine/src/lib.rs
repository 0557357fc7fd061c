//! Checkers rules engine.
//!
//! This crate provides:
//! - [`Board`] - the 8x8 grid of optional occupants and move commitment
//! - Move generation: single steps and recursive jump chains per piece
//! - [`RuleSet`] - trait for checkers variants, with [`StandardCheckers`]
//! - [`Game`] - turn alternation, move validation, and end-of-game detection
//!
//! # Example
//!
//! ```
//! use checkers_core::Square;
//! use checkers_engine::{piece_moves, Board, Game};
//!
//! // Using the board directly
//! let mut board = Board::new();
//! let c3 = Square::new(2, 2).unwrap();
//! let mut piece = *board.piece_at(c3).unwrap();
//! let moves = piece_moves(&board, &piece);
//! board.commit_move(&moves[0], &mut piece).unwrap();
//!
//! // Using Game for turn management
//! let mut game = Game::new();
//! game.make_move_notation("c3-d4").unwrap();
//! game.make_move_notation("f6-e5").unwrap();
//! assert_eq!(game.ply_count(), 2);
//! ```

mod board;
mod game;
pub mod movegen;
pub mod rules;

pub use board::{Board, BoardError, CommitError};
pub use game::{Game, GameError};
pub use movegen::{
    generate_moves, jump_moves, movable_pieces, piece_moves, piece_moves_with, step_moves,
};
pub use rules::{CapturePolicy, GameResult, RuleSet, StandardCheckers};
