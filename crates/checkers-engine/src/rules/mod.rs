//! Rule set abstraction for checkers variants.
//!
//! This module provides the [`RuleSet`] trait which abstracts over the parts of
//! the game that differ between rule sets: the starting board, which capture
//! chains are offered, and when the game is over.

mod standard;

pub use standard::StandardCheckers;

use crate::movegen;
use crate::Board;
use checkers_core::{Color, Move, Piece};
use std::fmt;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Black has no piece that can move.
    WhiteWins,
    /// White has no piece that can move.
    BlackWins,
    /// Neither side has a piece that can move.
    Stalemate,
}

impl GameResult {
    /// Returns the winning color, if any.
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::WhiteWins => Some(Color::White),
            GameResult::BlackWins => Some(Color::Black),
            GameResult::Stalemate => None,
        }
    }

    /// Returns the result of `color` winning.
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::WhiteWins => write!(f, "White wins"),
            GameResult::BlackWins => write!(f, "Black wins"),
            GameResult::Stalemate => write!(f, "Stalemate"),
        }
    }
}

/// Which capture chains are offered as moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapturePolicy {
    /// Every prefix of every chain is a move of its own.
    #[default]
    AllPrefixes,
    /// Only chains that cannot be extended by another jump.
    MaximalOnly,
}

/// Trait for implementing checkers variants.
///
/// # Example
///
/// ```
/// use checkers_engine::StandardCheckers;
/// use checkers_engine::rules::RuleSet;
/// use checkers_core::Color;
///
/// let board = StandardCheckers::default().initial_board();
/// let moves = StandardCheckers::default().generate_moves(&board, Color::White);
/// assert_eq!(moves.len(), 7);
/// ```
pub trait RuleSet {
    /// Returns the starting board for this variant.
    fn initial_board(&self) -> Board;

    /// Returns which capture chains are offered.
    fn capture_policy(&self) -> CapturePolicy;

    /// Generates every move for one piece.
    fn piece_moves(&self, board: &Board, piece: &Piece) -> Vec<Move> {
        movegen::piece_moves_with(board, piece, self.capture_policy())
    }

    /// Generates every move for every piece of one color.
    fn generate_moves(&self, board: &Board, color: Color) -> Vec<Move> {
        movegen::generate_moves(board, color, self.capture_policy())
    }

    /// Returns true if the move is among the moves of the piece on its start square.
    fn is_legal(&self, board: &Board, m: &Move) -> bool {
        board
            .piece_at(m.start())
            .is_some_and(|piece| self.piece_moves(board, piece).contains(m))
    }

    /// Returns the game result if the game is over, otherwise `None`.
    fn game_result(&self, board: &Board) -> Option<GameResult>;

    /// Returns true if the game is over.
    fn is_game_over(&self, board: &Board) -> bool {
        self.game_result(board).is_some()
    }
}
