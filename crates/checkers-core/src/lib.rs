//! Core types for checkers.
//!
//! This crate provides the fundamental types used across the checkers engine:
//! - [`Piece`] and [`Color`] for piece representation
//! - [`Square`] and the grid geometry helpers for board coordinates
//! - [`Move`] for steps and multi-jump chains
//! - Square and move text notation

mod color;
mod mov;
mod notation;
mod piece;
mod square;

pub use color::Color;
pub use mov::{Hop, Move};
pub use notation::{parse_square, NotationError};
pub use piece::Piece;
pub use square::{
    coordinates_from_index, index_from_coordinates, is_off_grid, is_playable_square, Square,
    BOARD_SIZE, NUM_SQUARES,
};
