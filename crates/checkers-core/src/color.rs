//! Player color representation.

use crate::BOARD_SIZE;

/// Represents the two players in checkers.
///
/// White starts on the low rows (y = 0..=2) and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Both colors, in turn order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the forward direction along y (+1 for White, -1 for Black).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Returns the row on which a man of this color is crowned.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => BOARD_SIZE as u8 - 1,
            Color::Black => 0,
        }
    }

    /// Returns true if a piece of this color starts on the given row.
    #[inline]
    pub const fn is_home_row(self, y: u8) -> bool {
        match self {
            Color::White => y < 3,
            Color::Black => y >= BOARD_SIZE as u8 - 3,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
