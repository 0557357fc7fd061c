//! Checkers piece representation.

use crate::{Color, Square};

/// A single occupant of the board: a man or a king of one color.
///
/// Pieces are plain values. The board owns the authoritative copy of every
/// piece on it; a copy held elsewhere goes stale once a move is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    square: Square,
    color: Color,
    king: bool,
}

impl Piece {
    /// Creates an uncrowned piece (a man).
    #[inline]
    pub const fn new(square: Square, color: Color) -> Self {
        Piece {
            square,
            color,
            king: false,
        }
    }

    /// Creates a crowned piece.
    #[inline]
    pub const fn king(square: Square, color: Color) -> Self {
        Piece {
            square,
            color,
            king: true,
        }
    }

    /// Returns the square this piece believes it stands on.
    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    /// Returns `(x, y)`.
    #[inline]
    pub const fn coordinates(&self) -> (u8, u8) {
        self.square.coordinates()
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn is_king(&self) -> bool {
        self.king
    }

    /// Returns the y-directions this piece may travel in, forward first.
    #[inline]
    pub fn directions(&self) -> &'static [i32] {
        match (self.color, self.king) {
            (Color::White, false) => &[1],
            (Color::White, true) => &[1, -1],
            (Color::Black, false) => &[-1],
            (Color::Black, true) => &[-1, 1],
        }
    }

    /// Updates the stored position. Does not touch any board.
    #[inline]
    pub fn move_to(&mut self, square: Square) {
        self.square = square;
    }

    /// Crowns this piece if it stands on its promotion row.
    ///
    /// Returns true if the piece was crowned by this call. Kings stay kings.
    pub fn check_promotion(&mut self) -> bool {
        if !self.king && self.square.y() == self.color.promotion_row() {
            self.king = true;
            return true;
        }
        false
    }

    /// Returns the diagram character for this piece (`w`, `W`, `b`, `B`).
    pub const fn to_char(&self) -> char {
        match (self.color, self.king) {
            (Color::White, false) => 'w',
            (Color::White, true) => 'W',
            (Color::Black, false) => 'b',
            (Color::Black, true) => 'B',
        }
    }

    /// Parses a diagram character into a color and king flag.
    pub const fn from_char(c: char) -> Option<(Color, bool)> {
        match c {
            'w' => Some((Color::White, false)),
            'W' => Some((Color::White, true)),
            'b' => Some((Color::Black, false)),
            'B' => Some((Color::Black, true)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.king { "king" } else { "man" };
        write!(f, "{} {} on {}", self.color, kind, self.square)
    }
}
