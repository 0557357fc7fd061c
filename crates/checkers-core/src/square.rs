//! Board square representation and grid geometry.

use std::fmt;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 8;

/// Number of cells on the board.
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Returns true if the coordinates fall outside the board.
#[inline]
pub const fn is_off_grid(x: i32, y: i32) -> bool {
    x < 0 || x >= BOARD_SIZE as i32 || y < 0 || y >= BOARD_SIZE as i32
}

/// Returns true if pieces may stand on this cell (the dark squares).
///
/// A cell is dark when both coordinates have the same parity, so (0, 0) is dark.
#[inline]
pub const fn is_playable_square(x: i32, y: i32) -> bool {
    x.rem_euclid(2) == y.rem_euclid(2)
}

/// Converts coordinates to a single row-major cell index.
#[inline]
pub const fn index_from_coordinates(x: usize, y: usize) -> usize {
    y * BOARD_SIZE + x
}

/// Converts a row-major cell index back to `(x, y)`.
#[inline]
pub const fn coordinates_from_index(index: usize) -> (usize, usize) {
    (index % BOARD_SIZE, index / BOARD_SIZE)
}

/// A square on the board, indexed 0-63.
///
/// Squares are indexed row-major: `index = y * 8 + x`, so (0, 0) = 0,
/// (7, 0) = 7, (0, 1) = 8, ..., (7, 7) = 63.
///
/// In text, x is a column letter and y a 1-based row number: (2, 2) is `c3`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Creates a square from coordinates, or `None` if off the board.
    #[inline]
    pub const fn new(x: u8, y: u8) -> Option<Self> {
        if (x as usize) < BOARD_SIZE && (y as usize) < BOARD_SIZE {
            Some(Square(index_from_coordinates(x as usize, y as usize) as u8))
        } else {
            None
        }
    }

    /// Creates a square from signed coordinates, or `None` if off the board.
    #[inline]
    pub const fn from_coords(x: i32, y: i32) -> Option<Self> {
        if is_off_grid(x, y) {
            None
        } else {
            Some(Square(index_from_coordinates(x as usize, y as usize) as u8))
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < NUM_SQUARES {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the column.
    #[inline]
    pub const fn x(self) -> u8 {
        self.0 % BOARD_SIZE as u8
    }

    /// Returns the row.
    #[inline]
    pub const fn y(self) -> u8 {
        self.0 / BOARD_SIZE as u8
    }

    /// Returns `(x, y)`.
    #[inline]
    pub const fn coordinates(self) -> (u8, u8) {
        (self.x(), self.y())
    }

    /// Returns true if this is a dark square.
    #[inline]
    pub const fn is_playable(self) -> bool {
        is_playable_square(self.x() as i32, self.y() as i32)
    }

    /// Returns the square displaced by `(dx, dy)`, or `None` if that leaves the board.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Self::from_coords(self.x() as i32 + dx, self.y() as i32 + dy)
    }

    /// Returns the square halfway between two squares two diagonals apart.
    #[inline]
    pub const fn midpoint(self, other: Square) -> Square {
        let x = (self.x() + other.x()) / 2;
        let y = (self.y() + other.y()) / 2;
        Square(index_from_coordinates(x as usize, y as usize) as u8)
    }

    /// Returns the column letter (`a`-`h`).
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.x()) as char
    }

    /// Returns the row digit (`1`-`8`).
    #[inline]
    pub const fn row_char(self) -> char {
        (b'1' + self.y()) as char
    }

    /// Returns the text notation for this square (e.g. `c3`).
    pub fn to_notation(self) -> String {
        format!("{}{}", self.file_char(), self.row_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_notation())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}
