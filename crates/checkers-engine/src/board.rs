//! Checkers board representation.

use checkers_core::{
    coordinates_from_index, index_from_coordinates, is_off_grid, is_playable_square, Color, Move,
    Piece, Square, BOARD_SIZE, NUM_SQUARES,
};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a board diagram.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid diagram: expected 8 rows, got {0}")]
    WrongRowCount(usize),

    #[error("invalid diagram: row {row} has {len} cells, expected 8")]
    WrongRowLength { row: usize, len: usize },

    #[error("invalid diagram: unexpected character '{ch}' in row {row}")]
    InvalidChar { row: usize, ch: char },

    #[error("invalid diagram: piece on light square {0}")]
    UnplayableSquare(Square),
}

/// Errors returned when a move cannot be committed to the board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommitError {
    #[error("move starts on {origin} but the piece stands on {piece}")]
    OriginMismatch { origin: Square, piece: Square },

    #[error("the board does not hold the given piece on {0}")]
    PieceNotOnBoard(Square),

    #[error("there is no piece on {0} to move")]
    EmptyOrigin(Square),
}

/// The 8x8 grid and its occupants.
///
/// The board is the sole owner of every piece on it. Each occupied cell holds a
/// piece whose stored square is that cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; NUM_SQUARES],
}

impl Board {
    /// Diagram of the starting position, row 1 (y = 0) first.
    pub const STARTPOS: &'static str =
        "w.w.w.w./.w.w.w.w/w.w.w.w./......../......../.b.b.b.b/b.b.b.b./.b.b.b.b";

    /// Creates a board in the starting position.
    ///
    /// White fills the dark squares of the first three rows and Black the dark
    /// squares of the last three.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for index in 0..NUM_SQUARES {
            let (x, y) = coordinates_from_index(index);
            if !is_playable_square(x as i32, y as i32) {
                continue;
            }
            let Some(sq) = Square::from_index(index) else {
                continue;
            };
            for color in Color::ALL {
                if color.is_home_row(y as u8) {
                    board.cells[index] = Some(Piece::new(sq, color));
                }
            }
        }
        board
    }

    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            cells: [None; NUM_SQUARES],
        }
    }

    /// Parses a board diagram.
    ///
    /// Rows are separated by `/` or newlines and listed from y = 0 to y = 7.
    /// Each row has one character per cell: `w`/`b` for men, `W`/`B` for kings
    /// and `.` for an empty cell.
    pub fn from_diagram(diagram: &str) -> Result<Self, BoardError> {
        let rows: Vec<&str> = diagram
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::WrongRowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (y, row) in rows.iter().enumerate() {
            let cells: Vec<char> = row.chars().collect();
            if cells.len() != BOARD_SIZE {
                return Err(BoardError::WrongRowLength {
                    row: y,
                    len: cells.len(),
                });
            }
            for (x, &ch) in cells.iter().enumerate() {
                if ch == '.' {
                    continue;
                }
                let (color, king) =
                    Piece::from_char(ch).ok_or(BoardError::InvalidChar { row: y, ch })?;
                let Some(sq) = Square::new(x as u8, y as u8) else {
                    continue;
                };
                if !sq.is_playable() {
                    return Err(BoardError::UnplayableSquare(sq));
                }
                let piece = if king {
                    Piece::king(sq, color)
                } else {
                    Piece::new(sq, color)
                };
                board.set_piece(piece);
            }
        }
        Ok(board)
    }

    /// Returns the diagram for this board (see [`Board::from_diagram`]).
    pub fn to_diagram(&self) -> String {
        let rows: Vec<String> = (0..BOARD_SIZE)
            .map(|y| {
                (0..BOARD_SIZE)
                    .map(|x| match self.cells[index_from_coordinates(x, y)] {
                        Some(piece) => piece.to_char(),
                        None => '.',
                    })
                    .collect()
            })
            .collect();
        rows.join("/")
    }

    /// Returns the piece on a square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.cells[sq.index()].as_ref()
    }

    /// Returns the piece at a cell index, if any.
    ///
    /// # Panics
    ///
    /// Panics if the index is off the board; check
    /// [`is_off_grid_index`](Board::is_off_grid_index) first.
    #[inline]
    pub fn piece_at_index(&self, index: usize) -> Option<&Piece> {
        self.cells[index].as_ref()
    }

    /// Returns true if the coordinates fall outside the board.
    #[inline]
    pub const fn is_off_grid(x: i32, y: i32) -> bool {
        is_off_grid(x, y)
    }

    /// Returns true if the cell index falls outside the board.
    #[inline]
    pub const fn is_off_grid_index(index: i64) -> bool {
        index < 0 || index >= NUM_SQUARES as i64
    }

    /// Returns true if pieces may stand on `(x, y)`.
    #[inline]
    pub const fn is_playable_square(x: i32, y: i32) -> bool {
        is_playable_square(x, y)
    }

    #[inline]
    pub const fn coordinates_from_index(index: usize) -> (usize, usize) {
        coordinates_from_index(index)
    }

    #[inline]
    pub const fn index_from_coordinates(x: usize, y: usize) -> usize {
        index_from_coordinates(x, y)
    }

    /// Puts a piece on the square it reports, returning any previous occupant.
    pub fn set_piece(&mut self, piece: Piece) -> Option<Piece> {
        self.cells[piece.square().index()].replace(piece)
    }

    /// Clears a square, returning its occupant.
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()].take()
    }

    /// Iterates over all pieces in index order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.cells.iter().flatten()
    }

    /// Iterates over the pieces of one color in index order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |p| p.color() == color)
    }

    /// Counts the pieces of one color.
    pub fn count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    /// Returns the pieces a move would capture, most recent jump first.
    ///
    /// Cells that are already empty contribute nothing.
    pub fn captured_occupants(&self, m: &Move) -> Vec<Piece> {
        m.captured_squares()
            .into_iter()
            .filter_map(|sq| self.piece_at(sq).copied())
            .collect()
    }

    /// Commits a move made by `piece`, returning the captured pieces.
    ///
    /// The move must start where the piece stands and the board must hold that
    /// piece there; otherwise the board is left untouched. Beyond that the move
    /// is trusted to come from the piece's own move enumeration.
    ///
    /// On success `piece` is updated in place to its new square and crown.
    pub fn commit_move(&mut self, m: &Move, piece: &mut Piece) -> Result<Vec<Piece>, CommitError> {
        let origin = piece.square();
        if m.start() != origin {
            return Err(CommitError::OriginMismatch {
                origin: m.start(),
                piece: origin,
            });
        }
        if self.piece_at(origin) != Some(&*piece) {
            return Err(CommitError::PieceNotOnBoard(origin));
        }

        let captured = self.captured_occupants(m);
        for victim in &captured {
            self.cells[victim.square().index()] = None;
        }

        self.cells[origin.index()] = None;
        piece.move_to(m.end());
        piece.check_promotion();
        self.cells[m.end().index()] = Some(*piece);

        Ok(captured)
    }

    /// Commits a move made by whichever piece stands on its starting square.
    pub fn play(&mut self, m: &Move) -> Result<Vec<Piece>, CommitError> {
        let mut piece = *self
            .piece_at(m.start())
            .ok_or(CommitError::EmptyOrigin(m.start()))?;
        self.commit_move(m, &mut piece)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_diagram())
    }
}
