//! Move representation.
//!
//! A [`Move`] is either a single diagonal step or a chain of one or more jumps.
//! The chain is stored as the owned path of squares the piece visits, so a
//! multi-jump move is a single value with no links to other moves.

use crate::notation::{parse_path, NotationError};
use crate::Square;
use std::fmt;

/// One displacement within a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hop {
    pub from: Square,
    pub to: Square,
}

impl Hop {
    /// Returns true if this hop passes over the square between `from` and `to`.
    #[inline]
    pub fn is_jump(self) -> bool {
        (self.from.x() as i32 - self.to.x() as i32).abs() == 2
    }

    /// Returns the square jumped over, if this hop is a jump.
    #[inline]
    pub fn captured(self) -> Option<Square> {
        self.is_jump().then(|| self.from.midpoint(self.to))
    }
}

/// A checkers move.
///
/// Invariants (upheld by the constructors):
/// - a step has exactly one hop of distance one;
/// - every hop of a jump chain is a jump of distance two.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Move {
    path: Vec<Square>,
    jump: bool,
}

impl Move {
    /// Creates a single non-capturing step.
    pub fn step(from: Square, to: Square) -> Self {
        debug_assert_eq!((from.x() as i32 - to.x() as i32).abs(), 1);
        Move {
            path: vec![from, to],
            jump: false,
        }
    }

    /// Creates the first jump of a chain.
    pub fn jump(from: Square, to: Square) -> Self {
        debug_assert_eq!((from.x() as i32 - to.x() as i32).abs(), 2);
        Move {
            path: vec![from, to],
            jump: true,
        }
    }

    /// Returns a new chain extending this one with a further jump to `to`.
    ///
    /// Only jumps chain; extending a step is a logic error.
    pub fn then_jump(&self, to: Square) -> Self {
        debug_assert!(self.jump, "steps never chain");
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(to);
        Move { path, jump: true }
    }

    /// Builds a move from text notation (`c3-d4` or `c3xe5xg7`).
    ///
    /// Only the geometry is checked here; whether the move is legal depends on
    /// the board.
    pub fn from_notation(s: &str) -> Result<Self, NotationError> {
        let (path, jump) = parse_path(s)?;
        let distance = if jump { 2 } else { 1 };
        let well_formed = path.windows(2).all(|w| {
            (w[0].x() as i32 - w[1].x() as i32).abs() == distance
                && (w[0].y() as i32 - w[1].y() as i32).abs() == distance
        });
        if !well_formed {
            return Err(NotationError::BadGeometry(s.trim().to_string()));
        }
        Ok(Move { path, jump })
    }

    /// Returns the square the moving piece starts on.
    #[inline]
    pub fn start(&self) -> Square {
        self.path[0]
    }

    /// Returns the square the moving piece ends on.
    #[inline]
    pub fn end(&self) -> Square {
        self.path[self.path.len() - 1]
    }

    /// Returns true if this move captures.
    #[inline]
    pub fn is_jump(&self) -> bool {
        self.jump
    }

    /// Returns every square visited, starting square first.
    #[inline]
    pub fn path(&self) -> &[Square] {
        &self.path
    }

    /// Returns the number of hops (1 for a step or a single jump).
    #[inline]
    pub fn len(&self) -> usize {
        self.path.len() - 1
    }

    /// Always false: a move has at least one hop.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the hops in the order they are made.
    pub fn hops(&self) -> impl DoubleEndedIterator<Item = Hop> + '_ {
        self.path.windows(2).map(|w| Hop {
            from: w[0],
            to: w[1],
        })
    }

    /// Returns the final hop of the chain.
    #[inline]
    pub fn last_hop(&self) -> Hop {
        let n = self.path.len();
        Hop {
            from: self.path[n - 2],
            to: self.path[n - 1],
        }
    }

    /// Returns the chain without its final hop, if there was an earlier jump.
    pub fn preceding(&self) -> Option<Move> {
        if self.path.len() <= 2 {
            return None;
        }
        Some(Move {
            path: self.path[..self.path.len() - 1].to_vec(),
            jump: true,
        })
    }

    /// Returns the squares of every piece captured by this move, most recent first.
    pub fn captured_squares(&self) -> Vec<Square> {
        if !self.jump {
            return Vec::new();
        }
        self.hops().rev().filter_map(Hop::captured).collect()
    }

    /// Returns true if this chain has already jumped over `square`.
    pub fn has_captured(&self, square: Square) -> bool {
        self.jump && self.hops().any(|hop| hop.captured() == Some(square))
    }

    /// Returns true if `other` is this chain followed by at least one more jump.
    pub fn is_prefix_of(&self, other: &Move) -> bool {
        self.jump
            && other.jump
            && other.path.len() > self.path.len()
            && other.path.starts_with(&self.path)
    }

    /// Returns the text notation for this move.
    pub fn to_notation(&self) -> String {
        let sep = if self.jump { "x" } else { "-" };
        self.path
            .iter()
            .map(|sq| sq.to_notation())
            .collect::<Vec<_>>()
            .join(sep)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_notation())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}
