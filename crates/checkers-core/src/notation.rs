//! Text notation for squares and moves.
//!
//! Squares are written as a column letter followed by a row number (`c3`).
//! For convenience the reverse order (`3c`) and upper case (`C3`) are accepted.
//! Moves join squares with `-` for a step and `x` for jumps (`c3-d4`, `c3xe5xg7`).

use crate::Square;
use thiserror::Error;

/// Errors that can occur when parsing square or move notation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("expected a coordinate like 'A3', got '{0}'")]
    MalformedSquare(String),

    #[error("coordinate '{0}' is not on the board")]
    OffBoard(String),

    #[error("expected at least two squares in move '{0}'")]
    TooFewSquares(String),

    #[error("a step must be a single hop, got '{0}'")]
    ChainedStep(String),

    #[error("squares in move '{0}' are not a diagonal step or jump")]
    BadGeometry(String),
}

/// Parses a square from text (e.g. `c3`, `C3`, or `3c`).
pub fn parse_square(s: &str) -> Result<Square, NotationError> {
    let trimmed = s.trim();
    let chars: Vec<char> = trimmed.chars().collect();
    if chars.len() != 2 {
        return Err(NotationError::MalformedSquare(trimmed.to_string()));
    }

    let (letter, digit) = if chars[0].is_ascii_digit() {
        (chars[1], chars[0])
    } else {
        (chars[0], chars[1])
    };
    if !letter.is_ascii_alphabetic() || !digit.is_ascii_digit() {
        return Err(NotationError::MalformedSquare(trimmed.to_string()));
    }

    let x = letter.to_ascii_lowercase() as i32 - 'a' as i32;
    let y = digit as i32 - '1' as i32;
    Square::from_coords(x, y).ok_or_else(|| NotationError::OffBoard(trimmed.to_string()))
}

/// Splits move text into its squares, returning whether it was written as a jump.
pub(crate) fn parse_path(s: &str) -> Result<(Vec<Square>, bool), NotationError> {
    let trimmed = s.trim();
    let jump = trimmed.contains(['x', 'X']);
    let path = trimmed
        .split(['-', 'x', 'X'])
        .map(parse_square)
        .collect::<Result<Vec<_>, _>>()?;

    if path.len() < 2 {
        return Err(NotationError::TooFewSquares(trimmed.to_string()));
    }
    if !jump && path.len() > 2 {
        return Err(NotationError::ChainedStep(trimmed.to_string()));
    }
    Ok((path, jump))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_square() {
        assert_eq!(parse_square("a1"), Ok(Square::new(0, 0).unwrap()));
        assert_eq!(parse_square("c3"), Ok(Square::new(2, 2).unwrap()));
        assert_eq!(parse_square("H8"), Ok(Square::new(7, 7).unwrap()));
    }

    #[test]
    fn parse_reversed_square() {
        assert_eq!(parse_square("3c"), Ok(Square::new(2, 2).unwrap()));
        assert_eq!(parse_square(" 5E "), Ok(Square::new(4, 4).unwrap()));
    }

    #[test]
    fn parse_square_errors() {
        assert_eq!(
            parse_square("c"),
            Err(NotationError::MalformedSquare("c".to_string()))
        );
        assert_eq!(
            parse_square("cc"),
            Err(NotationError::MalformedSquare("cc".to_string()))
        );
        assert_eq!(
            parse_square("i1"),
            Err(NotationError::OffBoard("i1".to_string()))
        );
        assert_eq!(
            parse_square("a9"),
            Err(NotationError::OffBoard("a9".to_string()))
        );
        assert_eq!(
            parse_square("a0"),
            Err(NotationError::OffBoard("a0".to_string()))
        );
    }

    #[test]
    fn parse_paths() {
        let (path, jump) = parse_path("c3-d4").unwrap();
        assert!(!jump);
        assert_eq!(path.len(), 2);

        let (path, jump) = parse_path("c3xe5xg7").unwrap();
        assert!(jump);
        assert_eq!(path.len(), 3);

        assert!(matches!(
            parse_path("c3"),
            Err(NotationError::TooFewSquares(_))
        ));
        assert!(matches!(
            parse_path("c3-d4-e5"),
            Err(NotationError::ChainedStep(_))
        ));
    }
}
