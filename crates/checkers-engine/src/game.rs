//! Turn-by-turn game management.
//!
//! The [`Game`] struct wraps a [`Board`] with the state the board itself does
//! not track:
//! - Whose turn it is
//! - Validation that a submitted move belongs to that side and was enumerated
//! - End-of-game detection after every move
//! - Resignation

use crate::board::CommitError;
use crate::rules::{GameResult, RuleSet, StandardCheckers};
use crate::Board;
use checkers_core::{Color, Move, NotationError, Square};
use thiserror::Error;

/// Error type for game operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game has already ended.
    #[error("game has already ended")]
    GameAlreadyOver,
    /// There is no piece on the square.
    #[error("there is no piece on {0}")]
    NoPiece(Square),
    /// The piece belongs to the side not on move.
    #[error("the piece on {square} is not {expected}'s")]
    WrongColor { square: Square, expected: Color },
    /// The move is not among the moves the piece can make.
    #[error("illegal move: {0}")]
    IllegalMove(String),
    /// The move text could not be parsed.
    #[error("invalid notation: {0}")]
    InvalidNotation(#[from] NotationError),
    /// The board refused the move.
    #[error(transparent)]
    Commit(#[from] CommitError),
}

/// A checkers game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    rules: StandardCheckers,
    side_to_move: Color,
    ply: u32,
    result: Option<GameResult>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with standard rules. White moves first.
    pub fn new() -> Self {
        Self::with_rules(StandardCheckers::default())
    }

    /// Creates a new game from the rule set's starting board.
    pub fn with_rules(rules: StandardCheckers) -> Self {
        Self::from_board(rules.initial_board(), Color::White, rules)
    }

    /// Creates a game from an arbitrary board.
    pub fn from_board(board: Board, side_to_move: Color, rules: StandardCheckers) -> Self {
        let mut game = Game {
            board,
            rules,
            side_to_move,
            ply: 0,
            result: None,
        };
        // The board may already be decided
        game.check_game_end();
        game
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> &StandardCheckers {
        &self.rules
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the number of moves made so far.
    pub fn ply_count(&self) -> u32 {
        self.ply
    }

    /// Returns the game result if the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Returns every move available to the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.rules.generate_moves(&self.board, self.side_to_move)
    }

    /// Returns the moves of the side-to-move's piece on `square`.
    pub fn moves_for(&self, square: Square) -> Result<Vec<Move>, GameError> {
        let piece = self
            .board
            .piece_at(square)
            .ok_or(GameError::NoPiece(square))?;
        if piece.color() != self.side_to_move {
            return Err(GameError::WrongColor {
                square,
                expected: self.side_to_move,
            });
        }
        Ok(self.rules.piece_moves(&self.board, piece))
    }

    /// Makes a move for the side to move.
    pub fn make_move(&mut self, m: &Move) -> Result<(), GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }

        let moves = self.moves_for(m.start())?;
        if !moves.contains(m) {
            return Err(GameError::IllegalMove(m.to_notation()));
        }

        self.apply_move(m)
    }

    /// Makes a move given in text notation (`c3-d4`, `c3xe5xg7`).
    pub fn make_move_notation(&mut self, notation: &str) -> Result<(), GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        let m = Move::from_notation(notation)?;
        self.make_move(&m)
    }

    /// Resigns the game for the side to move.
    pub fn resign(&mut self) -> Result<(), GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }

        tracing::info!(side = %self.side_to_move, "resigned");
        self.result = Some(GameResult::win_for(self.side_to_move.opposite()));
        Ok(())
    }

    /// Internal method to apply an enumerated move.
    fn apply_move(&mut self, m: &Move) -> Result<(), GameError> {
        let captured = self.board.play(m)?;
        tracing::debug!(
            side = %self.side_to_move,
            mv = %m,
            captured = captured.len(),
            "move committed"
        );

        self.ply += 1;
        self.side_to_move = self.side_to_move.opposite();
        self.check_game_end();
        Ok(())
    }

    /// Checks if the game has ended and updates the result.
    fn check_game_end(&mut self) {
        self.result = self.rules.game_result(&self.board);
        if let Some(result) = self.result {
            tracing::info!(%result, ply = self.ply, "game over");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::CapturePolicy;

    fn sq(x: u8, y: u8) -> Square {
        Square::new(x, y).unwrap()
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.ply_count(), 0);
        assert_eq!(game.side_to_move(), Color::White);
        assert!(!game.is_game_over());
        assert_eq!(game.legal_moves().len(), 7);
    }

    #[test]
    fn make_move_notation() {
        let mut game = Game::new();
        game.make_move_notation("c3-d4").unwrap();
        assert_eq!(game.ply_count(), 1);
        assert_eq!(game.side_to_move(), Color::Black);
        assert!(game.board().piece_at(sq(3, 3)).is_some());
        game.make_move_notation("f6-e5").unwrap();
        assert_eq!(game.ply_count(), 2);
    }

    #[test]
    fn wrong_color() {
        let mut game = Game::new();
        let result = game.make_move_notation("f6-e5");
        assert_eq!(
            result,
            Err(GameError::WrongColor {
                square: sq(5, 5),
                expected: Color::White
            })
        );
    }

    #[test]
    fn empty_square() {
        let game = Game::new();
        assert_eq!(game.moves_for(sq(3, 3)), Err(GameError::NoPiece(sq(3, 3))));
    }

    #[test]
    fn illegal_move() {
        let mut game = Game::new();
        let result = game.make_move_notation("c3-b2");
        assert!(matches!(result, Err(GameError::IllegalMove(_))));
        assert_eq!(game.ply_count(), 0);
    }

    #[test]
    fn bad_notation() {
        let mut game = Game::new();
        assert!(matches!(
            game.make_move_notation("c3-z9"),
            Err(GameError::InvalidNotation(_))
        ));
    }

    #[test]
    fn capture_ends_game() {
        let board = Board::from_diagram(
            "......../......../..w...../...b..../......../......../......../........",
        )
        .unwrap();
        let mut game = Game::from_board(board, Color::White, StandardCheckers::default());
        assert!(!game.is_game_over());

        game.make_move_notation("c3xe5").unwrap();
        assert!(game.is_game_over());
        assert_eq!(game.result(), Some(GameResult::WhiteWins));
        assert_eq!(game.board().count(Color::Black), 0);
    }

    #[test]
    fn maximal_only_rejects_prefix() {
        let board = Board::from_diagram(
            "......../......../..w...../...b..../......../.....b../......../.......b",
        )
        .unwrap();
        let rules = StandardCheckers::new(CapturePolicy::MaximalOnly);
        let mut game = Game::from_board(board, Color::White, rules);
        assert!(matches!(
            game.make_move_notation("c3xe5"),
            Err(GameError::IllegalMove(_))
        ));
        game.make_move_notation("c3xe5xg7").unwrap();
        assert_eq!(game.board().count(Color::Black), 1);
    }

    #[test]
    fn resign() {
        let mut game = Game::new();
        game.resign().unwrap();
        assert!(game.is_game_over());
        assert_eq!(game.result(), Some(GameResult::BlackWins));
    }

    #[test]
    fn cannot_move_after_game_over() {
        let mut game = Game::new();
        game.resign().unwrap();
        let result = game.make_move_notation("c3-d4");
        assert!(matches!(result, Err(GameError::GameAlreadyOver)));
        assert!(matches!(game.resign(), Err(GameError::GameAlreadyOver)));
    }
}
