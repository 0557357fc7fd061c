//! Standard checkers rules implementation.

use super::{CapturePolicy, GameResult, RuleSet};
use crate::movegen::movable_pieces;
use crate::Board;
use checkers_core::Color;

/// Standard 8x8 checkers.
///
/// - Twelve men per side on the dark squares of the three home rows
/// - Men step and jump forward only, kings in both directions
/// - A man reaching the far row is crowned when the move is committed
/// - Jumps are not compulsory
/// - A side with no piece that can move has lost
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardCheckers {
    policy: CapturePolicy,
}

impl StandardCheckers {
    /// Creates the rule set with the given capture policy.
    pub const fn new(policy: CapturePolicy) -> Self {
        StandardCheckers { policy }
    }
}

impl RuleSet for StandardCheckers {
    fn initial_board(&self) -> Board {
        Board::new()
    }

    fn capture_policy(&self) -> CapturePolicy {
        self.policy
    }

    fn game_result(&self, board: &Board) -> Option<GameResult> {
        let white = movable_pieces(board, Color::White, self.policy);
        let black = movable_pieces(board, Color::Black, self.policy);

        match (white, black) {
            (0, 0) => Some(GameResult::Stalemate),
            (0, _) => Some(GameResult::BlackWins),
            (_, 0) => Some(GameResult::WhiteWins),
            _ => None,
        }
    }
}
