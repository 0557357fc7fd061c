//! Move generation.
//!
//! Moves are enumerated per piece: first every single diagonal step, then every
//! capture chain found by a depth-first search from the piece's square. During
//! the search the board is never modified; each landing square is explored by a
//! hypothetical copy of the piece standing there, with the king status the real
//! piece had when the search started.

pub mod perft;

use crate::rules::CapturePolicy;
use crate::Board;
use checkers_core::{Color, Move, Piece};

/// Generates every move for one piece with the default capture policy.
///
/// Steps come first (left diagonal before right, forward row before backward
/// row), followed by jump chains in depth-first order. Every prefix of every
/// chain is offered as a move of its own.
pub fn piece_moves(board: &Board, piece: &Piece) -> Vec<Move> {
    piece_moves_with(board, piece, CapturePolicy::default())
}

/// Generates every move for one piece under the given capture policy.
pub fn piece_moves_with(board: &Board, piece: &Piece, policy: CapturePolicy) -> Vec<Move> {
    let mut moves = step_moves(board, piece);
    collect_jumps(board, piece, None, policy, &mut moves);
    moves
}

/// Generates the non-capturing single steps for a piece.
pub fn step_moves(board: &Board, piece: &Piece) -> Vec<Move> {
    let from = piece.square();
    let mut moves = Vec::with_capacity(4);
    for dx in [-1, 1] {
        for &dy in piece.directions() {
            let Some(to) = from.offset(dx, dy) else {
                continue;
            };
            if board.piece_at(to).is_none() {
                moves.push(Move::step(from, to));
            }
        }
    }
    moves
}

/// Generates the capture chains for a piece.
pub fn jump_moves(board: &Board, piece: &Piece, policy: CapturePolicy) -> Vec<Move> {
    let mut moves = Vec::new();
    collect_jumps(board, piece, None, policy, &mut moves);
    moves
}

/// Searches for jumps from `piece`'s square, appending chains to `out`.
///
/// `preceding` is the chain that brought a hypothetical piece here, or `None`
/// for the real piece. A jump may not return to the square the previous jump
/// started from, and a chain never jumps the same square twice.
pub(crate) fn collect_jumps(
    board: &Board,
    piece: &Piece,
    preceding: Option<&Move>,
    policy: CapturePolicy,
    out: &mut Vec<Move>,
) {
    let from = piece.square();
    for dx in [-2, 2] {
        for &dir in piece.directions() {
            let Some(to) = from.offset(dx, dir * 2) else {
                continue;
            };
            if preceding.is_some_and(|prev| prev.last_hop().from == to) {
                continue;
            }

            let over = from.midpoint(to);
            if preceding.is_some_and(|prev| prev.has_captured(over)) {
                continue;
            }
            let Some(victim) = board.piece_at(over) else {
                continue;
            };
            if victim.color() == piece.color() || board.piece_at(to).is_some() {
                continue;
            }

            let chain = match preceding {
                Some(prev) => prev.then_jump(to),
                None => Move::jump(from, to),
            };
            let mut landed = *piece;
            landed.move_to(to);

            match policy {
                CapturePolicy::AllPrefixes => {
                    out.push(chain.clone());
                    collect_jumps(board, &landed, Some(&chain), policy, out);
                }
                CapturePolicy::MaximalOnly => {
                    let found = out.len();
                    collect_jumps(board, &landed, Some(&chain), policy, out);
                    if out.len() == found {
                        out.push(chain);
                    }
                }
            }
        }
    }
}

/// Generates every move for every piece of one color, in board index order.
pub fn generate_moves(board: &Board, color: Color, policy: CapturePolicy) -> Vec<Move> {
    board
        .pieces_of(color)
        .flat_map(|piece| piece_moves_with(board, piece, policy))
        .collect()
}

/// Counts the pieces of one color that have at least one move.
pub fn movable_pieces(board: &Board, color: Color, policy: CapturePolicy) -> usize {
    board
        .pieces_of(color)
        .filter(|piece| !piece_moves_with(board, piece, policy).is_empty())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_core::Square;

    fn sq(x: u8, y: u8) -> Square {
        Square::new(x, y).unwrap()
    }

    fn board_with(pieces: &[Piece]) -> Board {
        let mut board = Board::empty();
        for &p in pieces {
            board.set_piece(p);
        }
        board
    }

    #[test]
    fn interior_man_has_two_steps() {
        let piece = Piece::new(sq(3, 3), Color::White);
        let board = board_with(&[piece]);
        let moves = piece_moves(&board, &piece);
        assert_eq!(
            moves,
            vec![
                Move::step(sq(3, 3), sq(2, 4)),
                Move::step(sq(3, 3), sq(4, 4))
            ]
        );
        assert!(moves.iter().all(|m| !m.is_jump()));
    }

    #[test]
    fn black_man_moves_toward_row_zero() {
        let piece = Piece::new(sq(3, 3), Color::Black);
        let board = board_with(&[piece]);
        let moves = piece_moves(&board, &piece);
        assert_eq!(
            moves,
            vec![
                Move::step(sq(3, 3), sq(2, 2)),
                Move::step(sq(3, 3), sq(4, 2))
            ]
        );
    }

    #[test]
    fn king_steps_both_ways() {
        let piece = Piece::king(sq(3, 3), Color::White);
        let board = board_with(&[piece]);
        let ends: Vec<Square> = piece_moves(&board, &piece).iter().map(Move::end).collect();
        assert_eq!(ends, vec![sq(2, 4), sq(2, 2), sq(4, 4), sq(4, 2)]);
    }

    #[test]
    fn edge_and_blocked_steps_are_skipped() {
        let piece = Piece::new(sq(0, 2), Color::White);
        let blocker = Piece::new(sq(1, 3), Color::White);
        let board = board_with(&[piece, blocker]);
        assert!(piece_moves(&board, &piece).is_empty());
    }

    #[test]
    fn simple_jump() {
        let a = Piece::new(sq(2, 2), Color::White);
        let b = Piece::new(sq(3, 3), Color::Black);
        let board = board_with(&[a, b]);

        let moves = piece_moves(&board, &a);
        let jump = Move::jump(sq(2, 2), sq(4, 4));
        assert!(moves.contains(&jump));
        assert_eq!(board.captured_occupants(&jump), vec![b]);
    }

    #[test]
    fn own_color_is_not_jumped() {
        let a = Piece::new(sq(2, 2), Color::White);
        let friend = Piece::new(sq(3, 3), Color::White);
        let board = board_with(&[a, friend]);
        assert!(jump_moves(&board, &a, CapturePolicy::AllPrefixes).is_empty());
    }

    #[test]
    fn occupied_landing_blocks_jump() {
        let a = Piece::new(sq(2, 2), Color::White);
        let b = Piece::new(sq(3, 3), Color::Black);
        let wall = Piece::new(sq(4, 4), Color::Black);
        let board = board_with(&[a, b, wall]);
        assert!(jump_moves(&board, &a, CapturePolicy::AllPrefixes).is_empty());
    }

    #[test]
    fn chain_jump_offers_every_length() {
        let a = Piece::new(sq(2, 2), Color::White);
        let b = Piece::new(sq(3, 3), Color::Black);
        let c = Piece::new(sq(5, 5), Color::Black);
        let board = board_with(&[a, b, c]);

        let single = Move::jump(sq(2, 2), sq(4, 4));
        let double = single.then_jump(sq(6, 6));
        let moves = piece_moves(&board, &a);
        assert_eq!(
            moves,
            vec![Move::step(sq(2, 2), sq(1, 3)), single.clone(), double.clone()]
        );
        assert_eq!(board.captured_occupants(&double), vec![c, b]);
        assert_eq!(board.captured_occupants(&single), vec![b]);
    }

    #[test]
    fn maximal_only_drops_prefixes() {
        let a = Piece::new(sq(2, 2), Color::White);
        let b = Piece::new(sq(3, 3), Color::Black);
        let c = Piece::new(sq(5, 5), Color::Black);
        let board = board_with(&[a, b, c]);

        let jumps = jump_moves(&board, &a, CapturePolicy::MaximalOnly);
        assert_eq!(
            jumps,
            vec![Move::jump(sq(2, 2), sq(4, 4)).then_jump(sq(6, 6))]
        );
    }

    #[test]
    fn no_immediate_backtrack() {
        // A king that has just jumped (2,2) -> (4,4); (2,2) is empty because the
        // mover is only hypothetical here.
        let b = Piece::new(sq(3, 3), Color::Black);
        let board = board_with(&[b]);
        let landed = Piece::king(sq(4, 4), Color::White);
        let preceding = Move::jump(sq(2, 2), sq(4, 4));

        let mut out = Vec::new();
        collect_jumps(
            &board,
            &landed,
            Some(&preceding),
            CapturePolicy::AllPrefixes,
            &mut out,
        );
        assert!(out.iter().all(|m| m.end() != sq(2, 2)));
        assert!(out.is_empty());
    }

    #[test]
    fn king_status_is_frozen_during_search() {
        // A man reaching the far row mid-chain does not gain backward jumps.
        let a = Piece::new(sq(1, 5), Color::White);
        let b = Piece::new(sq(2, 6), Color::Black);
        let c = Piece::new(sq(4, 6), Color::Black);
        let board = board_with(&[a, b, c]);

        let jumps = jump_moves(&board, &a, CapturePolicy::AllPrefixes);
        assert_eq!(jumps, vec![Move::jump(sq(1, 5), sq(3, 7))]);
    }

    #[test]
    fn king_ring_terminates() {
        // Four black pieces arranged so a king can circle (2,2) (4,4) (6,2) (4,0)
        // after entering from (0,0).
        let king = Piece::king(sq(0, 0), Color::White);
        let ring = [
            Piece::new(sq(1, 1), Color::Black),
            Piece::new(sq(3, 3), Color::Black),
            Piece::new(sq(5, 3), Color::Black),
            Piece::new(sq(5, 1), Color::Black),
            Piece::new(sq(3, 1), Color::Black),
        ];
        let mut pieces = vec![king];
        pieces.extend_from_slice(&ring);
        let board = board_with(&pieces);

        let jumps = jump_moves(&board, &king, CapturePolicy::AllPrefixes);
        assert!(!jumps.is_empty());
        let longest = jumps.iter().map(Move::len).max().unwrap();
        assert_eq!(longest, 5);
        for m in &jumps {
            let mut captured = m.captured_squares();
            let total = captured.len();
            captured.sort();
            captured.dedup();
            assert_eq!(captured.len(), total, "{m} captures a square twice");
        }
    }

    #[test]
    fn start_position_move_counts() {
        let board = Board::new();
        let policy = CapturePolicy::AllPrefixes;
        assert_eq!(generate_moves(&board, Color::White, policy).len(), 7);
        assert_eq!(generate_moves(&board, Color::Black, policy).len(), 7);
        assert_eq!(movable_pieces(&board, Color::White, policy), 4);
        assert_eq!(movable_pieces(&board, Color::Black, policy), 4);
    }
}
