//! Players: anything that can pick a move for one side.

use crate::render::{render_board, render_move_list};
use checkers_core::{parse_square, Color, Move};
use checkers_engine::{Game, GameError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::io::{BufRead, Write};

/// Picks moves for one side of a game.
pub trait Player {
    /// Chooses a move for the side to move, or `None` to give up the game.
    ///
    /// Only moves produced by the game's own enumeration should be returned.
    fn choose_move(
        &mut self,
        game: &Game,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> anyhow::Result<Option<Move>>;
}

/// A person at the terminal.
#[derive(Debug, Clone, Copy)]
pub struct HumanPlayer {
    color: Color,
}

impl HumanPlayer {
    pub fn new(color: Color) -> Self {
        HumanPlayer { color }
    }
}

/// Reads one trimmed line, or `None` at end of input.
fn read_line(input: &mut dyn BufRead) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

impl Player for HumanPlayer {
    fn choose_move(
        &mut self,
        game: &Game,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> anyhow::Result<Option<Move>> {
        write!(output, "{}", render_board(game.board(), &[]))?;

        loop {
            writeln!(
                output,
                "{}, please select a piece by its coordinates (i.e. A3):",
                self.color
            )?;
            let Some(raw) = read_line(input)? else {
                return Ok(None);
            };
            if raw.eq_ignore_ascii_case("exit") {
                return Ok(None);
            }

            let square = match parse_square(&raw) {
                Ok(sq) => sq,
                Err(e) => {
                    writeln!(output, "{}", e)?;
                    continue;
                }
            };
            let moves = match game.moves_for(square) {
                Ok(moves) => moves,
                Err(GameError::NoPiece(_)) => {
                    writeln!(output, "There is no piece there!")?;
                    continue;
                }
                Err(GameError::WrongColor { .. }) => {
                    writeln!(output, "That's not your piece!")?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            if moves.is_empty() {
                writeln!(output, "That piece has no possible moves! Please choose another.")?;
                continue;
            }

            write!(output, "{}", render_board(game.board(), &moves))?;
            write!(output, "{}", render_move_list(&moves))?;

            match self.pick_numbered(&moves, input, output)? {
                Pick::Move(m) => return Ok(Some(m)),
                Pick::Back => continue,
                Pick::Quit => return Ok(None),
            }
        }
    }
}

enum Pick {
    Move(Move),
    Back,
    Quit,
}

impl HumanPlayer {
    fn pick_numbered(
        &self,
        moves: &[Move],
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> anyhow::Result<Pick> {
        loop {
            writeln!(
                output,
                "{}, please select a move by its number (enter 0 to go back):",
                self.color
            )?;
            let Some(raw) = read_line(input)? else {
                return Ok(Pick::Quit);
            };
            match raw.parse::<usize>() {
                Ok(0) => return Ok(Pick::Back),
                Ok(n) if n <= moves.len() => return Ok(Pick::Move(moves[n - 1].clone())),
                Ok(_) => writeln!(
                    output,
                    "Please enter one of the numbers on the board, or 0 to go back."
                )?,
                Err(_) => writeln!(output, "Please enter a number.")?,
            }
        }
    }
}

/// The computer opponent: a uniformly random legal move.
#[derive(Debug)]
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a player with a fixed seed, or an entropy seed when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        RandomPlayer { rng }
    }
}

impl Player for RandomPlayer {
    fn choose_move(
        &mut self,
        game: &Game,
        _input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> anyhow::Result<Option<Move>> {
        let moves = game.legal_moves();
        let Some(m) = moves.choose(&mut self.rng) else {
            return Ok(None);
        };
        tracing::debug!(candidates = moves.len(), mv = %m, "computer picked move");
        writeln!(output, "{} (computer) plays {}", game.side_to_move(), m)?;
        Ok(Some(m.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_human(script: &str) -> (Option<Move>, String) {
        let game = Game::new();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let m = HumanPlayer::new(Color::White)
            .choose_move(&game, &mut input, &mut output)
            .unwrap();
        (m, String::from_utf8(output).unwrap())
    }

    #[test]
    fn human_selects_piece_then_move() {
        let (m, _) = run_human("C3\n2\n");
        assert_eq!(m.unwrap().to_notation(), "c3-d4");
    }

    #[test]
    fn human_reversed_coordinates() {
        let (m, _) = run_human("3a\n1\n");
        assert_eq!(m.unwrap().to_notation(), "a3-b4");
    }

    #[test]
    fn human_retries_after_bad_input() {
        let (m, out) = run_human("zz\nd4\nb6\nb2\nc3\n9\nx\n0\ne3\n1\n");
        assert_eq!(m.unwrap().to_notation(), "e3-d4");
        assert!(out.contains("expected a coordinate"));
        assert!(out.contains("There is no piece there!"));
        assert!(out.contains("That's not your piece!"));
        assert!(out.contains("That piece has no possible moves!"));
        assert!(out.contains("Please enter one of the numbers"));
        assert!(out.contains("Please enter a number."));
    }

    #[test]
    fn human_exit_gives_up() {
        let (m, _) = run_human("exit\n");
        assert!(m.is_none());
        let (m, _) = run_human("");
        assert!(m.is_none());
    }

    #[test]
    fn random_player_is_reproducible() {
        let game = Game::new();
        let mut out = Vec::new();
        let mut input = Cursor::new(Vec::new());
        let a = RandomPlayer::new(Some(7))
            .choose_move(&game, &mut input, &mut out)
            .unwrap()
            .unwrap();
        let b = RandomPlayer::new(Some(7))
            .choose_move(&game, &mut input, &mut out)
            .unwrap()
            .unwrap();
        assert_eq!(a, b);
        assert!(game.legal_moves().contains(&a));
        assert_eq!(a.start().y(), 2);
    }
}
