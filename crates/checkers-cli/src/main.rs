//! Checkers - play in the terminal against a friend or a random computer opponent.
//!
//! Settings come from `checkers.toml` (see [`config::CheckersConfig`]) and can be
//! partly overridden on the command line.

mod config;
mod player;
mod render;

use anyhow::Context;
use checkers_core::{parse_square, Color};
use checkers_engine::movegen::perft::{perft, perft_divide};
use checkers_engine::{Game, RuleSet, StandardCheckers};
use clap::{Parser, Subcommand};
use config::{CheckersConfig, Mode};
use player::{HumanPlayer, Player, RandomPlayer};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Checkers in the terminal.
#[derive(Parser)]
#[command(name = "checkers")]
#[command(about = "Play checkers in the terminal")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Maximum level of log messages written to stderr
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game
    Play {
        /// Who sits at the board (overrides the config file)
        #[arg(long, value_enum)]
        mode: Option<Mode>,

        /// Seed for the computer opponent (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Count the leaves of the move tree from the start position
    Perft {
        #[arg(short, long, default_value = "4")]
        depth: u32,
    },
    /// List the moves of the piece on a square of the start position
    Moves {
        /// Square such as `c3`
        square: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .init();

    let config = CheckersConfig::load(cli.config.as_deref()).context("loading configuration")?;
    let rules = StandardCheckers::new(config.capture_policy.into());
    tracing::debug!(?config, "configuration");

    match cli.command {
        Commands::Play { mode, seed } => {
            let mode = mode.unwrap_or(config.mode);
            let seed = seed.or(config.seed);
            let game = Game::from_board(config.start_board()?, Color::White, rules);
            play(game, mode, config.computer_color.into(), seed)
        }
        Commands::Perft { depth } => {
            let board = config.start_board()?;
            let policy = rules.capture_policy();
            for (mv, nodes) in perft_divide(&board, Color::White, depth, policy) {
                println!("{mv}: {nodes}");
            }
            println!();
            println!("Nodes searched: {}", perft(&board, Color::White, depth, policy));
            Ok(())
        }
        Commands::Moves { square } => {
            let board = config.start_board()?;
            let square = parse_square(&square)?;
            let piece = board
                .piece_at(square)
                .with_context(|| format!("there is no piece on {}", square.to_notation()))?;
            let moves = rules.piece_moves(&board, piece);
            println!("{piece}: {} move(s)", moves.len());
            print!("{}", render::render_board(&board, &moves));
            print!("{}", render::render_move_list(&moves));
            Ok(())
        }
    }
}

/// Runs the game loop until someone wins, the board stalls, or a player quits.
fn play(mut game: Game, mode: Mode, computer: Color, seed: Option<u64>) -> anyhow::Result<()> {
    let mut white: Box<dyn Player> = Box::new(HumanPlayer::new(Color::White));
    let mut black: Box<dyn Player> = Box::new(HumanPlayer::new(Color::Black));
    if mode == Mode::VsComputer {
        match computer {
            Color::White => white = Box::new(RandomPlayer::new(seed)),
            Color::Black => black = Box::new(RandomPlayer::new(seed)),
        }
    }
    tracing::info!(?mode, ?seed, "starting game");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    while !game.is_game_over() {
        let player = match game.side_to_move() {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        match player.choose_move(&game, &mut input as &mut dyn BufRead, &mut output)? {
            Some(m) => game.make_move(&m)?,
            None => game.resign()?,
        }
    }

    write!(output, "{}", render::render_board(game.board(), &[]))?;
    if let Some(result) = game.result() {
        writeln!(output, "{result} after {} moves.", game.ply_count())?;
    }
    Ok(())
}
