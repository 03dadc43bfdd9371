//! Tic Tac Toe AI - unified CLI
//!
//! Interactive play, one-shot suggestions and self-play from one binary.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tictactoe_ai::{FirstPlayer, GameConfig, GameSession, run_matches, suggest, terminal};
use tictactoe_engine::{Board, Difficulty, Player};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            difficulty,
            first,
            name,
            mark,
            rounds,
            seed,
        } => run_play(config, difficulty, first, name, mark, rounds, seed),
        Command::Suggest {
            board,
            mark,
            difficulty,
            seed,
            json,
        } => run_suggest(&board, mark, difficulty, seed, json),
        Command::Selfplay {
            games,
            x,
            o,
            seed,
            json,
        } => run_selfplay(games, x, o, seed, json),
    }
}

/// Run an interactive terminal session
#[instrument(skip_all)]
fn run_play(
    config_path: Option<PathBuf>,
    difficulty: Option<Difficulty>,
    first: Option<FirstPlayer>,
    name: Option<String>,
    mark: Option<Player>,
    rounds: Option<u32>,
    seed: Option<u64>,
) -> Result<()> {
    let mut config = match &config_path {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    if let Some(difficulty) = difficulty {
        config = config.with_difficulty(difficulty);
    }
    if let Some(first) = first {
        config = config.with_first_player(first);
    }
    if let Some(name) = name {
        config = config.with_player_name(name);
    }
    if let Some(mark) = mark {
        config = config.with_human_mark(mark);
    }
    if let Some(rounds) = rounds {
        config = config.with_rounds_to_finish(rounds);
    }
    if seed.is_some() {
        config = config.with_seed(seed);
    }
    config.validate()?;

    info!(?config, "Starting play session");
    let mut session = GameSession::new(config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    terminal::run(&mut session, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Print the engine's move for a board
#[instrument]
fn run_suggest(
    board: &str,
    mark: Option<Player>,
    difficulty: Difficulty,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let board: Board = board.parse()?;
    let suggestion = suggest(&board, mark, difficulty, seed);

    if json {
        let text =
            serde_json::to_string_pretty(&suggestion).context("Failed to serialize suggestion")?;
        println!("{}", text);
    } else {
        println!("{}", board.display());
        println!();
        println!("{}", suggestion);
    }
    Ok(())
}

/// Play engine-vs-engine rounds
#[instrument]
fn run_selfplay(games: u32, x: Difficulty, o: Difficulty, seed: u64, json: bool) -> Result<()> {
    let stats = run_matches(x, o, games, seed);

    if json {
        let text = serde_json::to_string_pretty(&stats).context("Failed to serialize stats")?;
        println!("{}", text);
    } else {
        println!("X ({}) vs O ({}): {}", x, o, stats);
    }
    Ok(())
}
