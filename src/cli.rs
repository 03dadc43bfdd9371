//! Command-line interface for tictactoe_ai.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_ai::FirstPlayer;
use tictactoe_engine::{Difficulty, Player};

/// Tic Tac Toe - play against a random or unbeatable AI
#[derive(Parser, Debug)]
#[command(name = "tictactoe_ai")]
#[command(about = "Play tic-tac-toe against a random or unbeatable AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive session in the terminal
    Play {
        /// Path to a TOML game config (optional)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// AI difficulty: easy or impossible
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Who opens each round: human or ai
        #[arg(long)]
        first: Option<FirstPlayer>,

        /// Player name
        #[arg(short, long)]
        name: Option<String>,

        /// Your mark: X or O
        #[arg(long)]
        mark: Option<Player>,

        /// Net round wins needed to finish the session
        #[arg(long)]
        rounds: Option<u32>,

        /// Seed for the AI's random source
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the AI's move for a board
    Suggest {
        /// Nine cells in row-major order, e.g. "XX. .O. ..."
        #[arg(short, long)]
        board: String,

        /// Mark to move (inferred from the mark counts if omitted)
        #[arg(short, long)]
        mark: Option<Player>,

        /// AI difficulty: easy or impossible
        #[arg(short, long, default_value = "impossible")]
        difficulty: Difficulty,

        /// Seed for the easy AI
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Play AI-vs-AI rounds and print the tally
    Selfplay {
        /// Number of rounds
        #[arg(short, long, default_value = "10")]
        games: u32,

        /// Difficulty for X
        #[arg(short = 'x', long, default_value = "impossible")]
        x: Difficulty,

        /// Difficulty for O
        #[arg(short = 'o', long, default_value = "easy")]
        o: Difficulty,

        /// Seed for the random source
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
