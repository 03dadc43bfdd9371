//! One-shot move suggestions for a given board.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tictactoe_engine::{
    Board, Difficulty, Player, board_has_winner, compute_ai_move, compute_ai_move_with,
};
use tracing::instrument;

/// The engine's answer for one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Mark the move is for.
    pub mark: Player,
    /// Difficulty used.
    pub difficulty: Difficulty,
    /// Board index 0-8, absent when no move exists.
    pub index: Option<usize>,
    /// Human cell number 1-9, absent when no move exists.
    pub cell: Option<usize>,
    /// Set when either side already holds a line.
    pub game_over: bool,
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.cell {
            Some(cell) => write!(f, "{} plays cell {} ({})", self.mark, cell, self.difficulty),
            None => write!(f, "{} has no move", self.mark),
        }
    }
}

/// Side to move when X opens: X on equal counts, O otherwise.
pub fn side_to_move(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Asks the engine for `mark`'s move (inferred when `None`).
#[instrument(skip(board))]
pub fn suggest(
    board: &Board,
    mark: Option<Player>,
    difficulty: Difficulty,
    seed: Option<u64>,
) -> Suggestion {
    let mark = mark.unwrap_or_else(|| side_to_move(board));
    let position = match seed {
        Some(seed) => compute_ai_move_with(board, difficulty, mark, &mut StdRng::seed_from_u64(seed)),
        None => compute_ai_move(board, difficulty, mark),
    };
    Suggestion {
        mark,
        difficulty,
        index: position.map(|p| p.to_index()),
        cell: position.map(|p| p.to_index() + 1),
        game_over: board_has_winner(board, Player::X) || board_has_winner(board, Player::O),
    }
}
