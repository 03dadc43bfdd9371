//! Move selection for the AI side.
//!
//! Two strategies, dispatched on [`Difficulty`]: a uniform random pick
//! among the empty squares, and exhaustive minimax. Callers hand in a
//! board snapshot and get back one position, or `None` when the board
//! has no empty square left (treat that as a no-op).

mod difficulty;
mod minimax;
mod placement;
mod random;

pub use difficulty::Difficulty;
pub use minimax::{Score, evaluate, minimax, score, select_optimal_move};
pub use random::select_random_move;

use crate::rules::{has_won, is_full};
use crate::{Board, Player, Position};
use rand::Rng;
use tracing::{info, instrument};

/// Computes the AI's move using the thread-local random source.
///
/// The board is searched on a private copy; the caller's board is never
/// touched.
#[instrument(skip(board))]
pub fn compute_ai_move(board: &Board, difficulty: Difficulty, ai: Player) -> Option<Position> {
    compute_ai_move_with(board, difficulty, ai, &mut rand::rng())
}

/// Computes the AI's move with an explicit random source.
#[instrument(skip(board, rng))]
pub fn compute_ai_move_with<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    ai: Player,
    rng: &mut R,
) -> Option<Position> {
    let chosen = match difficulty {
        Difficulty::Easy => select_random_move(board, rng),
        Difficulty::Impossible => {
            let mut scratch = *board;
            select_optimal_move(&mut scratch, ai)
        }
    };

    info!(
        %difficulty,
        %ai,
        position = ?chosen.map(Position::to_index),
        "AI move computed"
    );
    chosen
}

/// Returns true if `mark` has completed a line.
pub fn board_has_winner(board: &Board, mark: Player) -> bool {
    has_won(board, mark)
}

/// Returns true if no empty square remains.
pub fn board_is_full(board: &Board) -> bool {
    is_full(board)
}
