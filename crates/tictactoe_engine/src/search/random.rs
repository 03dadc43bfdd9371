//! Uniform random move selection for the easy difficulty.

use crate::{Board, Position, legal_moves};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Picks a uniformly random empty square, or `None` on a full board.
#[instrument(skip(board, rng))]
pub fn select_random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let chosen = legal_moves(board).choose(rng).copied();
    debug!(position = ?chosen.map(Position::to_index), "Random move selected");
    chosen
}
