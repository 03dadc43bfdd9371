//! Exhaustive minimax over the full game tree.
//!
//! The tree below any 3x3 position has at most 9! leaves, so the search
//! is unpruned and runs to the end of every line. Scores carry no depth
//! information: a win five plies away is worth exactly as much as a win
//! on the next move, and among equal scores the lowest index is kept.

use super::placement::Trial;
use crate::rules::{has_won, is_full};
use crate::{Board, Player, Position, legal_moves};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Evaluation of a board from the maximizing side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum Score {
    /// The minimizing side (the AI's opponent) has a completed line.
    MinimizerWins = -10,
    /// Draw, or a position that is not yet decided.
    OngoingOrDraw = 0,
    /// The maximizing side (the AI) has a completed line.
    MaximizerWins = 10,
}

impl Score {
    /// Integer value used by the search.
    pub const fn value(self) -> i32 {
        self as i32
    }
}

/// Scores a board for the AI playing `ai`.
pub fn evaluate(board: &Board, ai: Player) -> Score {
    if has_won(board, ai) {
        Score::MaximizerWins
    } else if has_won(board, ai.opponent()) {
        Score::MinimizerWins
    } else {
        Score::OngoingOrDraw
    }
}

/// Integer form of [`evaluate`]: +10, -10 or 0.
pub fn score(board: &Board, ai: Player) -> i32 {
    evaluate(board, ai).value()
}

/// Game-theoretic value of `board` with `ai` maximizing.
///
/// `maximizing` says whose turn it is: the AI's when true, its opponent's
/// otherwise. Every trial placement is undone before returning, so the
/// board is unchanged afterwards.
pub fn minimax(board: &mut Board, ai: Player, maximizing: bool) -> i32 {
    let value = score(board, ai);
    if value != Score::OngoingOrDraw.value() {
        return value;
    }
    if is_full(board) {
        return Score::OngoingOrDraw.value();
    }

    let (mark, mut best) = if maximizing {
        (ai, i32::MIN)
    } else {
        (ai.opponent(), i32::MAX)
    };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        let mut trial = Trial::place(board, pos, mark);
        let child = minimax(&mut trial, ai, !maximizing);
        best = if maximizing {
            best.max(child)
        } else {
            best.min(child)
        };
    }

    best
}

/// Picks the best move for `ai`, or `None` on a full board.
///
/// Candidates are tried in ascending index order and only a strictly
/// better value replaces the current choice.
#[instrument(skip(board), fields(ai = %ai))]
pub fn select_optimal_move(board: &mut Board, ai: Player) -> Option<Position> {
    let mut best: Option<(Position, i32)> = None;

    for pos in legal_moves(board) {
        let value = {
            let mut trial = Trial::place(board, pos, ai);
            minimax(&mut trial, ai, false)
        };
        trace!(position = pos.to_index(), value, "Evaluated candidate");

        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((pos, value));
        }
    }

    match best {
        Some((pos, value)) => {
            debug!(position = pos.to_index(), value, "Optimal move selected");
            Some(pos)
        }
        None => {
            debug!("No empty square left");
            None
        }
    }
}
