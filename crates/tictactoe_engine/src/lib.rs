//! Tic-tac-toe engine: board model, rules, and an exhaustive minimax AI.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, Difficulty, Player, Position, compute_ai_move};
//!
//! let board: Board = "XX. .O. ...".parse().unwrap();
//! let reply = compute_ai_move(&board, Difficulty::Impossible, Player::O);
//! assert_eq!(reply, Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod position;
pub mod rules;
pub mod search;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use position::{Position, legal_moves};
pub use search::{
    Difficulty, Score, board_has_winner, board_is_full, compute_ai_move, compute_ai_move_with,
    minimax, select_optimal_move, select_random_move,
};
pub use types::{Board, GameStatus, ParseBoardError, Player, Square};
