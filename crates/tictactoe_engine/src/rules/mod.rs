//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board value. Rules are kept apart from board
//! storage so the search engine and the round state machine share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, has_won};
