//! Tic-tac-toe against a random or unbeatable AI.
//!
//! The move search lives in [`tictactoe_engine`]; this crate wraps it in a
//! play session with scoring, a TOML configuration, a terminal front-end
//! and self-play tooling.
//!
//! # Example
//!
//! ```
//! use tictactoe_ai::{FirstPlayer, GameConfig, GameSession};
//! use tictactoe_engine::{Difficulty, Position};
//!
//! let config = GameConfig::default()
//!     .with_difficulty(Difficulty::Impossible)
//!     .with_first_player(FirstPlayer::Human);
//! let mut session = GameSession::new(config);
//! session.start_round().unwrap();
//!
//! let report = session.play_human(Position::Center).unwrap();
//! assert_eq!(report.ai_reply, Some(Position::TopLeft));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod selfplay;
mod session;
mod suggest;
pub mod terminal;

pub use config::{ConfigError, FirstPlayer, GameConfig};
pub use selfplay::{MatchStats, play_match, run_matches};
pub use session::{GameSession, RoundResult, SessionError, SessionSummary, TurnReport};
pub use suggest::{Suggestion, side_to_move, suggest};
