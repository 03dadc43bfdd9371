//! Difficulty levels for the AI opponent.

use serde::{Deserialize, Serialize};

/// How the AI picks its moves.
///
/// Parses from and displays as `easy` / `impossible`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random among the empty squares.
    #[default]
    Easy,
    /// Exhaustive minimax; never loses.
    Impossible,
}

impl Difficulty {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Impossible => "Impossible",
        }
    }
}
