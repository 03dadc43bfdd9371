//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::{Difficulty, Player};
use tracing::{debug, info, instrument};

/// Which side takes the first move of each round.
///
/// Defaults to [`FirstPlayer::Human`] so the player moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FirstPlayer {
    /// The human opens every round.
    #[default]
    Human,
    /// The AI opens every round.
    Ai,
}

impl FirstPlayer {
    /// Returns the display label for this option.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "Player",
            Self::Ai => "AI",
        }
    }
}

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name shown for the human player.
    #[serde(default = "default_player_name")]
    player_name: String,

    /// How the AI chooses its moves.
    #[serde(default)]
    difficulty: Difficulty,

    /// Who opens each round.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Mark used by the human; the AI takes the other one.
    #[serde(default = "default_human_mark")]
    human_mark: Player,

    /// Net round wins needed to finish the session.
    #[serde(default = "default_rounds_to_finish")]
    rounds_to_finish: u32,

    /// Seed for the AI's random source (easy difficulty).
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_player_name() -> String {
    "Player".to_string()
}

#[instrument]
fn default_human_mark() -> Player {
    Player::X
}

#[instrument]
fn default_rounds_to_finish() -> u32 {
    3
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: default_player_name(),
            difficulty: Difficulty::default(),
            first_player: FirstPlayer::default(),
            human_mark: default_human_mark(),
            rounds_to_finish: default_rounds_to_finish(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(player = %config.player_name, difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_name.trim().is_empty() {
            return Err(ConfigError::new("player_name must not be empty".to_string()));
        }
        if self.rounds_to_finish == 0 {
            return Err(ConfigError::new(
                "rounds_to_finish must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The AI's mark.
    pub fn ai_mark(&self) -> Player {
        self.human_mark.opponent()
    }

    /// Mark that opens each round.
    pub fn opening_mark(&self) -> Player {
        match self.first_player {
            FirstPlayer::Human => self.human_mark,
            FirstPlayer::Ai => self.ai_mark(),
        }
    }

    /// Overrides the player name.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Overrides the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Overrides who opens each round.
    pub fn with_first_player(mut self, first_player: FirstPlayer) -> Self {
        self.first_player = first_player;
        self
    }

    /// Overrides the human's mark.
    pub fn with_human_mark(mut self, mark: Player) -> Self {
        self.human_mark = mark;
        self
    }

    /// Overrides the number of net round wins needed.
    pub fn with_rounds_to_finish(mut self, rounds: u32) -> Self {
        self.rounds_to_finish = rounds;
        self
    }

    /// Overrides the random seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
