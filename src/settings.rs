//! User-configurable settings: board size, game mode, theme, starting scores.

use crate::games::tictactoe::{BoardSize, GameMode};
use crate::scores::ScoreTally;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Decorative color theme. Has no effect on game logic.
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
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    /// Magenta and cyan on white.
    #[default]
    Neon,
    /// Pink, green and yellow.
    Retro,
    /// Purple and indigo.
    Cosmic,
}

impl Theme {
    /// Returns the display label for this option.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Neon => "Neon",
            Self::Retro => "Retro",
            Self::Cosmic => "Cosmic",
        }
    }
}

/// Everything needed to start a game.
///
/// Every field has a default, so a partial TOML file is valid:
///
/// ```toml
/// size = 4
/// mode = "ai"
/// theme = "retro"
///
/// [scores]
/// x = 2
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board edge length.
    pub size: BoardSize,
    /// Two humans or human vs AI.
    pub mode: GameMode,
    /// Decorative theme.
    pub theme: Theme,
    /// Tally carried over from earlier sessions.
    pub scores: ScoreTally,
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(size = %config.size, mode = %config.mode, theme = %config.theme, "Config loaded successfully");
        Ok(config)
    }
}

/// A setting value that cannot be used.
///
/// Raised when parsing user input or stored records. Loaders recover by
/// falling back to the default.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SettingsError {
    /// Board size outside the supported range.
    #[display(
        "Board size {} is outside {}..={}",
        _0,
        crate::games::tictactoe::MIN_BOARD_SIZE,
        crate::games::tictactoe::MAX_BOARD_SIZE
    )]
    SizeOutOfRange(#[error(not(source))] usize),

    /// Value that is not a number where one was expected.
    #[display("Not a board size: {:?}", _0)]
    InvalidSize(#[error(not(source))] String),

    /// Unknown game mode tag.
    #[display("Unknown game mode: {:?}", _0)]
    UnknownMode(#[error(not(source))] String),

    /// Unknown theme name.
    #[display("Unknown theme: {:?}", _0)]
    UnknownTheme(#[error(not(source))] String),

    /// Stored score tally that is not valid JSON.
    #[display("Unreadable score tally: {}", _0)]
    InvalidScores(#[error(not(source))] String),
}

/// Parses a board size from text.
#[instrument]
pub fn parse_size(raw: &str) -> Result<BoardSize, SettingsError> {
    let size: usize = raw
        .trim()
        .parse()
        .map_err(|_| SettingsError::InvalidSize(raw.to_string()))?;
    BoardSize::new(size)
}

/// Parses a game mode tag (`twoPlayer` or `ai`).
#[instrument]
pub fn parse_mode(raw: &str) -> Result<GameMode, SettingsError> {
    raw.trim()
        .parse()
        .map_err(|_| SettingsError::UnknownMode(raw.to_string()))
}

/// Parses a theme name (`neon`, `retro` or `cosmic`).
#[instrument]
pub fn parse_theme(raw: &str) -> Result<Theme, SettingsError> {
    raw.trim()
        .parse()
        .map_err(|_| SettingsError::UnknownTheme(raw.to_string()))
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
