//! Typed access to the persisted settings records.

use super::{SettingsStore, StorageError};
use crate::games::tictactoe::{BoardSize, GameMode};
use crate::scores::ScoreTally;
use crate::settings::{GameConfig, SettingsError, Theme, parse_mode, parse_size, parse_theme};
use tracing::{debug, info, instrument, warn};

/// Record key for the board edge length.
pub const BOARD_SIZE_KEY: &str = "boardSize";
/// Record key for the game mode tag.
pub const GAME_MODE_KEY: &str = "gameMode";
/// Record key for the theme name.
pub const THEME_KEY: &str = "theme";
/// Record key for the JSON score tally.
pub const SCORES_KEY: &str = "scores";

/// Reads and writes settings records on top of a [`SettingsStore`].
///
/// Each record is independent. A record that is missing, unreadable or
/// out of range loads as its default; loading never fails.
#[derive(Debug, Clone)]
pub struct Preferences<S> {
    store: S,
}

impl<S: SettingsStore> Preferences<S> {
    /// Wraps a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads every setting, substituting defaults for bad records.
    #[instrument(skip(self))]
    pub fn load(&self) -> GameConfig {
        let config = GameConfig {
            size: self.load_record(BOARD_SIZE_KEY, parse_size),
            mode: self.load_record(GAME_MODE_KEY, parse_mode),
            theme: self.load_record(THEME_KEY, parse_theme),
            scores: self.load_record(SCORES_KEY, parse_scores),
        };
        info!(size = %config.size, mode = %config.mode, theme = %config.theme, "Settings loaded");
        config
    }

    /// True if none of the settings records exist yet.
    #[instrument(skip(self))]
    pub fn is_empty(&self) -> bool {
        [BOARD_SIZE_KEY, GAME_MODE_KEY, THEME_KEY, SCORES_KEY]
            .iter()
            .all(|key| matches!(self.store.get(key), Ok(None)))
    }

    fn load_record<T: Default>(
        &self,
        key: &str,
        parse: impl Fn(&str) -> Result<T, SettingsError>,
    ) -> T {
        match self.store.get(key) {
            Ok(Some(raw)) => parse(&raw).unwrap_or_else(|e| {
                warn!(key, error = %e, "Invalid record, using default");
                T::default()
            }),
            Ok(None) => {
                debug!(key, "Record absent, using default");
                T::default()
            }
            Err(e) => {
                warn!(key, error = %e, "Record unreadable, using default");
                T::default()
            }
        }
    }

    /// Writes all four records.
    #[instrument(skip(self))]
    pub fn save(&mut self, config: &GameConfig) -> Result<(), StorageError> {
        self.save_size(config.size)?;
        self.save_mode(config.mode)?;
        self.save_theme(config.theme)?;
        self.save_scores(&config.scores)
    }

    /// Writes the board size record.
    #[instrument(skip(self))]
    pub fn save_size(&mut self, size: BoardSize) -> Result<(), StorageError> {
        self.store.set(BOARD_SIZE_KEY, &size.to_string())
    }

    /// Writes the game mode record.
    #[instrument(skip(self))]
    pub fn save_mode(&mut self, mode: GameMode) -> Result<(), StorageError> {
        self.store.set(GAME_MODE_KEY, &mode.to_string())
    }

    /// Writes the theme record.
    #[instrument(skip(self))]
    pub fn save_theme(&mut self, theme: Theme) -> Result<(), StorageError> {
        self.store.set(THEME_KEY, &theme.to_string())
    }

    /// Writes the score tally record as JSON.
    #[instrument(skip(self))]
    pub fn save_scores(&mut self, scores: &ScoreTally) -> Result<(), StorageError> {
        let json = serde_json::to_string(scores)?;
        self.store.set(SCORES_KEY, &json)
    }
}

fn parse_scores(raw: &str) -> Result<ScoreTally, SettingsError> {
    serde_json::from_str(raw).map_err(|e| SettingsError::InvalidScores(e.to_string()))
}
