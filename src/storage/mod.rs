//! Persistence layer for settings and the score tally.
//!
//! Records are plain string values under fixed keys, the same shape a
//! browser's local storage would hold.

mod error;
mod preferences;
mod store;

pub use error::StorageError;
pub use preferences::{
    BOARD_SIZE_KEY, GAME_MODE_KEY, Preferences, SCORES_KEY, THEME_KEY,
};
pub use store::{JsonFileStore, MemoryStore, SettingsStore};
