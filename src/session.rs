//! Application session: the engine plus its collaborators.
//!
//! A [`Session`] plays the part the page played in the browser version. It
//! loads settings at startup, persists the tally after each accepted turn,
//! persists settings on each change and forwards feedback cues. Storage
//! failures are logged and never touch the engine's state.

use crate::effects::{FeedbackSink, feedback_for};
use crate::games::tictactoe::{BoardSize, GameEngine, GameMode, MoveError, TurnReport};
use crate::render::{BoardView, board_view};
use crate::settings::{GameConfig, Theme};
use crate::storage::{Preferences, SettingsStore};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument, warn};

/// A running game with persistence and feedback attached.
#[derive(Debug)]
pub struct Session<S, F, R = StdRng> {
    engine: GameEngine<R>,
    theme: Theme,
    preferences: Preferences<S>,
    feedback: F,
}

impl<S: SettingsStore, F: FeedbackSink> Session<S, F, StdRng> {
    /// Opens a session from stored settings with an OS-seeded AI.
    #[instrument(skip_all)]
    pub fn open(store: S, feedback: F) -> Self {
        Self::open_with_rng(store, feedback, StdRng::from_os_rng())
    }
}

impl<S: SettingsStore, F: FeedbackSink, R: Rng> Session<S, F, R> {
    /// Opens a session from stored settings with an injected random source.
    #[instrument(skip_all)]
    pub fn open_with_rng(store: S, feedback: F, rng: R) -> Self {
        let preferences = Preferences::new(store);
        let config = preferences.load();
        Self::from_parts(config, preferences, feedback, rng)
    }

    /// Starts a session from an explicit configuration.
    ///
    /// The configuration is written to the store so later sessions pick it up.
    #[instrument(skip(store, feedback, rng))]
    pub fn with_config(config: GameConfig, store: S, feedback: F, rng: R) -> Self {
        let mut preferences = Preferences::new(store);
        if let Err(e) = preferences.save(&config) {
            warn!(error = %e, "Failed to persist initial settings");
        }
        Self::from_parts(config, preferences, feedback, rng)
    }

    fn from_parts(config: GameConfig, preferences: Preferences<S>, feedback: F, rng: R) -> Self {
        info!(size = %config.size, mode = %config.mode, theme = %config.theme, "Session opened");
        Self {
            engine: GameEngine::with_rng(&config, rng),
            theme: config.theme,
            preferences,
            feedback,
        }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    /// Returns the current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the feedback sink.
    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    /// Returns the persisted-settings accessor.
    pub fn preferences(&self) -> &Preferences<S> {
        &self.preferences
    }

    /// Current settings as a configuration value.
    pub fn config(&self) -> GameConfig {
        GameConfig {
            size: self.engine.size(),
            mode: self.engine.mode(),
            theme: self.theme,
            scores: *self.engine.scores(),
        }
    }

    /// Render model for the current board.
    pub fn view(&self) -> BoardView {
        board_view(&self.engine)
    }

    /// Plays a move (and the AI reply, if any), emits feedback and saves
    /// the tally.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<TurnReport, MoveError> {
        let report = self.engine.apply_move(index)?;
        for event in feedback_for(&report) {
            self.feedback.emit(&event);
        }
        self.persist_scores();
        Ok(report)
    }

    /// Starts a new game with the same settings.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.engine.reset_game();
    }

    /// Changes the board size, saves it and starts a new game.
    #[instrument(skip(self))]
    pub fn change_size(&mut self, size: BoardSize) {
        self.engine.change_size(size);
        if let Err(e) = self.preferences.save_size(size) {
            warn!(error = %e, "Failed to persist board size");
        }
    }

    /// Changes the game mode, saves it and starts a new game.
    #[instrument(skip(self))]
    pub fn change_mode(&mut self, mode: GameMode) {
        self.engine.change_mode(mode);
        if let Err(e) = self.preferences.save_mode(mode) {
            warn!(error = %e, "Failed to persist game mode");
        }
    }

    /// Changes the theme and saves it. The game continues.
    #[instrument(skip(self))]
    pub fn change_theme(&mut self, theme: Theme) {
        self.theme = theme;
        info!(%theme, "Theme changed");
        if let Err(e) = self.preferences.save_theme(theme) {
            warn!(error = %e, "Failed to persist theme");
        }
    }

    /// Zeroes and saves the tally.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.engine.reset_scores();
        self.persist_scores();
    }

    fn persist_scores(&mut self) {
        if let Err(e) = self.preferences.save_scores(self.engine.scores()) {
            warn!(error = %e, "Failed to persist scores");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{FeedbackEvent, RecordingFeedback};
    use crate::games::tictactoe::{GameStatus, Player};
    use crate::scores::ScoreTally;
    use crate::storage::{MemoryStore, StorageError};

    /// Store whose writes always fail.
    #[derive(Debug, Default)]
    struct BrokenStore;

    impl SettingsStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::new("disk on fire"))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::new("disk on fire"))
        }
    }

    fn session() -> Session<MemoryStore, RecordingFeedback> {
        Session::open_with_rng(
            MemoryStore::new(),
            RecordingFeedback::default(),
            StdRng::seed_from_u64(9),
        )
    }

    #[test]
    fn test_play_persists_scores_and_emits_feedback() {
        let mut session = session();
        for index in [0, 3, 1, 4, 2] {
            session.play(index).unwrap();
        }

        assert_eq!(session.engine().status(), GameStatus::Won(Player::X));
        assert_eq!(session.preferences().load().scores.x, 1);
        assert_eq!(session.feedback().events.len(), 6);
        assert!(matches!(
            session.feedback().events.last(),
            Some(FeedbackEvent::Confetti(_))
        ));
    }

    #[test]
    fn test_settings_changes_are_saved() {
        let mut session = session();
        session.change_size(BoardSize::new(5).unwrap());
        session.change_mode(GameMode::VsAi);
        session.change_theme(Theme::Retro);

        let loaded = session.preferences().load();
        assert_eq!(loaded.size.get(), 5);
        assert_eq!(loaded.mode, GameMode::VsAi);
        assert_eq!(loaded.theme, Theme::Retro);
        assert_eq!(session.config(), loaded);
    }

    #[test]
    fn test_broken_store_does_not_corrupt_engine() {
        let mut session =
            Session::open_with_rng(BrokenStore, RecordingFeedback::default(), StdRng::seed_from_u64(1));
        assert_eq!(session.config(), GameConfig::default());

        session.play(4).unwrap();
        session.change_theme(Theme::Cosmic);
        assert_eq!(session.engine().board().empty_cells().len(), 8);
        assert_eq!(session.theme(), Theme::Cosmic);
        assert_eq!(*session.engine().scores(), ScoreTally::default());
    }
}
