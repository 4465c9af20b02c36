//! Neon Tic-Tac-Toe library - N×N tic-tac-toe engine and its collaborators
//!
//! # Architecture
//!
//! - **Engine**: pure game state machine with win/draw detection on any
//!   board from 3×3 to 10×10 and a one-ply AI opponent
//! - **Storage**: keyed settings records (size, mode, theme, scores)
//! - **Effects**: theme palettes, background particles, sound/confetti cues
//! - **Session**: the engine wired to storage and feedback
//!
//! # Example
//!
//! ```
//! use neon_tictactoe::{GameConfig, GameEngine, GameMode, GameStatus, Player};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let config = GameConfig { mode: GameMode::VsAi, ..GameConfig::default() };
//! let mut game = GameEngine::with_rng(&config, StdRng::seed_from_u64(1));
//!
//! // X plays the centre, O answers in the same call.
//! let report = game.apply_move(4).unwrap();
//! assert_eq!(report.placements().len(), 2);
//! assert_eq!(game.current_player(), Player::X);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod scores;
mod session;
mod settings;
mod storage;

pub mod effects;
pub mod render;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AiChoice, Board, BoardSize, Cell, GameEngine, GameMode, GameStatus, MAX_BOARD_SIZE,
    MIN_BOARD_SIZE, MoveError, MoveReason, Placement, Player, TurnReport, WinningLine,
    choose_move,
};

// Crate-level exports - Rules and invariants
pub use games::tictactoe::invariants::{
    AlternatingTurnInvariant, BoardShapeInvariant, ConsistentWinnerInvariant, EngineInvariants,
    Invariant, InvariantSet, InvariantViolation,
};
pub use games::tictactoe::rules::{check_winner, is_draw, is_full, lines, winning_lines};

// Crate-level exports - Scores and settings
pub use scores::ScoreTally;
pub use settings::{
    ConfigError, GameConfig, SettingsError, Theme, parse_mode, parse_size, parse_theme,
};

// Crate-level exports - Persistence
pub use storage::{
    BOARD_SIZE_KEY, GAME_MODE_KEY, JsonFileStore, MemoryStore, Preferences, SCORES_KEY,
    SettingsStore, StorageError, THEME_KEY,
};

// Crate-level exports - Effects
pub use effects::{
    Canvas, ConfettiBurst, DrawCommand, FeedbackEvent, FeedbackSink, Frame, PARTICLE_COUNT,
    Palette, Particle, RecordingFeedback, Tone, TracingFeedback, feedback_for, palette, spawn,
    step,
};

// Crate-level exports - Session
pub use session::Session;
