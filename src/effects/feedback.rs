//! Sound and confetti cues derived from a turn.

use crate::games::tictactoe::{GameStatus, Player, TurnReport};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// A short sine beep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    /// Pitch in hertz.
    pub frequency_hz: f64,
    /// Length in milliseconds.
    pub duration_ms: u64,
}

impl Tone {
    /// The placement beep for `player`: 440 Hz for X, 660 Hz for O.
    pub fn for_player(player: Player) -> Self {
        let frequency_hz = match player {
            Player::X => 440.0,
            Player::O => 660.0,
        };
        Self {
            frequency_hz,
            duration_ms: 100,
        }
    }
}

/// Parameters of a confetti burst.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfettiBurst {
    /// Number of confetti pieces.
    pub particle_count: u32,
    /// Spread angle in degrees.
    pub spread_degrees: f64,
    /// Vertical launch point as a fraction of the viewport height.
    pub origin_y: f64,
}

impl Default for ConfettiBurst {
    fn default() -> Self {
        Self {
            particle_count: 150,
            spread_degrees: 90.0,
            origin_y: 0.6,
        }
    }
}

/// A cue for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FeedbackEvent {
    /// A mark was placed.
    Tone(Tone),
    /// The game was won.
    Confetti(ConfettiBurst),
}

/// Receives feedback cues. Nothing is returned to the engine.
pub trait FeedbackSink {
    /// Handles one cue.
    fn emit(&mut self, event: &FeedbackEvent);
}

/// Cues for a turn: one tone per placement, then confetti on a win.
#[instrument(skip(report))]
pub fn feedback_for(report: &TurnReport) -> Vec<FeedbackEvent> {
    let mut events: Vec<FeedbackEvent> = report
        .placements()
        .iter()
        .map(|p| FeedbackEvent::Tone(Tone::for_player(p.player)))
        .collect();
    if matches!(report.status(), GameStatus::Won(_)) {
        events.push(FeedbackEvent::Confetti(ConfettiBurst::default()));
    }
    events
}

/// Sink that logs each cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFeedback;

impl FeedbackSink for TracingFeedback {
    fn emit(&mut self, event: &FeedbackEvent) {
        match event {
            FeedbackEvent::Tone(tone) => {
                info!(frequency_hz = tone.frequency_hz, duration_ms = tone.duration_ms, "Tone")
            }
            FeedbackEvent::Confetti(burst) => {
                info!(particles = burst.particle_count, "Confetti")
            }
        }
    }
}

/// Sink that keeps every cue, for inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingFeedback {
    /// Cues in the order they arrived.
    pub events: Vec<FeedbackEvent>,
}

impl FeedbackSink for RecordingFeedback {
    fn emit(&mut self, event: &FeedbackEvent) {
        self.events.push(*event);
    }
}
