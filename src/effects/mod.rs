//! Decorative effects: theme palettes, background particles, and feedback
//! events for sound and confetti.
//!
//! Nothing here feeds back into game logic.

pub mod feedback;
pub mod palette;
pub mod particles;

pub use feedback::{
    ConfettiBurst, FeedbackEvent, FeedbackSink, RecordingFeedback, TracingFeedback, Tone,
    feedback_for,
};
pub use palette::{Palette, palette};
pub use particles::{Canvas, DrawCommand, Frame, PARTICLE_COUNT, Particle, spawn, step};
