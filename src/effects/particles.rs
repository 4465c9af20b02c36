//! Background particle animation as a pure step function.
//!
//! The caller owns the particle list and the palette; [`step`] returns the
//! next list together with the draw commands for the frame. No theme or
//! canvas state is captured between frames.

use super::Palette;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Particles spawned for a full-screen canvas.
pub const PARTICLE_COUNT: usize = 50;

/// Drawing surface dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

/// A drifting dot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
    /// Radius in pixels.
    pub size: f64,
    /// Horizontal velocity per frame.
    pub speed_x: f64,
    /// Vertical velocity per frame.
    pub speed_y: f64,
}

/// A single drawing instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    /// Clear the whole canvas.
    Clear {
        /// Width to clear.
        width: f64,
        /// Height to clear.
        height: f64,
    },
    /// Fill a circle.
    Circle {
        /// Center x.
        x: f64,
        /// Center y.
        y: f64,
        /// Radius.
        radius: f64,
        /// Fill color as a hex string.
        color: &'static str,
    },
}

/// Output of one animation step.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Particle positions for the next step.
    pub particles: Vec<Particle>,
    /// Commands that draw this frame, starting with a clear.
    pub commands: Vec<DrawCommand>,
}

/// Scatters `count` particles over the canvas.
///
/// Radii fall in `[2, 7)` and each velocity component in `[-1, 1)`.
#[instrument(skip(rng))]
pub fn spawn<R: Rng + ?Sized>(count: usize, canvas: Canvas, rng: &mut R) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            x: rng.random::<f64>() * canvas.width,
            y: rng.random::<f64>() * canvas.height,
            size: rng.random::<f64>() * 5.0 + 2.0,
            speed_x: rng.random::<f64>() * 2.0 - 1.0,
            speed_y: rng.random::<f64>() * 2.0 - 1.0,
        })
        .collect()
}

/// Advances every particle by its velocity and reverses a velocity
/// component once the particle has left the canvas on that axis.
///
/// Each particle is drawn in a color picked at random from `palette`.
/// An empty palette yields no circle commands.
#[instrument(skip(particles, palette, rng), fields(count = particles.len()))]
pub fn step<R: Rng + ?Sized>(
    particles: &[Particle],
    canvas: Canvas,
    palette: Palette,
    rng: &mut R,
) -> Frame {
    let mut commands = Vec::with_capacity(particles.len() + 1);
    commands.push(DrawCommand::Clear {
        width: canvas.width,
        height: canvas.height,
    });

    let particles = particles
        .iter()
        .map(|p| {
            let mut next = *p;
            next.x += next.speed_x;
            next.y += next.speed_y;
            if next.x < 0.0 || next.x > canvas.width {
                next.speed_x = -next.speed_x;
            }
            if next.y < 0.0 || next.y > canvas.height {
                next.speed_y = -next.speed_y;
            }

            if !palette.is_empty() {
                commands.push(DrawCommand::Circle {
                    x: next.x,
                    y: next.y,
                    radius: next.size,
                    color: palette[rng.random_range(0..palette.len())],
                });
            }
            next
        })
        .collect();

    Frame {
        particles,
        commands,
    }
}
