//! Simulation state and per-run physics parameters
//!
//! One `SimState` is a complete, self-contained simulation. Nothing is global,
//! so any number of instances can run side by side.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::boundary::{Boundary, RotatingHexagon};
use super::collision::CollisionParams;
use crate::settings::Settings;

/// Physics constants fixed for the lifetime of a simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimParams {
    /// Downward (+y) acceleration in pixels/s²
    pub gravity: f32,
    /// Per-tick velocity multiplier in (0, 1]
    pub damping: f32,
    pub collision: CollisionParams,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            gravity: crate::consts::GRAVITY,
            damping: crate::consts::DAMPING,
            collision: CollisionParams::default(),
        }
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Wall contacts that changed the ball
    pub contacts: usize,
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState<B = RotatingHexagon> {
    pub ball: Ball,
    pub boundary: B,
    pub params: SimParams,
    /// Simulated seconds elapsed
    pub time: f64,
    /// Simulation tick counter
    pub ticks: u64,
}

impl<B: Boundary> SimState<B> {
    pub fn new(ball: Ball, boundary: B, params: SimParams) -> Self {
        Self {
            ball,
            boundary,
            params,
            time: 0.0,
            ticks: 0,
        }
    }

    /// Ball kinetic energy (unit mass)
    pub fn kinetic_energy(&self) -> f32 {
        self.ball.kinetic_energy()
    }
}

impl SimState<RotatingHexagon> {
    /// Build the initial state from validated settings
    pub fn from_settings(settings: &Settings) -> Self {
        let ball = Ball::new(
            Vec2::from(settings.ball_pos),
            Vec2::from(settings.ball_vel),
            settings.ball_radius,
        );
        let hexagon = RotatingHexagon::new(
            Vec2::from(settings.hex_center),
            settings.hex_radius,
            settings.angular_speed_rad(),
        )
        .with_rotation(settings.initial_rotation_deg.to_radians());
        let params = SimParams {
            gravity: settings.gravity,
            damping: settings.damping,
            collision: CollisionParams {
                restitution: settings.restitution,
                friction: settings.collision_friction,
            },
        };
        Self::new(ball, hexagon, params)
    }
}

impl Default for SimState<RotatingHexagon> {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
