//! The ball: a point mass with a radius

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Fixed for the lifetime of the simulation
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Accelerate along +y (screen down) by `gravity * dt`
    #[inline]
    pub fn apply_gravity(&mut self, dt: f32, gravity: f32) {
        self.vel.y += gravity * dt;
    }

    /// Explicit Euler position update
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Scale velocity once per tick. Not dt-scaled, so strength depends on tick rate.
    #[inline]
    pub fn apply_damping(&mut self, factor: f32) {
        self.vel *= factor;
    }

    /// Kinetic energy with unit mass
    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.vel.length_squared()
    }
}
