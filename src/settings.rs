//! Simulation settings
//!
//! Fixed at startup. Loaded from an optional JSON file; missing fields fall
//! back to the defaults in [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Startup configuration for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Physics ===
    /// Gravity acceleration (pixels/s², +y is down)
    pub gravity: f32,
    /// Per-tick velocity damping, in (0, 1]
    pub damping: f32,
    /// Bounce restitution, in [0, 1]
    pub restitution: f32,
    /// Tangential friction on bounce, in [0, 1]
    pub collision_friction: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_pos: [f32; 2],
    pub ball_vel: [f32; 2],

    // === Hexagon ===
    pub hex_center: [f32; 2],
    /// Distance from center to vertex
    pub hex_radius: f32,
    /// Signed rotation speed in degrees/sec
    pub hex_angular_speed_deg: f32,
    pub initial_rotation_deg: f32,

    // === Loop ===
    /// Target tick rate
    pub fps: u32,
    /// Stop after this many frames (runs forever if unset)
    pub max_frames: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            damping: DAMPING,
            restitution: RESTITUTION,
            collision_friction: COLLISION_FRICTION,

            ball_radius: BALL_RADIUS,
            ball_pos: [BALL_START_POS.0, BALL_START_POS.1],
            ball_vel: [BALL_START_VEL.0, BALL_START_VEL.1],

            hex_center: [HEX_CENTER.0, HEX_CENTER.1],
            hex_radius: HEX_RADIUS,
            hex_angular_speed_deg: HEX_ANGULAR_SPEED_DEG,
            initial_rotation_deg: 0.0,

            fps: FPS,
            max_frames: None,
        }
    }
}

impl Settings {
    /// Hexagon angular speed in radians/sec
    pub fn angular_speed_rad(&self) -> f32 {
        self.hex_angular_speed_deg.to_radians()
    }

    /// Target seconds per tick
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.fps as f32
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject settings that would break the simulation's assumptions
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("gravity", self.gravity),
            ("damping", self.damping),
            ("restitution", self.restitution),
            ("collision_friction", self.collision_friction),
            ("ball_radius", self.ball_radius),
            ("ball_pos.x", self.ball_pos[0]),
            ("ball_pos.y", self.ball_pos[1]),
            ("ball_vel.x", self.ball_vel[0]),
            ("ball_vel.y", self.ball_vel[1]),
            ("hex_center.x", self.hex_center[0]),
            ("hex_center.y", self.hex_center[1]),
            ("hex_radius", self.hex_radius),
            ("hex_angular_speed_deg", self.hex_angular_speed_deg),
            ("initial_rotation_deg", self.initial_rotation_deg),
        ];
        if let Some((name, value)) = scalars.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{name} must be finite, got {value}")));
        }

        if self.ball_radius <= 0.0 {
            return Err(invalid(format!(
                "ball_radius must be > 0, got {}",
                self.ball_radius
            )));
        }
        if self.ball_radius >= self.hex_radius {
            return Err(invalid(format!(
                "ball_radius ({}) must be smaller than hex_radius ({})",
                self.ball_radius, self.hex_radius
            )));
        }
        // Inscribed circle of the hexagon, so the ball clears every wall at any rotation
        let apothem = self.hex_radius * (std::f32::consts::PI / 6.0).cos();
        let offset = Vec2::from(self.ball_pos).distance(Vec2::from(self.hex_center));
        if offset + self.ball_radius >= apothem {
            return Err(invalid(format!(
                "ball at {:?} (radius {}) must start inside the hexagon: \
                 {offset} from hex_center, apothem {apothem}",
                self.ball_pos, self.ball_radius
            )));
        }
        if self.fps == 0 {
            return Err(invalid("fps must be > 0".to_string()));
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(invalid(format!(
                "damping must be in (0, 1], got {}",
                self.damping
            )));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(invalid(format!(
                "restitution must be in [0, 1], got {}",
                self.restitution
            )));
        }
        if !(0.0..=1.0).contains(&self.collision_friction) {
            return Err(invalid(format!(
                "collision_friction must be in [0, 1], got {}",
                self.collision_friction
            )));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> ConfigError {
    ConfigError::InvalidParam(msg)
}
