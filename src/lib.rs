//! Spinning Hexagon - a ball bouncing inside a rotating hexagon
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vector math, geometry, collisions, stepping)
//! - `platform`: Clock/renderer capabilities and the headless driver loop
//! - `settings`: Startup configuration with validation
//! - `error`: Configuration and I/O errors

pub mod error;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::Settings;

use glam::Vec2;

/// Default simulation constants
pub mod consts {
    /// Window dimensions (pixels), used to place the hexagon and ball
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;
    /// Target tick rate
    pub const FPS: u32 = 60;

    /// Gravity acceleration (pixels/s², +y is down)
    pub const GRAVITY: f32 = 800.0;
    /// Per-tick velocity damping (friction/air resistance)
    pub const DAMPING: f32 = 0.995;
    /// Bounce restitution coefficient
    pub const RESTITUTION: f32 = 0.9;
    /// Tangential friction applied on a resolved collision
    pub const COLLISION_FRICTION: f32 = 0.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_POS: (f32, f32) = (WIDTH / 2.0, HEIGHT / 2.0 - 150.0);
    pub const BALL_START_VEL: (f32, f32) = (150.0, 0.0);

    /// Hexagon defaults
    pub const HEX_CENTER: (f32, f32) = (WIDTH / 2.0, HEIGHT / 2.0);
    /// Distance from center to vertex
    pub const HEX_RADIUS: f32 = 250.0;
    /// Rotation speed in degrees/sec
    pub const HEX_ANGULAR_SPEED_DEG: f32 = 20.0;
}

/// Convert polar (r, theta) around `center` to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(center: Vec2, r: f32, theta: f32) -> Vec2 {
    center + Vec2::new(r * theta.cos(), r * theta.sin())
}
