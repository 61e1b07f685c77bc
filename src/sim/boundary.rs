//! Rigid rotating boundary
//!
//! The resolver only sees the [`Boundary`] trait, so tests can swap in
//! synthetic walls without a hexagon.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{HEX_SIDES, Segment, hexagon_vertices, polygon_edges};

/// A convex boundary made of straight walls that may be moving
pub trait Boundary {
    /// Walls in a fixed order, recomputed from the current pose
    fn edges(&self) -> Vec<Segment>;

    /// A point strictly inside the boundary, used to orient wall normals
    fn interior_point(&self) -> Vec2;

    /// Instantaneous velocity of the boundary material at `point`
    fn velocity_at(&self, point: Vec2) -> Vec2;

    /// Advance the boundary's motion by `dt` seconds
    fn advance(&mut self, dt: f32);
}

/// A regular hexagon spinning at constant angular speed about its center
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotatingHexagon {
    pub center: Vec2,
    /// Distance from center to vertex
    pub circumradius: f32,
    /// Signed angular speed (radians/sec, positive is toward +y from +x)
    pub angular_speed: f32,
    /// Accumulated rotation (radians). Never wrapped.
    pub rotation: f32,
}

impl RotatingHexagon {
    pub fn new(center: Vec2, circumradius: f32, angular_speed: f32) -> Self {
        Self {
            center,
            circumradius,
            angular_speed,
            rotation: 0.0,
        }
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Current corner positions
    pub fn vertices(&self) -> [Vec2; HEX_SIDES] {
        hexagon_vertices(self.center, self.circumradius, self.rotation)
    }

    /// Distance from center to the middle of each side
    #[inline]
    pub fn apothem(&self) -> f32 {
        self.circumradius * (std::f32::consts::PI / HEX_SIDES as f32).cos()
    }
}

impl Boundary for RotatingHexagon {
    fn edges(&self) -> Vec<Segment> {
        polygon_edges(&self.vertices())
    }

    fn interior_point(&self) -> Vec2 {
        self.center
    }

    /// Tangential velocity ω × r for a point rigidly attached to the hexagon
    fn velocity_at(&self, point: Vec2) -> Vec2 {
        let r = point - self.center;
        Vec2::new(-self.angular_speed * r.y, self.angular_speed * r.x)
    }

    fn advance(&mut self, dt: f32) {
        self.rotation += self.angular_speed * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_accumulates_without_wrap() {
        let mut hex = RotatingHexagon::new(Vec2::ZERO, 100.0, 2.0);
        for _ in 0..10 {
            hex.advance(0.5);
        }
        // 10 * 0.5 * 2.0 = 10 rad, well past 2π
        assert!((hex.rotation - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_velocity_is_tangential() {
        let hex = RotatingHexagon::new(Vec2::new(400.0, 300.0), 250.0, 0.5);
        let p = Vec2::new(500.0, 300.0);
        let v = hex.velocity_at(p);
        // r = (100, 0) → v = ω * (0, 100)
        assert!((v - Vec2::new(0.0, 50.0)).length() < 1e-4);
        assert!(v.dot(p - hex.center).abs() < 1e-3);
    }

    #[test]
    fn test_center_has_zero_velocity() {
        let hex = RotatingHexagon::new(Vec2::new(10.0, 20.0), 50.0, 3.0);
        assert_eq!(hex.velocity_at(hex.center), Vec2::ZERO);
    }

    #[test]
    fn test_edges_follow_rotation() {
        let mut hex = RotatingHexagon::new(Vec2::ZERO, 100.0, 1.0);
        let before = hex.edges();
        hex.advance(0.1);
        let after = hex.edges();
        assert_eq!(before.len(), 6);
        assert_eq!(after.len(), 6);
        assert!((before[0].a - after[0].a).length() > 1.0);
        assert!((after[0].a - hex.vertices()[0]).length() < 1e-6);
    }

    #[test]
    fn test_apothem() {
        let hex = RotatingHexagon::new(Vec2::ZERO, 100.0, 0.0);
        for e in hex.edges() {
            assert!((e.midpoint().length() - hex.apothem()).abs() < 1e-3);
        }
    }
}
