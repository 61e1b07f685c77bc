//! Collision detection and response against moving walls
//!
//! The ball is tested against each straight wall of the boundary. A wall that
//! belongs to a spinning body moves, so the bounce is computed in the wall's
//! frame of reference:
//! 1. Take the wall's velocity at the contact point.
//! 2. Get the ball's velocity relative to the wall.
//! 3. Reflect that relative velocity about the inward normal, with restitution.
//! 4. Add the wall's velocity back.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::boundary::Boundary;
use super::geometry::Segment;
use super::vector::{normalize, reflect_with_restitution};

/// Material response of a bounce
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionParams {
    /// Share of normal relative speed kept after a bounce (0 = dead, 1 = elastic)
    pub restitution: f32,
    /// Share of tangential relative speed removed by a bounce
    pub friction: f32,
}

impl Default for CollisionParams {
    fn default() -> Self {
        Self {
            restitution: crate::consts::RESTITUTION,
            friction: crate::consts::COLLISION_FRICTION,
        }
    }
}

/// A ball overlapping a wall
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Closest point on the wall to the ball center
    pub point: Vec2,
    /// Unit normal pointing into the boundary interior
    pub normal: Vec2,
    /// Overlap between the ball surface and the wall
    pub penetration: f32,
    /// Velocity of the wall material at `point`
    pub wall_velocity: Vec2,
}

/// Normal of `edge` oriented toward `interior`
///
/// The candidate is the tangent turned +90°. It is flipped when it faces away
/// from the interior, so winding and spin direction don't matter.
pub fn inward_normal(edge: &Segment, interior: Vec2) -> Vec2 {
    let t = edge.tangent();
    let candidate = normalize(Vec2::new(-t.y, t.x));
    let to_interior = interior - edge.midpoint();
    if candidate.dot(to_interior) < 0.0 {
        -candidate
    } else {
        candidate
    }
}

/// Check whether the ball overlaps `edge`
///
/// Returns `None` when the ball center is at least one radius from the wall.
pub fn detect_contact<B: Boundary + ?Sized>(
    ball: &Ball,
    edge: &Segment,
    boundary: &B,
) -> Option<Contact> {
    let (point, _) = edge.closest_point(ball.pos);
    let dist = (ball.pos - point).length();

    if dist >= ball.radius {
        return None;
    }

    Some(Contact {
        point,
        normal: inward_normal(edge, boundary.interior_point()),
        penetration: ball.radius - dist,
        wall_velocity: boundary.velocity_at(point),
    })
}

/// Bounce the ball off a detected contact
///
/// Only acts when the ball moves into the wall in the wall's frame; a ball that
/// is leaving or sliding is left alone even while overlapping. Returns whether
/// the ball was changed.
pub fn resolve_contact(ball: &mut Ball, contact: &Contact, params: &CollisionParams) -> bool {
    let n = contact.normal;
    let rel_vel = ball.vel - contact.wall_velocity;

    if rel_vel.dot(n) >= 0.0 {
        return false;
    }

    let mut reflected = reflect_with_restitution(rel_vel, n, params.restitution);

    if params.friction > 0.0 {
        let normal_part = n * reflected.dot(n);
        let tangent_part = reflected - normal_part;
        reflected = normal_part + tangent_part * (1.0 - params.friction);
    }

    ball.vel = reflected + contact.wall_velocity;
    // Single-pass push-out, no iteration
    ball.pos += n * contact.penetration;
    true
}

/// Resolve the ball against every wall of `boundary`, in edge order
///
/// All walls are checked; corrections compound when several walls overlap the
/// ball in the same tick. Returns the number of contacts that changed the ball.
pub fn resolve_against_boundary<B: Boundary + ?Sized>(
    ball: &mut Ball,
    boundary: &B,
    params: &CollisionParams,
) -> usize {
    let mut resolved = 0;
    for (i, edge) in boundary.edges().iter().enumerate() {
        let Some(contact) = detect_contact(ball, edge, boundary) else {
            continue;
        };
        if resolve_contact(ball, &contact, params) {
            log::debug!(
                "edge {i}: penetration {:.3}, wall velocity ({:.1}, {:.1}), ball velocity now ({:.1}, {:.1})",
                contact.penetration,
                contact.wall_velocity.x,
                contact.wall_velocity.y,
                ball.vel.x,
                ball.vel.y,
            );
            resolved += 1;
        }
    }
    resolved
}
