//! Segment geometry and hexagon vertex generation

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_3;

use crate::polar_to_cartesian;

/// Number of sides of the boundary polygon
pub const HEX_SIDES: usize = 6;

/// A straight wall segment from `a` to `b`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// Direction vector from `a` to `b` (not normalized)
    #[inline]
    pub fn tangent(&self) -> Vec2 {
        self.b - self.a
    }

    #[inline]
    pub fn midpoint(&self) -> Vec2 {
        (self.a + self.b) * 0.5
    }

    /// Closest point on this segment to `p`
    pub fn closest_point(&self, p: Vec2) -> (Vec2, f32) {
        closest_point_on_segment(self.a, self.b, p)
    }
}

/// Find the point on segment AB closest to P
///
/// Returns the point and the clamped projection parameter `t ∈ [0, 1]`.
/// A zero-length segment yields `(a, 0.0)`.
pub fn closest_point_on_segment(a: Vec2, b: Vec2, p: Vec2) -> (Vec2, f32) {
    let ab = b - a;
    let ab_len_sq = ab.length_squared();

    if ab_len_sq == 0.0 {
        return (a, 0.0);
    }

    let t = ((p - a).dot(ab) / ab_len_sq).clamp(0.0, 1.0);
    (a + ab * t, t)
}

/// Compute the six vertices of a hexagon
///
/// Vertex `k` sits at angle `rotation + k·π/3`, so vertex 0 always tracks the
/// same physical corner as the hexagon turns.
pub fn hexagon_vertices(center: Vec2, radius: f32, rotation: f32) -> [Vec2; HEX_SIDES] {
    std::array::from_fn(|k| polar_to_cartesian(center, radius, rotation + k as f32 * FRAC_PI_3))
}

/// Pair consecutive vertices cyclically into edges
pub fn polygon_edges(vertices: &[Vec2]) -> Vec<Segment> {
    let n = vertices.len();
    (0..n)
        .map(|i| Segment::new(vertices[i], vertices[(i + 1) % n]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::TAU;

    #[test]
    fn test_closest_point_interior() {
        let (q, t) = closest_point_on_segment(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(4.0, 5.0),
        );
        assert!((q - Vec2::new(4.0, 0.0)).length() < 1e-6);
        assert!((t - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_closest_point_beyond_b() {
        let b = Vec2::new(10.0, 0.0);
        let (q, t) = closest_point_on_segment(Vec2::ZERO, b, Vec2::new(25.0, 3.0));
        assert_eq!(t, 1.0);
        assert_eq!(q, b);
    }

    #[test]
    fn test_closest_point_degenerate_segment() {
        let a = Vec2::new(3.0, 3.0);
        let (q, t) = closest_point_on_segment(a, a, Vec2::new(100.0, -7.0));
        assert_eq!(q, a);
        assert_eq!(t, 0.0);
    }

    #[test]
    fn test_hexagon_vertices_on_circle() {
        let center = Vec2::new(400.0, 300.0);
        let verts = hexagon_vertices(center, 250.0, 0.3);
        assert_eq!(verts.len(), 6);
        for v in verts {
            assert!(((v - center).length() - 250.0).abs() < 1e-3);
        }
        // Adjacent vertices of a regular hexagon are one circumradius apart
        for e in polygon_edges(&verts) {
            assert!((e.tangent().length() - 250.0).abs() < 1e-2);
        }
    }

    #[test]
    fn test_vertex_zero_tracks_rotation() {
        let verts = hexagon_vertices(Vec2::ZERO, 1.0, 0.0);
        assert!((verts[0] - Vec2::new(1.0, 0.0)).length() < 1e-6);
        let turned = hexagon_vertices(Vec2::ZERO, 1.0, FRAC_PI_3 / 2.0);
        // Vertex 0 moved half way toward the old vertex 1, no relabeling
        let mid_dir = (verts[0] + verts[1]).normalize();
        assert!((turned[0] - mid_dir).length() < 1e-5);
    }

    #[test]
    fn test_polygon_edges_wrap() {
        let verts = hexagon_vertices(Vec2::ZERO, 1.0, 0.0);
        let edges = polygon_edges(&verts);
        assert_eq!(edges.len(), 6);
        assert_eq!(edges[5].a, verts[5]);
        assert_eq!(edges[5].b, verts[0]);
    }

    proptest! {
        #[test]
        fn closest_point_stays_on_segment(
            ax in -100f32..100.0, ay in -100f32..100.0,
            bx in -100f32..100.0, by in -100f32..100.0,
            px in -300f32..300.0, py in -300f32..300.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assume!(a.distance(b) > 1e-2);
            let (q, t) = closest_point_on_segment(a, b, Vec2::new(px, py));
            prop_assert!((0.0..=1.0).contains(&t));
            prop_assert!((q - (a + (b - a) * t)).length() < 1e-3);
            // collinear with AB
            let tol = 1e-3 * (b - a).length() * (q - a).length().max(1.0);
            prop_assert!((b - a).perp_dot(q - a).abs() < tol);
        }

        #[test]
        fn full_turn_gives_same_vertices(
            cx in -500f32..500.0, cy in -500f32..500.0,
            r in 1f32..400.0, theta in -10f32..10.0,
        ) {
            let c = Vec2::new(cx, cy);
            let v0 = hexagon_vertices(c, r, theta);
            let v1 = hexagon_vertices(c, r, theta + TAU);
            for (p, q) in v0.iter().zip(v1.iter()) {
                prop_assert!((*p - *q).length() < 1e-3 * r.max(1.0));
            }
        }
    }
}
