//! 2D vector helpers on top of glam
//!
//! Addition, subtraction, scaling and dot product are glam's own operators.
//! Only the operations whose edge cases matter to the physics live here.

use glam::Vec2;

/// Unit vector in the direction of `v`, or zero if `v` has exactly zero length.
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    let len = v.length();
    if len == 0.0 { Vec2::ZERO } else { v / len }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n. `normal` must be unit length.
#[inline]
pub fn reflect(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Reflect with a restitution coefficient: v' = v - (1 + e)(v·n)n
///
/// `e = 1` is [`reflect`]; `e = 0` removes the normal component entirely.
#[inline]
pub fn reflect_with_restitution(velocity: Vec2, normal: Vec2, restitution: f32) -> Vec2 {
    velocity - (1.0 + restitution) * velocity.dot(normal) * normal
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_zero() {
        assert_eq!(normalize(Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_normalize_direction() {
        let n = normalize(Vec2::new(3.0, 4.0));
        assert!((n.x - 0.6).abs() < 1e-6);
        assert!((n.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_reflect_velocity() {
        // Ball moving right, hits vertical wall (normal pointing left)
        let velocity = Vec2::new(100.0, 0.0);
        let normal = Vec2::new(-1.0, 0.0);

        let reflected = reflect(velocity, normal);
        assert!((reflected.x - (-100.0)).abs() < 0.001);
        assert!(reflected.y.abs() < 0.001);
    }

    #[test]
    fn test_restitution_zero_kills_normal_component() {
        let v = Vec2::new(5.0, 10.0);
        let n = Vec2::new(0.0, -1.0);
        let out = reflect_with_restitution(v, n, 0.0);
        assert!(out.dot(n).abs() < 1e-6);
        assert!((out.x - 5.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn normalize_is_unit_and_parallel(x in -1e3f32..1e3, y in -1e3f32..1e3) {
            let v = Vec2::new(x, y);
            prop_assume!(v.length() > 1e-3);
            let n = normalize(v);
            prop_assert!((n.length() - 1.0).abs() < 1e-4);
            // same direction: parallel and not flipped
            prop_assert!(n.perp_dot(v).abs() < 1e-2 * v.length());
            prop_assert!(n.dot(v) > 0.0);
        }

        #[test]
        fn reflect_preserves_speed(
            vx in -500f32..500.0,
            vy in -500f32..500.0,
            angle in 0f32..std::f32::consts::TAU,
        ) {
            let v = Vec2::new(vx, vy);
            let n = Vec2::new(angle.cos(), angle.sin());
            let r = reflect(v, n);
            prop_assert!((r.length() - v.length()).abs() < 1e-2);
            let e = reflect_with_restitution(v, n, 1.0);
            prop_assert!((e - r).length() < 1e-3);
        }
    }
}
