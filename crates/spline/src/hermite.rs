//! Cubic Hermite segment evaluation.
//!
//! A segment is defined by its endpoints `p0`, `p1` and the tangents `m0`,
//! `m1` at those endpoints. The local parameter `t` runs over `[0, 1]`; the
//! caller is responsible for keeping it there.

use glam::Vec3;

use crate::constants::{NORMAL_SCALE, WORLD_UP};

/// Position on a Hermite segment at `t`.
///
/// `(2t³ - 3t² + 1)p0 + (t³ - 2t² + t)m0 + (-2t³ + 3t²)p1 + (t³ - t²)m1`
pub fn evaluate_position(p0: Vec3, p1: Vec3, m0: Vec3, m1: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;

    (2.0 * t3 - 3.0 * t2 + 1.0) * p0
        + (t3 - 2.0 * t2 + t) * m0
        + (-2.0 * t3 + 3.0 * t2) * p1
        + (t3 - t2) * m1
}

/// Unit tangent on a Hermite segment at `t`.
///
/// Derivative of [`evaluate_position`], normalized. Duplicate control points
/// can make the derivative vanish; the result is then `Vec3::ZERO`.
pub fn evaluate_tangent(p0: Vec3, p1: Vec3, m0: Vec3, m1: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;

    let derivative = (6.0 * t2 - 6.0 * t) * p0
        + (3.0 * t2 - 4.0 * t + 1.0) * m0
        + (-6.0 * t2 + 6.0 * t) * p1
        + (3.0 * t2 - 2.0 * t) * m1;

    derivative.normalize_or_zero()
}

/// Half-length normal perpendicular to `tangent` and world up.
///
/// Zero when the tangent is zero or parallel to [`WORLD_UP`].
pub fn normal_from_tangent(tangent: Vec3) -> Vec3 {
    tangent.cross(WORLD_UP).normalize_or_zero() * NORMAL_SCALE
}
