//! Signed angles between 2D vectors.
//!
//! Convention
//! - Positive angles turn counterclockwise, negative clockwise.
//! - The sign comes from the 2×2 determinant `det[a b]`; the magnitude from
//!   `acos` of the clamped dot product of the unit vectors.
//! - Colinear pairs (determinant exactly zero) take sign +1, so a reversal
//!   reports `+π`, never `-π`. Axis-aligned rings depend on this staying fixed.

use nalgebra::{Matrix2, Vector2};

/// Unit vector in the direction of `v`.
///
/// Pre: `v` is non-zero. The zero vector yields non-finite components.
#[inline]
pub fn normalize(v: Vector2<f64>) -> Vector2<f64> {
    v / v.norm()
}

/// Radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    180.0 * rad / std::f64::consts::PI
}

/// Signed angle (radians, in `[-π, π]`) that rotates `v1` onto the direction of `v2`.
///
/// Pre: neither vector is zero.
pub fn angle_between(v1: Vector2<f64>, v2: Vector2<f64>) -> f64 {
    let n1 = normalize(v1);
    let n2 = normalize(v2);

    let det = Matrix2::from_columns(&[n1, n2]).determinant();
    let sign = if det < 0.0 { -1.0 } else { 1.0 };

    // |dot| may overshoot 1 by an ulp or two
    let cos = n1.dot(&n2).clamp(-1.0, 1.0);
    sign * cos.acos()
}
