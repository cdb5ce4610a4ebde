//! Total exterior turning angle of a closed polygon.
//!
//! Model
//! - A ring `p[0..n]` is closed implicitly; an explicit closing copy of `p[0]`
//!   at the end is dropped first so the closing edge is not counted twice.
//! - At every vertex the direction of travel turns by
//!   `angle_between(p[j] - p[i], p[k] - p[j])` with `j = i+1`, `k = i+2` (mod n).
//!   One full traversal sums n such terms.
//! - For a simple ring the sum is `±2π`; multiply wound rings give larger
//!   multiples.

use nalgebra::Vector2;

use crate::angle::angle_between;
use crate::cfg::{is_close, WindingCfg};
use crate::error::WindingError;

/// Drop the last point if it repeats the first (per-coordinate closeness).
pub fn trim_closing_point<'a>(
    points: &'a [Vector2<f64>],
    cfg: &WindingCfg,
) -> &'a [Vector2<f64>] {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 1 => {
            let closed = is_close(first.x, last.x, cfg.close_rtol, cfg.close_atol)
                && is_close(first.y, last.y, cfg.close_rtol, cfg.close_atol);
            if closed {
                tracing::debug!(len = points.len(), "dropping closing point");
                &points[..points.len() - 1]
            } else {
                points
            }
        }
        _ => points,
    }
}

/// Per-vertex signed turning angles; entry `i` is the turn taken at `p[i+1]`.
pub fn turning_angles(
    points: &[Vector2<f64>],
    cfg: &WindingCfg,
) -> Result<Vec<f64>, WindingError> {
    if points.len() < 3 {
        return Err(WindingError::TooFewPoints { len: points.len() });
    }
    let ring = trim_closing_point(points, cfg);
    let n = ring.len();
    if n < 3 {
        return Err(WindingError::TooFewPoints { len: n });
    }

    let edges: Vec<Vector2<f64>> = (0..n).map(|i| ring[(i + 1) % n] - ring[i]).collect();
    if let Some(index) = edges.iter().position(|e| {
        let len = e.norm();
        !len.is_finite() || len <= 0.0
    }) {
        return Err(WindingError::DegenerateEdge { index });
    }

    Ok((0..n)
        .map(|i| angle_between(edges[i], edges[(i + 1) % n]))
        .collect())
}

/// Cumulative signed turning angle (radians) with explicit tolerances.
pub fn total_angle_with(points: &[Vector2<f64>], cfg: &WindingCfg) -> Result<f64, WindingError> {
    Ok(turning_angles(points, cfg)?.into_iter().sum())
}

/// Cumulative signed turning angle (radians) of a closed polygon.
///
/// Errors
/// - `TooFewPoints` if fewer than three points remain.
/// - `DegenerateEdge` if two consecutive points coincide.
pub fn total_angle(points: &[Vector2<f64>]) -> Result<f64, WindingError> {
    total_angle_with(points, &WindingCfg::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn trim_only_drops_matching_last_point() {
        let cfg = WindingCfg::default();
        let open = [vector![0.0, 0.0], vector![1.0, 0.0], vector![1.0, 1.0]];
        assert_eq!(trim_closing_point(&open, &cfg).len(), 3);

        let closed = [
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![1e-9, -1e-9],
        ];
        assert_eq!(trim_closing_point(&closed, &cfg).len(), 3);
        assert!(trim_closing_point(&[], &cfg).is_empty());
    }

    #[test]
    fn edge_vectors_wrap_around() {
        // i = n-1 pairs the closing edge with the first edge
        let cfg = WindingCfg::default();
        let pts = [vector![0.0, 0.0], vector![1.0, 0.0], vector![1.0, 1.0]];
        let turns = turning_angles(&pts, &cfg).unwrap();
        assert_eq!(turns.len(), 3);
        let q = std::f64::consts::FRAC_PI_4;
        assert!((turns[0] - 2.0 * q).abs() < 1e-12);
        assert!((turns[1] - 3.0 * q).abs() < 1e-12);
        assert!((turns[2] - 3.0 * q).abs() < 1e-12);
    }

    #[test]
    fn rejects_short_and_degenerate_rings() {
        let two = [vector![0.0, 0.0], vector![1.0, 0.0]];
        assert_eq!(total_angle(&two), Err(WindingError::TooFewPoints { len: 2 }));

        let closed_segment = [vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 0.0]];
        assert_eq!(
            total_angle(&closed_segment),
            Err(WindingError::TooFewPoints { len: 2 })
        );

        let repeated = [
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
        ];
        assert_eq!(
            total_angle(&repeated),
            Err(WindingError::DegenerateEdge { index: 1 })
        );
    }
}
