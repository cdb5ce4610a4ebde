//! Rotation count and orientation of a closed polygon.
//!
//! - `rotation_count`: total turning angle in whole turns (`+1` CCW, `-1` CW,
//!   larger magnitudes for multiply wound rings).
//! - `orientation`: the sign of that count as an `Orientation`.
//! - `winding`: both numbers at once, for callers that report them.
//!
//! The raw count `total / 2π` must already be an integer up to float noise;
//! anything else means the input is malformed and is reported, not rounded away.

use nalgebra::Vector2;

use crate::angle::rad_to_deg;
use crate::cfg::{is_close, round_to, WindingCfg};
use crate::error::WindingError;
use crate::turning::total_angle_with;

/// Traversal direction of a ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
}

impl Orientation {
    /// Sign of a rotation count; `None` for zero.
    #[inline]
    pub fn from_rotations(rotations: i32) -> Option<Self> {
        match rotations.signum() {
            1 => Some(Orientation::CounterClockwise),
            -1 => Some(Orientation::Clockwise),
            _ => None,
        }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Clockwise => Orientation::CounterClockwise,
        }
    }
}

/// Turning summary of one ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Winding {
    /// Cumulative signed turning angle (radians).
    pub total_angle: f64,
    /// Whole turns; sign is the direction.
    pub rotations: i32,
}

impl Winding {
    #[inline]
    pub fn orientation(&self) -> Option<Orientation> {
        Orientation::from_rotations(self.rotations)
    }
}

/// Convert a cumulative turning angle (radians) to whole turns.
///
/// Fails with `NotIntegral` unless the raw count, rounded to
/// `cfg.integral_decimals` places, is a whole number close to the raw count.
pub fn rotation_count_from_angle(
    total_angle: f64,
    cfg: &WindingCfg,
) -> Result<i32, WindingError> {
    let raw = rad_to_deg(total_angle) / 360.0;
    let rounded = round_to(raw, cfg.integral_decimals);
    let whole = raw.round();
    // rounded == whole rules out half turns, which survive the decimal check
    if !raw.is_finite()
        || rounded != whole
        || !is_close(rounded, raw, cfg.integral_rtol, cfg.integral_atol)
    {
        tracing::warn!(raw, "turning sum is not a whole number of turns");
        return Err(WindingError::NotIntegral { raw });
    }
    Ok(whole as i32)
}

pub fn rotation_count_with(
    points: &[Vector2<f64>],
    cfg: &WindingCfg,
) -> Result<i32, WindingError> {
    rotation_count_from_angle(total_angle_with(points, cfg)?, cfg)
}

/// Number of full turns the ring makes; positive counterclockwise.
pub fn rotation_count(points: &[Vector2<f64>]) -> Result<i32, WindingError> {
    rotation_count_with(points, &WindingCfg::default())
}

pub fn winding_with(
    points: &[Vector2<f64>],
    cfg: &WindingCfg,
) -> Result<Winding, WindingError> {
    let total_angle = total_angle_with(points, cfg)?;
    let rotations = rotation_count_from_angle(total_angle, cfg)?;
    Ok(Winding {
        total_angle,
        rotations,
    })
}

/// Total angle and rotation count in one pass.
pub fn winding(points: &[Vector2<f64>]) -> Result<Winding, WindingError> {
    winding_with(points, &WindingCfg::default())
}

/// Traversal direction of the ring; `NoNetTurn` if it winds zero times.
pub fn orientation(points: &[Vector2<f64>]) -> Result<Orientation, WindingError> {
    let rotations = rotation_count(points)?;
    Orientation::from_rotations(rotations).ok_or(WindingError::NoNetTurn)
}
