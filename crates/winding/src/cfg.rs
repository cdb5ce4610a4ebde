//! Tolerance defaults for turning-angle computations.
//!
//! Policy
//! - Defaults are fixed constants so call sites stay free of magic numbers.
//! - `WindingCfg` bundles them for the `*_with` entry points; most callers
//!   use `WindingCfg::default()` through the plain functions.

/// Relative tolerance when comparing the first and last point of a ring.
pub const CLOSE_RTOL: f64 = 1e-8;
/// Absolute tolerance when comparing the first and last point of a ring.
pub const CLOSE_ATOL: f64 = 1e-8;
/// Absolute tolerance for "raw rotation count is an integer".
pub const INTEGRAL_ATOL: f64 = 1e-8;
/// Relative tolerance for "raw rotation count is an integer".
pub const INTEGRAL_RTOL: f64 = 1e-5;
/// Decimal places the raw rotation count is rounded to before the check.
pub const INTEGRAL_DECIMALS: i32 = 3;

/// Winding configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindingCfg {
    pub close_rtol: f64,
    pub close_atol: f64,
    pub integral_atol: f64,
    pub integral_rtol: f64,
    pub integral_decimals: i32,
}

impl Default for WindingCfg {
    fn default() -> Self {
        Self {
            close_rtol: CLOSE_RTOL,
            close_atol: CLOSE_ATOL,
            integral_atol: INTEGRAL_ATOL,
            integral_rtol: INTEGRAL_RTOL,
            integral_decimals: INTEGRAL_DECIMALS,
        }
    }
}

/// `|a - b| <= atol + rtol * |b|` (asymmetric in `b`, like numpy's `isclose`).
#[inline]
pub fn is_close(a: f64, b: f64, rtol: f64, atol: f64) -> bool {
    (a - b).abs() <= atol + rtol * b.abs()
}

/// Round `x` to `decimals` places after the point.
#[inline]
pub(crate) fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round() / scale
}
