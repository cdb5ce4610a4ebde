//! Winding orientation of closed polygons from exterior turning angles.
//!
//! A ring of vertices is walked once; at each vertex the signed angle between
//! the incoming and outgoing edge is added up. The sum is a whole number of
//! turns: `+1` for a simple counterclockwise ring, `-1` for a clockwise one,
//! larger magnitudes for rings that loop several times.
//!
//! Layout
//! - `angle`: `normalize`, `angle_between` (signed, colinear tie-break +1).
//! - `turning`: `total_angle` over a ring (drops a duplicate closing point).
//! - `rotation`: `rotation_count`, `orientation`, `winding`.
//! - `cfg`: named tolerances and `WindingCfg`.
//! - `sample`: deterministic rings for tests and benchmarks.
//!
//! Every function is pure; the crate holds no state.

pub mod angle;
pub mod cfg;
pub mod error;
pub mod rotation;
pub mod sample;
pub mod turning;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use angle::{angle_between, normalize, rad_to_deg};
pub use cfg::WindingCfg;
pub use error::WindingError;
pub use nalgebra::Vector2 as Vec2;
pub use rotation::{
    orientation, rotation_count, rotation_count_from_angle, rotation_count_with, winding,
    winding_with, Orientation, Winding,
};
pub use turning::{total_angle, total_angle_with, trim_closing_point, turning_angles};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::sample::{
        draw_star_polygon, regular_polygon, RadialCfg, ReplayToken, VertexCount,
    };
    pub use crate::{
        angle_between, orientation, rotation_count, total_angle, winding, Orientation, WindingCfg,
        WindingError,
    };
    pub use nalgebra::Vector2 as Vec2;
}
