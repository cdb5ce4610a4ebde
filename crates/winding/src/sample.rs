//! Deterministic polygon rings for tests and benchmarks.
//!
//! Purpose
//! - `regular_polygon`: regular (star) polygons `{n/turns}` with a known
//!   rotation count, including multiply wound ones.
//! - `draw_star_polygon`: random star-shaped rings (simple, counterclockwise)
//!   from jittered polar angles and radii, reproducible via a replay token.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, sort by angle. Angular jitter below half the spacing keeps
//!   the angles strictly increasing; keeping every gap below π keeps the origin
//!   in the kernel, so the ring is star-shaped around it.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49]
    /// (tighter for triangles).
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Regular star polygon `{n/turns}` on a circle of `radius`, counterclockwise.
///
/// Vertex `i` sits at angle `2π·turns·i/n`, so every vertex turns by
/// `2π·turns/n` and the ring winds `turns` times. Requires `n >= 3`,
/// `turns >= 1`, `2·turns < n` (each turn stays below π) and a positive radius.
pub fn regular_polygon(n: usize, turns: usize, radius: f64) -> Option<Vec<Vector2<f64>>> {
    if n < 3 || turns == 0 || 2 * turns >= n || !(radius.is_finite() && radius > 0.0) {
        return None;
    }
    let step = TAU * turns as f64 / n as f64;
    Some(
        (0..n)
            .map(|i| {
                let th = step * i as f64;
                Vector2::new(th.cos() * radius, th.sin() * radius)
            })
            .collect(),
    )
}

/// Draw a random star-shaped ring (counterclockwise, no closing point).
pub fn draw_star_polygon(cfg: RadialCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    // gap <= Δ(1 + 2·aj) < π
    let aj = cfg
        .angle_jitter_frac
        .clamp(0.0, 0.49)
        .min((n as f64 - 2.0) / 4.0 - 0.01);
    let rj = cfg.radial_jitter.clamp(0.0, 0.99);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * TAU
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}
