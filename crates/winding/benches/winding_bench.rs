//! Criterion benchmarks for turning-angle winding.
//! Focus sizes: n in {3, 12, 100, 1000, 10000}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p winding

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use winding::sample::{draw_star_polygon, regular_polygon, RadialCfg, ReplayToken, VertexCount};
use winding::{rotation_count, total_angle};

fn bench_winding(c: &mut Criterion) {
    let mut group = c.benchmark_group("winding");
    for &n in &[3usize, 12, 100, 1000, 10000] {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(n),
            ..RadialCfg::default()
        };
        let star = draw_star_polygon(cfg, ReplayToken { seed: 43, index: n as u64 });

        group.bench_with_input(BenchmarkId::new("total_angle", n), &star, |b, pts| {
            b.iter(|| total_angle(black_box(pts)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("rotation_count", n), &star, |b, pts| {
            b.iter(|| rotation_count(black_box(pts)).unwrap())
        });
    }

    if let Some(pts) = regular_polygon(10001, 4000, 1.0) {
        group.bench_function("rotation_count_star_10001_4000", |b| {
            b.iter(|| rotation_count(black_box(&pts)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_winding);
criterion_main!(benches);
