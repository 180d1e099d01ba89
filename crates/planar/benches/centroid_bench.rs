//! Criterion benchmarks for the centroid core.
//! Focus sizes: vertex count n in {4, 16, 64, 256, 1024}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p planar

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planar::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn ring_cfg(n: usize) -> RingCfg {
    RingCfg {
        vertex_count: VertexCount::Fixed(n),
        // Web-Mercator-sized offsets
        center: Vec2::new(1.3e7, 4.5e6),
        radius: 50.0,
        ..RingCfg::default()
    }
}

fn random_collection(m: usize, seed: u64) -> Geometry {
    let mut rng = StdRng::seed_from_u64(seed);
    let members = (0..m)
        .map(|i| {
            let tok = ReplayToken {
                seed,
                index: i as u64,
            };
            match rng.gen_range(0..3) {
                0 => Geometry::Point(Vec2::new(rng.gen(), rng.gen())),
                1 => draw_ring(ring_cfg(16), tok).into(),
                _ => draw_polygon_with_hole(ring_cfg(16), tok)
                    .map(Geometry::from)
                    .unwrap_or_else(|| Geometry::Point(Vec2::zeros())),
            }
        })
        .collect();
    Collection(members).into()
}

fn bench_centroid(c: &mut Criterion) {
    let mut group = c.benchmark_group("centroid");
    for &n in &[4usize, 16, 64, 256, 1024] {
        let tok = ReplayToken { seed: 43, index: 0 };
        let ring: Geometry = draw_ring(ring_cfg(n), tok).into();
        group.bench_with_input(BenchmarkId::new("ring_first_vertex", n), &ring, |b, g| {
            b.iter(|| centroid_area(g))
        });
        group.bench_with_input(BenchmarkId::new("ring_bound_center", n), &ring, |b, g| {
            let cfg = CentroidCfg::with_recenter(Recenter::BoundCenter);
            b.iter(|| centroid_area_with(g, cfg))
        });
        group.bench_with_input(BenchmarkId::new("collection", n), &n, |b, &n| {
            b.iter_batched(
                || random_collection(n, 44),
                |g| {
                    let _res = centroid_area(&g);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_centroid);
criterion_main!(benches);
