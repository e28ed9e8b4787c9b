//! Criterion benchmarks for the Graham scan.
//! Sizes: n in {10, 100, 1_000, 10_000}; disk clouds (few hull vertices) and
//! lattice clouds (many duplicates and collinear triples).
//! Results live under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hullscan::cloud::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use hullscan::compute_hull;

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("graham");
    for &n in &[10usize, 100, 1_000, 10_000] {
        let disk = CloudCfg {
            count: n,
            shape: CloudShape::Disk { radius: 1.0 },
            ..CloudCfg::default()
        };
        group.bench_with_input(BenchmarkId::new("disk", n), &disk, |b, &cfg| {
            b.iter_batched(
                || draw_cloud(cfg, ReplayToken::new(43)),
                |pts| {
                    let _hull = compute_hull(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        let lattice = CloudCfg {
            shape: CloudShape::Lattice { extent: 32 },
            ..disk
        };
        group.bench_with_input(BenchmarkId::new("lattice", n), &lattice, |b, &cfg| {
            b.iter_batched(
                || draw_cloud(cfg, ReplayToken::new(44)),
                |pts| {
                    let _hull = compute_hull(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
