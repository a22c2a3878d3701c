//! Benchmarks for the Rayleigh friction kernel.
//!
//! Run with: `cargo bench --bench rayleigh_bench`
//!
//! Add `--features parallel` to include the Rayon kernel.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rayleigh_rs::{EdgeField, EdgeMesh, RayleighConfig, RayleighFriction};

const N_LEVELS: usize = 60;

/// Stepped bathymetry mesh with velocity and tendency fields.
fn setup_problem(n_edges: usize) -> (EdgeMesh, EdgeField<f64>, EdgeField<f64>) {
    let extents: Vec<usize> = (0..n_edges).map(|e| 1 + (e * 13) % N_LEVELS).collect();
    let mesh = EdgeMesh::new(N_LEVELS, extents, n_edges).unwrap();
    let velocity = EdgeField::from_fn(N_LEVELS, n_edges, |level, edge| {
        0.1 * ((level.get() + edge.get()) % 11) as f64 - 0.5
    });
    let tendency = EdgeField::zeros(N_LEVELS, n_edges);
    (mesh, velocity, tendency)
}

fn configurations() -> [(&'static str, RayleighConfig); 4] {
    let off = RayleighConfig::disabled();
    [
        ("disabled", off),
        ("full_column", off.with_friction(1e-5)),
        ("bottom", off.with_bottom_friction(1e-3)),
        ("both", off.with_friction(1e-5).with_bottom_friction(1e-3)),
    ]
}

/// Benchmark the serial kernel for each switch combination.
fn bench_rayleigh_serial(c: &mut Criterion) {
    let mut group = c.benchmark_group("rayleigh_serial");

    for n_edges in [1_000, 10_000, 100_000] {
        let (mesh, velocity, mut tendency) = setup_problem(n_edges);

        for (label, config) in configurations() {
            let friction = RayleighFriction::init(&config).unwrap();
            group.bench_with_input(
                BenchmarkId::new(label, format!("{}_edges", n_edges)),
                &n_edges,
                |b, _| {
                    b.iter(|| {
                        friction
                            .apply_tendency(&mesh, black_box(&velocity), &mut tendency)
                            .unwrap();
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark the Rayon kernel.
#[cfg(feature = "parallel")]
fn bench_rayleigh_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("rayleigh_parallel");

    for n_edges in [10_000, 100_000] {
        let (mesh, velocity, mut tendency) = setup_problem(n_edges);
        let config = RayleighConfig::disabled().with_friction(1e-5).with_bottom_friction(1e-3);
        let friction = RayleighFriction::init(&config).unwrap();

        group.bench_with_input(
            BenchmarkId::new("both", format!("{}_edges", n_edges)),
            &n_edges,
            |b, _| {
                b.iter(|| {
                    friction
                        .apply_tendency_parallel(&mesh, black_box(&velocity), &mut tendency)
                        .unwrap();
                });
            },
        );
    }

    group.finish();
}

#[cfg(feature = "parallel")]
criterion_group!(benches, bench_rayleigh_serial, bench_rayleigh_parallel);
#[cfg(not(feature = "parallel"))]
criterion_group!(benches, bench_rayleigh_serial);
criterion_main!(benches);
