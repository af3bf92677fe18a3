//! Criterion benchmarks for the colony.
//!
//! Uses cities on a circle so instances of any size are cheap to build
//! and have a known optimum.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_antcolony::aco::{AcoConfig, AcoRunner, AntPathBuilder, PheromoneMatrix, TransitionRule};
use u_antcolony::matrix::DistanceMatrix;
use u_numflow::random::create_rng;

fn ring(n: usize) -> DistanceMatrix {
    let pts: Vec<(f64, f64)> = (0..n)
        .map(|k| {
            let a = 2.0 * std::f64::consts::PI * k as f64 / n as f64;
            (1000.0 * a.cos(), 1000.0 * a.sin())
        })
        .collect();
    let rows: Vec<Vec<f64>> = pts
        .iter()
        .map(|&(xi, yi)| {
            pts.iter()
                .map(|&(xj, yj)| ((xi - xj).powi(2) + (yi - yj).powi(2)).sqrt().round())
                .collect::<Vec<f64>>()
        })
        .collect();
    DistanceMatrix::new(rows).expect("ring matrix is valid")
}

// ===========================================================================
// Full colony runs
// ===========================================================================

fn bench_colony(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco_colony");
    group.sample_size(10);

    for &n in &[15, 30, 60] {
        let distances = ring(n);
        let config = AcoConfig::default().with_iterations(20).with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(distances, config),
            |b, (d, c)| {
                b.iter(|| {
                    let result = AcoRunner::run(black_box(d), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

#[cfg(feature = "parallel")]
fn bench_colony_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco_colony_parallel");
    group.sample_size(10);

    for &n in &[30, 60, 120] {
        let distances = ring(n);
        let config = AcoConfig::default()
            .with_iterations(20)
            .with_parallel(true)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(distances, config),
            |b, (d, c)| {
                b.iter(|| {
                    let result = AcoRunner::run(black_box(d), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

#[cfg(not(feature = "parallel"))]
fn bench_colony_parallel(_c: &mut Criterion) {}

// ===========================================================================
// Single tour construction
// ===========================================================================

fn bench_tour_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco_single_tour");

    for &n in &[50, 200] {
        let distances = ring(n);
        let pheromone = PheromoneMatrix::new(n, 1.0);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            let builder = AntPathBuilder::new(&distances, &pheromone, TransitionRule::new(1.0, 5.0));
            let mut rng = create_rng(42);
            b.iter(|| {
                let start = rng.random_range(0..n);
                black_box(builder.build_from(start, &mut rng))
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_colony,
    bench_colony_parallel,
    bench_tour_construction
);
criterion_main!(benches);
