//! Criterion benchmarks for angle generation and the side-length solver.
//! Focus sizes: n in {3, 6, 12, 24}.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polywalk::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn equiangular(n: usize) -> Vec<f64> {
    vec![180.0 * (n as f64 - 2.0) / n as f64; n]
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("angles");
    for &n in &[3usize, 6, 12, 24] {
        let spec = AngleSpec {
            sides: n,
            min_angle: 30,
            max_angle: 179,
            common_diff: 0,
        };
        group.bench_with_input(BenchmarkId::new("random", n), &spec, |b, spec| {
            b.iter_batched(
                || StdRng::seed_from_u64(n as u64),
                |mut rng| generate_angles(spec, &mut rng),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_gradient(c: &mut Criterion) {
    let mut group = c.benchmark_group("gradient");
    for &n in &[3usize, 6, 12, 24] {
        let angles = equiangular(n);
        let lengths: Vec<f64> = (0..n).map(|i| 60.0 + i as f64).collect();
        group.bench_with_input(BenchmarkId::new("forward_diff", n), &n, |b, _| {
            b.iter(|| closure_gradient(&angles, &lengths, 0.01))
        });
    }
    group.finish();
}

fn bench_optimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize");
    group.sample_size(20);
    for &n in &[3usize, 6, 12] {
        let spec = AngleSpec {
            sides: n,
            min_angle: 30,
            max_angle: 179,
            common_diff: 0,
        };
        let mut rng = StdRng::seed_from_u64(7);
        let Ok(angles) = generate_angles(&spec, &mut rng) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("random_angles", n), &angles, |b, a| {
            b.iter(|| optimize_side_lengths(a, SolveCfg::default()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_gradient, bench_optimize);
criterion_main!(benches);
