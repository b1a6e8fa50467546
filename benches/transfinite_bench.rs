//! Benchmarks for lazily generated surreal numbers.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use conway::prelude::*;

fn omega() -> TransfiniteNumber {
    TransfiniteNumber::new(
        GeneratedSet::unbounded(|n: usize| TransfiniteNumber::from(n as i64)),
        GeneratedSet::empty(),
    )
}

/// Benchmark element generation on a fresh instance versus a warm cache.
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for index in [4usize, 16, 64] {
        group.bench_with_input(BenchmarkId::new("cold", index), &index, |b, &index| {
            b.iter(|| black_box(omega().get_left(index)));
        });

        let warm = omega();
        let _ = warm.get_left(index);
        group.bench_with_input(BenchmarkId::new("cached", index), &index, |b, &index| {
            b.iter(|| black_box(warm.get_left(index)));
        });
    }

    group.finish();
}

/// Benchmark wrapping a finite number and projecting it back.
fn bench_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_trip");

    for x in [5.0, 0.625, -2.25] {
        let finite = Surreal::from_f64(x).unwrap();

        group.bench_with_input(BenchmarkId::new("project", x), &x, |b, _| {
            b.iter(|| black_box(TransfiniteNumber::from(&finite).to_finite()));
        });
    }

    group.finish();
}

/// Benchmark rendering an unbounded side.
fn bench_display(c: &mut Criterion) {
    let mut group = c.benchmark_group("display");

    for width in [5usize, 20] {
        group.bench_with_input(BenchmarkId::new("omega", width), &width, |b, &width| {
            b.iter(|| black_box(omega().print(width, 0)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate, bench_round_trip, bench_display);
criterion_main!(benches);
