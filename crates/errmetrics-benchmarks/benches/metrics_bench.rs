//! Benchmarks for the basic metrics and the Theil statistics.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use errmetrics_basic::compute_metrics;
use errmetrics_benchmarks::{generate_series, perturb};
use errmetrics_theil::{decompose, theil_stats};

fn bench_basic_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("basic_metrics");

    for n in [100, 1000, 10_000] {
        let actual = generate_series(n);
        let predicted = perturb(&actual, 5.0, 42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(actual, predicted),
            |b, (a, p)| b.iter(|| compute_metrics(black_box(a), black_box(p))),
        );
    }

    group.finish();
}

fn bench_theil_decomposition(c: &mut Criterion) {
    let mut group = c.benchmark_group("theil_decomposition");

    for n in [100, 1000, 10_000] {
        let actual = generate_series(n);
        let predicted = perturb(&actual, 5.0, 7);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(actual, predicted),
            |b, (a, p)| b.iter(|| decompose(black_box(a), black_box(p))),
        );
    }

    group.finish();
}

fn bench_theil_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("theil_all");

    for n in [100, 1000, 10_000] {
        let history = generate_series(n + n / 2);
        let actual = history[n / 2..].to_vec();
        let predicted = perturb(&actual, 5.0, 3);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(actual, predicted, history),
            |b, (a, p, h)| {
                b.iter(|| theil_stats("all", black_box(a), black_box(p), Some(h.as_slice())))
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_basic_metrics,
    bench_theil_decomposition,
    bench_theil_all
);
criterion_main!(benches);
