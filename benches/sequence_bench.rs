//! Benchmark for sequence combinators: eager against lazy pipelines.
//!
//! Eager stages materialize an `Entries` mapping between steps; lazy stages
//! pull one pair at a time and can stop early.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fnpipe::pipe;
use fnpipe::sequence::{Entries, LazySequence};
use fnpipe::transform::{eager, fold, lazy};
use std::hint::black_box;

// =============================================================================
// Full Traversal
// =============================================================================

fn benchmark_map_filter_reduce(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_filter_reduce");

    for size in [100_u64, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("eager", size), &size, |bencher, &size| {
            bencher.iter(|| {
                black_box(pipe!(
                    (0..size).collect::<Vec<_>>(),
                    eager::map(|x: u64| x * 3),
                    eager::filter(|x: &u64| x % 2 == 0),
                    fold::reduce(0_u64, |total: u64, x: u64| total + x),
                ))
            });
        });

        group.bench_with_input(BenchmarkId::new("lazy", size), &size, |bencher, &size| {
            bencher.iter(|| {
                black_box(pipe!(
                    LazySequence::from_values(0..size),
                    lazy::map(|x: u64| x * 3),
                    lazy::filter(|x: &u64| x % 2 == 0),
                    fold::reduce(0_u64, |total: u64, x: u64| total + x),
                ))
            });
        });

        group.bench_with_input(BenchmarkId::new("iterator_baseline", size), &size, |bencher, &size| {
            bencher.iter(|| {
                black_box(
                    (0..size)
                        .map(|x| x * 3)
                        .filter(|x| x % 2 == 0)
                        .sum::<u64>(),
                )
            });
        });
    }

    group.finish();
}

// =============================================================================
// Early Exit
// =============================================================================

fn benchmark_first_match(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("first_match");
    let size = 10_000_u64;

    group.bench_function("eager_map_then_first", |bencher| {
        bencher.iter(|| {
            black_box(pipe!(
                (0..size).collect::<Vec<_>>(),
                eager::map(|x: u64| x * x),
                fold::first(|x: &u64| *x > 400),
            ))
        });
    });

    group.bench_function("lazy_map_then_first", |bencher| {
        bencher.iter(|| {
            black_box(pipe!(
                LazySequence::from_values(0..size),
                lazy::map(|x: u64| x * x),
                fold::first(|x: &u64| *x > 400),
            ))
        });
    });

    group.bench_function("iterate_take", |bencher| {
        bencher.iter(|| {
            black_box(pipe!(
                lazy::iterate(1_u64, |x| x.wrapping_mul(3)),
                lazy::take(64),
                eager::collect(),
            ))
        });
    });

    group.finish();
}

// =============================================================================
// Entries
// =============================================================================

fn benchmark_entries_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("entries_insert");

    for size in [100_usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("from_values", size), &size, |bencher, &size| {
            bencher.iter(|| black_box(Entries::from_values(0..size)));
        });

        group.bench_with_input(BenchmarkId::new("index_by", size), &size, |bencher, &size| {
            let by_bucket = eager::index_by(|x: &usize| x % 64);
            bencher.iter(|| black_box(by_bucket((0..size).collect::<Vec<_>>())));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_map_filter_reduce,
    benchmark_first_match,
    benchmark_entries_insert
);

criterion_main!(benches);
