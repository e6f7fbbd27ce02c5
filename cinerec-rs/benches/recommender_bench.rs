//! Recommender Strategy Benchmark
//!
//! Compares the baseline (triplicate + double sort) against the single-pass
//! strategy on the standard catalog.
//!
//! **Goal:** the optimized strategy should be clearly faster at every limit

use cinerec_rs::catalog::Catalog;
use cinerec_rs::recommender::Mode;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_strategies(c: &mut Criterion) {
    let catalog = Catalog::standard();
    let mut group = c.benchmark_group("recommend_by_genre");

    for limit in [1_i64, 5, 10, 30] {
        for mode in [Mode::Inefficient, Mode::Optimized] {
            let recommender = mode.recommender();
            group.bench_with_input(BenchmarkId::new(mode.as_str(), limit), &limit, |b, &limit| {
                b.iter(|| black_box(recommender.recommend(&catalog, black_box("Action"), limit)));
            });
        }
    }

    group.finish();
}

fn bench_unmatched_genre(c: &mut Criterion) {
    let catalog = Catalog::standard();
    let mut group = c.benchmark_group("unmatched_genre");

    for mode in [Mode::Inefficient, Mode::Optimized] {
        let recommender = mode.recommender();
        group.bench_function(mode.as_str(), |b| {
            b.iter(|| black_box(recommender.recommend(&catalog, black_box("Western"), 10)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_unmatched_genre);
criterion_main!(benches);
