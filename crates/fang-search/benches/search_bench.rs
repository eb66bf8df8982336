use criterion::{criterion_group, criterion_main, Criterion};

use fang_core::Knowledge;
use fang_search::adjacency::{AdjacencySearch, Fas};
use fang_search::orientation::{DecisionThresholds, PairStatistics, PairwiseOrienter};
use fang_search::{FangSearch, ScoreIndependenceTest, SemBicScore};

#[path = "../tests/common/mod.rs"]
mod common;

fn bench_full_search(c: &mut Criterion) {
    fang_core::telemetry::init_tracing("warn");
    let data = common::random_linear(42, 1000, 10);

    c.bench_function("fang_search_10_vars_1k_samples", |b| {
        b.iter(|| {
            FangSearch::new(data.clone()).search().unwrap();
        });
    });
}

fn bench_adjacency_search(c: &mut Criterion) {
    let data = common::random_linear(42, 1000, 10).standardize().unwrap();

    c.bench_function("fas_10_vars_1k_samples", |b| {
        b.iter(|| {
            let test = ScoreIndependenceTest::new(SemBicScore::from_dataset(&data));
            Fas::new(None).search(&test, &Knowledge::new()).unwrap();
        });
    });
}

fn bench_pairwise_orientation(c: &mut Criterion) {
    let data = common::random_linear(7, 2000, 20).standardize().unwrap();
    let knowledge = Knowledge::new();
    let test = ScoreIndependenceTest::new(SemBicScore::from_dataset(&data));
    let skeleton = Fas::new(Some(1)).search(&test, &knowledge).unwrap();

    c.bench_function("pairwise_20_vars_sequential", |b| {
        let orienter = PairwiseOrienter::new(&data, &knowledge, DecisionThresholds::default());
        b.iter(|| orienter.orient(&skeleton.graph));
    });
    c.bench_function("pairwise_20_vars_parallel", |b| {
        let orienter = PairwiseOrienter::new(&data, &knowledge, DecisionThresholds::default())
            .with_parallel(true);
        b.iter(|| orienter.orient(&skeleton.graph));
    });
}

fn bench_pair_statistics(c: &mut Criterion) {
    let data = common::feedback_pair(3, 10_000, 0.6, -0.4).standardize().unwrap();

    c.bench_function("pair_statistics_10k_samples", |b| {
        b.iter(|| PairStatistics::compute("X", "Y", data.column(0), data.column(1), true));
    });
}

criterion_group!(
    benches,
    bench_full_search,
    bench_adjacency_search,
    bench_pairwise_orientation,
    bench_pair_statistics
);
criterion_main!(benches);
