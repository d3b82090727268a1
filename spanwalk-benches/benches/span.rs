//! Spanning-path construction benchmarks.
//!
//! Measures the greedy walk over seeded random complete graphs, first one
//! graph at a time and then as a batch through `span_all` under each
//! execution strategy.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use spanwalk_benches::{
    error::BenchSetupError,
    params::{BatchBenchParams, SpanBenchParams},
};
use spanwalk_core::{ExecutionStrategy, SpannerBuilder, span_path};
use spanwalk_test_support::graphs::{CompleteGraphConfig, complete_graph};

/// Seed used for all graph generation in this benchmark.
const SEED: u64 = 42;

/// Graph sizes for the single-graph benchmark.
const NODE_COUNTS: &[usize] = &[10, 100, 1_000];

/// One graph per seed in the `span_all` batch.
const BATCH_SEEDS: std::ops::Range<u64> = 42..50;

/// Nodes per graph in the `span_all` batch.
const BATCH_NODES: usize = 100;

fn span_single_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("span_path");
    group.sample_size(20);

    for &node_count in NODE_COUNTS {
        let mut graph = complete_graph(&CompleteGraphConfig {
            seed: SEED,
            ..CompleteGraphConfig::with_nodes(node_count)
        })?;
        span_path(&mut graph)?;

        let params = SpanBenchParams { node_count };
        group.bench_function(BenchmarkId::from_parameter(&params), |b| {
            b.iter(|| black_box(span_path(&mut graph)));
        });
    }

    group.finish();
    Ok(())
}

fn span_batch_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("span_all");
    group.sample_size(20);

    let mut graphs = BATCH_SEEDS
        .map(|seed| {
            complete_graph(&CompleteGraphConfig {
                seed,
                ..CompleteGraphConfig::with_nodes(BATCH_NODES)
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    for strategy in [ExecutionStrategy::Sequential, ExecutionStrategy::Parallel] {
        let spanner = SpannerBuilder::new()
            .with_execution_strategy(strategy)
            .build();
        let params = BatchBenchParams {
            graphs: graphs.len(),
            node_count: BATCH_NODES,
            strategy,
        };
        group.bench_function(BenchmarkId::from_parameter(&params), |b| {
            b.iter(|| black_box(spanner.span_all(&mut graphs)));
        });
    }

    group.finish();
    Ok(())
}

fn span_single(c: &mut Criterion) {
    if let Err(err) = span_single_impl(c) {
        panic!("span_path benchmark setup failed: {err}");
    }
}

fn span_batch(c: &mut Criterion) {
    if let Err(err) = span_batch_impl(c) {
        panic!("span_all benchmark setup failed: {err}");
    }
}

criterion_group!(benches, span_single, span_batch);
criterion_main!(benches);
