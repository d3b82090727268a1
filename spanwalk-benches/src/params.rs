//! Benchmark parameter types.

use std::fmt;

use spanwalk_core::ExecutionStrategy;

/// Parameters for a single-graph span benchmark.
#[derive(Clone, Debug)]
pub struct SpanBenchParams {
    /// Number of nodes in the complete graph.
    pub node_count: usize,
}

impl fmt::Display for SpanBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.node_count)
    }
}

/// Parameters for a batched `span_all` benchmark.
#[derive(Clone, Debug)]
pub struct BatchBenchParams {
    /// Number of graphs in the batch.
    pub graphs: usize,
    /// Nodes per graph.
    pub node_count: usize,
    /// Scheduling mode under test.
    pub strategy: ExecutionStrategy,
}

impl fmt::Display for BatchBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "graphs={},n={},{:?}",
            self.graphs, self.node_count, self.strategy
        )
    }
}
