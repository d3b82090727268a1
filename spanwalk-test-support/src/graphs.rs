//! Seeded random graph generators for tests and benchmarks.
//!
//! Graphs are complete: every pair of distinct nodes is connected, which
//! guarantees the greedy walk can always reach an unvisited node. Weights
//! are drawn uniformly from a half-open range with a [`SmallRng`] so runs
//! are reproducible per seed.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use spanwalk_core::{Graph, Weight};
use thiserror::Error;

/// Errors that may occur during graph generation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphGenError {
    /// The requested node count was zero.
    #[error("node count must be greater than zero")]
    ZeroNodes,
    /// The weight range holds no values.
    #[error("weight range [{min}, {max}) is empty")]
    EmptyWeightRange {
        /// Inclusive lower bound.
        min: Weight,
        /// Exclusive upper bound.
        max: Weight,
    },
}

/// How node pairs are turned into edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PairMode {
    /// One edge per unordered pair.
    #[default]
    Unordered,
    /// One edge per ordered pair, so every pair is joined twice with
    /// independently drawn weights.
    Ordered,
}

/// Configuration for complete-graph generation.
#[derive(Clone, Debug)]
pub struct CompleteGraphConfig {
    /// Number of nodes to generate.
    pub node_count: usize,
    /// Inclusive lower bound on edge weights.
    pub min_weight: Weight,
    /// Exclusive upper bound on edge weights.
    pub max_weight: Weight,
    /// How pairs map onto edges.
    pub pairs: PairMode,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

impl CompleteGraphConfig {
    /// Returns a configuration for `node_count` nodes with weights in
    /// `[10, 1000)` and seed 42.
    #[must_use]
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            node_count,
            min_weight: 10,
            max_weight: 1_000,
            pairs: PairMode::Unordered,
            seed: 42,
        }
    }
}

/// Returns the label used for the node at `index`.
#[must_use]
pub fn node_name(index: usize) -> String {
    format!("n{index}")
}

/// Generates a complete graph over [`node_name`] labels.
///
/// # Errors
/// Returns [`GraphGenError`] when the node count is zero or the weight range
/// is empty.
///
/// # Examples
///
/// ```
/// use spanwalk_test_support::graphs::{CompleteGraphConfig, complete_graph};
///
/// let graph = complete_graph(&CompleteGraphConfig::with_nodes(4))?;
/// assert_eq!(graph.node_count(), 4);
/// assert_eq!(graph.edge_count(), 6);
/// # Ok::<(), spanwalk_test_support::graphs::GraphGenError>(())
/// ```
pub fn complete_graph(config: &CompleteGraphConfig) -> Result<Graph<String>, GraphGenError> {
    if config.node_count == 0 {
        return Err(GraphGenError::ZeroNodes);
    }
    if config.min_weight >= config.max_weight {
        return Err(GraphGenError::EmptyWeightRange {
            min: config.min_weight,
            max: config.max_weight,
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let names: Vec<String> = (0..config.node_count).map(node_name).collect();
    let mut graph = Graph::with_capacity(config.node_count);

    for (index, left) in names.iter().enumerate() {
        for (other, right) in names.iter().enumerate() {
            let keep = match config.pairs {
                PairMode::Unordered => other > index,
                PairMode::Ordered => other != index,
            };
            if keep {
                let weight = rng.gen_range(config.min_weight..config.max_weight);
                graph.insert(left.clone(), right.clone(), weight);
            }
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::unordered(PairMode::Unordered, 45)]
    #[case::ordered(PairMode::Ordered, 90)]
    fn generates_every_pair(#[case] pairs: PairMode, #[case] expected_edges: usize) {
        let config = CompleteGraphConfig {
            pairs,
            ..CompleteGraphConfig::with_nodes(10)
        };
        let graph = complete_graph(&config).expect("config is valid");
        assert_eq!(graph.node_count(), 10);
        assert_eq!(graph.edge_count(), expected_edges);
    }

    #[test]
    fn weights_stay_in_range() {
        let config = CompleteGraphConfig::with_nodes(20);
        let graph = complete_graph(&config).expect("config is valid");
        assert!(
            graph
                .edges()
                .iter()
                .all(|(_, edge)| (10..1_000).contains(&edge.weight()))
        );
    }

    #[test]
    fn same_seed_yields_same_weights() {
        let config = CompleteGraphConfig::with_nodes(12);
        let first = complete_graph(&config).expect("config is valid");
        let second = complete_graph(&config).expect("config is valid");
        let weights = |graph: &Graph<String>| -> Vec<Weight> {
            graph.edges().iter().map(|(_, edge)| edge.weight()).collect()
        };
        assert_eq!(weights(&first), weights(&second));
    }

    #[rstest]
    #[case::zero_nodes(
        CompleteGraphConfig::with_nodes(0),
        GraphGenError::ZeroNodes
    )]
    #[case::empty_range(
        CompleteGraphConfig { min_weight: 5, max_weight: 5, ..CompleteGraphConfig::with_nodes(3) },
        GraphGenError::EmptyWeightRange { min: 5, max: 5 }
    )]
    fn rejects_invalid_configs(
        #[case] config: CompleteGraphConfig,
        #[case] expected: GraphGenError,
    ) {
        assert_eq!(complete_graph(&config).err(), Some(expected));
    }
}
