//! Greedy spanning-path construction.
//!
//! [`Spanner::span`] grows a [`Tree`] one node at a time from a single
//! frontier node. At each step it pops the frontier's incident edges in
//! ascending weight order and takes the first one the tree accepts, then
//! moves the frontier to the far endpoint. Because the tree caps every node
//! at two edges and only the frontier is ever extended, the result is a path
//! visiting every node, built by nearest-neighbour choice. It is not the
//! classical minimum spanning tree, which would need a global frontier and
//! unbounded degree.
//!
//! Edges popped while searching are always pushed back, so the graph holds
//! the same edges after a call whether it succeeded or failed.

mod builder;

use std::hash::Hash;

use tracing::{debug, info, instrument, trace, warn};

use crate::{
    edge::{IncidentEdge, Weight},
    error::SpanError,
    graph::Graph,
    tree::Tree,
};

pub use self::builder::{ExecutionStrategy, SpannerBuilder};

/// Builds spanning paths over [`Graph`]s.
///
/// # Examples
/// ```
/// use spanwalk_core::{Graph, SpannerBuilder};
///
/// let mut graph = Graph::new();
/// graph.insert("a", "b", 3);
/// graph.insert("b", "c", 1);
/// graph.insert("a", "c", 7);
///
/// let spanner = SpannerBuilder::new().with_start("a").build();
/// let tree = spanner.span(&mut graph)?;
/// assert_eq!(tree.edge_count(), 2);
/// assert_eq!(tree.total_weight(graph.edges()), Some(4));
/// # Ok::<(), spanwalk_core::SpanError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Spanner<N> {
    start: Option<N>,
    execution_strategy: ExecutionStrategy,
}

impl<N> Default for Spanner<N> {
    fn default() -> Self {
        SpannerBuilder::new().build()
    }
}

impl<N> Spanner<N> {
    /// Returns the pinned start node, if one was configured.
    #[must_use]
    pub const fn start(&self) -> Option<&N> {
        self.start.as_ref()
    }

    /// Returns the strategy used by [`Spanner::span_all`].
    #[must_use]
    pub const fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }
}

impl<N> Spanner<N>
where
    N: Eq + Hash + Clone,
{
    /// Builds a spanning path over `graph`.
    ///
    /// The graph is borrowed mutably because candidate edges are popped from
    /// the per-node heaps; every popped edge is restored before returning.
    ///
    /// # Errors
    /// - [`SpanError::EmptyGraph`] when `graph` has no nodes.
    /// - [`SpanError::NodeNotFound`] when the pinned start node is absent.
    /// - [`SpanError::Exhausted`] when the frontier node has no edge the tree
    ///   accepts.
    /// - [`SpanError::UnknownEdge`] when a heap entry references an edge
    ///   outside the graph's arena.
    #[instrument(
        name = "core.span",
        err,
        skip(self, graph),
        fields(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            pinned_start = self.start.is_some(),
        ),
    )]
    pub fn span(&self, graph: &mut Graph<N>) -> Result<Tree<N>, SpanError> {
        let node_count = graph.node_count();
        if node_count == 0 {
            warn!("graph is empty, returning error");
            return Err(SpanError::EmptyGraph);
        }

        let mut current = self.start_node(graph)?;
        let required = node_count.saturating_sub(1);
        let mut tree = Tree::with_capacity(node_count);
        let mut added = 0;

        while added < required {
            let (next, weight) = extend_frontier(graph, &mut tree, &current)?
                .ok_or(SpanError::Exhausted { added, required })?;
            added += 1;
            debug!(step = added, weight, "frontier advanced");
            current = next;
        }

        match tree.total_weight(graph.edges()) {
            Some(total_weight) => info!(
                edges = tree.edge_count(),
                total_weight, "spanning path completed"
            ),
            None => info!(
                edges = tree.edge_count(),
                "spanning path completed; total weight overflows"
            ),
        }
        Ok(tree)
    }

    /// Spans every graph in `graphs`, one full computation per graph.
    ///
    /// Results are returned in input order. Graphs are never shared between
    /// workers, so no locking happens inside the core.
    #[instrument(
        name = "core.span_all",
        skip_all,
        fields(graphs = graphs.len(), strategy = ?self.execution_strategy),
    )]
    pub fn span_all(&self, graphs: &mut [Graph<N>]) -> Vec<Result<Tree<N>, SpanError>>
    where
        N: Send + Sync,
    {
        if self.execution_strategy.runs_in_parallel() {
            self.span_parallel(graphs)
        } else {
            graphs.iter_mut().map(|graph| self.span(graph)).collect()
        }
    }

    #[cfg(feature = "parallel")]
    fn span_parallel(&self, graphs: &mut [Graph<N>]) -> Vec<Result<Tree<N>, SpanError>>
    where
        N: Send + Sync,
    {
        use rayon::prelude::*;

        graphs.par_iter_mut().map(|graph| self.span(graph)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn span_parallel(&self, graphs: &mut [Graph<N>]) -> Vec<Result<Tree<N>, SpanError>> {
        graphs.iter_mut().map(|graph| self.span(graph)).collect()
    }

    fn start_node(&self, graph: &Graph<N>) -> Result<N, SpanError> {
        match &self.start {
            Some(start) if graph.contains_node(start) => Ok(start.clone()),
            Some(_) => Err(SpanError::NodeNotFound),
            None => graph.nodes().next().cloned().ok_or(SpanError::EmptyGraph),
        }
    }
}

/// Builds a spanning path with the default [`Spanner`] configuration.
///
/// # Errors
/// See [`Spanner::span`].
///
/// # Examples
/// ```
/// use spanwalk_core::{Graph, SpanError, span_path};
///
/// let mut empty: Graph<u32> = Graph::new();
/// assert_eq!(span_path(&mut empty).err(), Some(SpanError::EmptyGraph));
/// ```
pub fn span_path<N>(graph: &mut Graph<N>) -> Result<Tree<N>, SpanError>
where
    N: Eq + Hash + Clone,
{
    Spanner::default().span(graph)
}

/// Attaches the cheapest acceptable edge of `current` to `tree`.
///
/// Returns the far endpoint and the weight of the accepted edge, or `None`
/// when every incident edge was rejected.
fn extend_frontier<N>(
    graph: &mut Graph<N>,
    tree: &mut Tree<N>,
    current: &N,
) -> Result<Option<(N, Weight)>, SpanError>
where
    N: Eq + Hash + Clone,
{
    let (heap, arena) = graph.incident_mut(current)?;
    let mut popped: Vec<IncidentEdge> = Vec::with_capacity(heap.len());

    let outcome = loop {
        let Ok(candidate) = heap.pop() else {
            break Ok(None);
        };
        popped.push(candidate);

        let Some(edge) = arena.get(candidate.id()) else {
            break Err(SpanError::UnknownEdge {
                index: candidate.id().index(),
            });
        };
        let far = edge.other(current);
        match tree.insert(current.clone(), far.clone(), candidate.id()) {
            Ok(()) => break Ok(Some((far.clone(), candidate.weight()))),
            Err(reason) => trace!(
                edge = %candidate.id(),
                weight = candidate.weight(),
                reason = %reason.code(),
                "candidate rejected"
            ),
        }
    };

    heap.extend(popped);
    outcome
}
