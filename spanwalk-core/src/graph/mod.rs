//! Undirected weighted graph stored as one min-heap of incident edges per
//! node.
//!
//! Keeping each node's edges in a [`MinHeap`] turns "cheapest incident edge"
//! into an `O(log degree)` pop instead of an `O(degree)` scan. Edges live in
//! an [`EdgeArena`]; both endpoint heaps hold the same [`EdgeId`].

use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
    ops::ControlFlow,
};

use crate::{
    edge::{Edge, EdgeArena, EdgeId, IncidentEdge, Weight},
    error::GraphError,
    heap::MinHeap,
};

/// Weighted undirected graph with per-node incident-edge heaps.
///
/// Duplicate edges and self-loops are accepted as-is; callers that do not
/// want a multigraph must avoid inserting them.
///
/// # Examples
/// ```
/// use spanwalk_core::Graph;
///
/// let mut graph = Graph::new();
/// graph.insert("a", "b", 5);
/// graph.insert("a", "c", 2);
///
/// let cheapest = graph.get(&"a")?.fetch()?;
/// assert_eq!(cheapest.weight(), 2);
/// assert_eq!(graph.node_count(), 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph<N> {
    edges: EdgeArena<N>,
    incident: HashMap<N, MinHeap<IncidentEdge>>,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            edges: EdgeArena::new(),
            incident: HashMap::new(),
        }
    }
}

impl<N> Graph<N>
where
    N: Eq + Hash + Clone,
{
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `nodes` distinct nodes.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            edges: EdgeArena::new(),
            incident: HashMap::with_capacity(nodes),
        }
    }

    /// Adds an edge between `left` and `right`, returning its handle.
    ///
    /// The single stored edge is pushed into both endpoints' heaps, creating
    /// either heap on first use.
    pub fn insert(&mut self, left: N, right: N, weight: Weight) -> EdgeId {
        let id = self.edges.push(left.clone(), right.clone(), weight);
        let entry = IncidentEdge::new(id, weight);
        self.incident.entry(left).or_default().insert(entry);
        self.incident.entry(right).or_default().insert(entry);
        id
    }

    /// Returns the incident-edge heap for `node`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] when `node` was never inserted.
    pub fn get(&self, node: &N) -> Result<&MinHeap<IncidentEdge>, GraphError> {
        self.incident.get(node).ok_or(GraphError::NodeNotFound)
    }

    /// Splits the graph into `node`'s mutable heap and the shared edge arena.
    pub(crate) fn incident_mut(
        &mut self,
        node: &N,
    ) -> Result<(&mut MinHeap<IncidentEdge>, &EdgeArena<N>), GraphError> {
        let heap = self
            .incident
            .get_mut(node)
            .ok_or(GraphError::NodeNotFound)?;
        Ok((heap, &self.edges))
    }

    /// Returns `true` when `node` has at least one incident edge.
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.incident.contains_key(node)
    }

    /// Returns the number of heap entries held for `node`.
    ///
    /// A self-loop counts twice.
    #[must_use]
    pub fn degree(&self, node: &N) -> Option<usize> {
        self.incident.get(node).map(MinHeap::len)
    }

    /// Returns the number of distinct nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.incident.len()
    }

    /// Returns the number of inserted edges.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Looks up an edge by handle.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge<N>> {
        self.edges.get(id)
    }

    /// Returns the arena holding every inserted edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges(&self) -> &EdgeArena<N> { &self.edges }

    /// Iterates over the distinct nodes in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.incident.keys()
    }

    /// Invokes `callback` once per distinct node, in unspecified order.
    ///
    /// Iteration stops early when the callback returns
    /// [`ControlFlow::Break`].
    pub fn iter_nodes<F>(&self, mut callback: F)
    where
        F: FnMut(&N) -> ControlFlow<()>,
    {
        for node in self.incident.keys() {
            if callback(node).is_break() {
                break;
            }
        }
    }

    /// Invokes `callback` once per distinct edge, in unspecified order.
    ///
    /// Edges are deduplicated by handle and each heap is visited in ascending
    /// weight order. Each heap is drained and then refilled with exactly the
    /// entries it held, so the graph's content is
    /// unchanged afterwards even when the callback breaks early. The internal
    /// layout of a heap may differ between calls.
    pub fn iter_edges<F>(&mut self, mut callback: F)
    where
        F: FnMut(EdgeId, &Edge<N>) -> ControlFlow<()>,
    {
        let mut seen = HashSet::with_capacity(self.edges.len());
        let mut stopped = false;
        for heap in self.incident.values_mut() {
            let entries = heap.drain_sorted();
            for entry in &entries {
                if stopped || !seen.insert(entry.id()) {
                    continue;
                }
                if let Some(edge) = self.edges.get(entry.id()) {
                    stopped = callback(entry.id(), edge).is_break();
                }
            }
            // Ascending order already satisfies the heap property.
            *heap = MinHeap::from_vec(entries);
            if stopped {
                break;
            }
        }
    }
}

impl<N> Extend<(N, N, Weight)> for Graph<N>
where
    N: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = (N, N, Weight)>>(&mut self, iter: I) {
        for (left, right, weight) in iter {
            self.insert(left, right, weight);
        }
    }
}

impl<N> FromIterator<(N, N, Weight)> for Graph<N>
where
    N: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (N, N, Weight)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}
