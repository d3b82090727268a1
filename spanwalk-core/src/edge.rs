//! Weighted undirected edges and the arena that owns them.
//!
//! An edge is stored once in an [`EdgeArena`] and referred to everywhere else
//! by its [`EdgeId`]. Both endpoint heaps in a [`crate::Graph`] and both
//! endpoint entries in a [`crate::Tree`] hold the same handle, so edge
//! identity is handle equality.

use std::fmt;

use crate::heap::HeapOrder;

/// Integer weight attached to every edge.
pub type Weight = i64;

/// Stable handle addressing an edge inside an [`EdgeArena`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Returns the raw arena index behind the handle.
    #[must_use]
    #[rustfmt::skip]
    pub const fn index(self) -> usize { self.0 }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// An unordered pair of nodes joined with a weight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge<N> {
    nodes: [N; 2],
    weight: Weight,
}

impl<N> Edge<N> {
    /// Returns both endpoints in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn nodes(&self) -> &[N; 2] { &self.nodes }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

impl<N: PartialEq> Edge<N> {
    /// Returns the endpoint opposite `node`.
    ///
    /// When `node` is not an endpoint the first endpoint is returned, which
    /// matches the behaviour of a self-loop lookup.
    #[must_use]
    pub fn other(&self, node: &N) -> &N {
        let [first, second] = &self.nodes;
        if first == node { second } else { first }
    }

    /// Returns `true` when `node` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, node: &N) -> bool {
        self.nodes.iter().any(|endpoint| endpoint == node)
    }
}

impl<N: fmt::Display> fmt::Display for Edge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second] = &self.nodes;
        write!(f, "{first}<-{}->{second}", self.weight)
    }
}

/// Append-only storage for edges addressed by [`EdgeId`].
///
/// # Examples
/// ```
/// use spanwalk_core::EdgeArena;
///
/// let mut arena = EdgeArena::new();
/// let id = arena.push("a", "b", 4);
/// let edge = arena.get(id).expect("edge was just pushed");
/// assert_eq!(edge.weight(), 4);
/// assert_eq!(edge.other(&"a"), &"b");
/// ```
#[derive(Clone, Debug)]
pub struct EdgeArena<N> {
    edges: Vec<Edge<N>>,
}

impl<N> Default for EdgeArena<N> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

impl<N> EdgeArena<N> {
    /// Creates an empty arena.
    #[must_use]
    pub const fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Stores a new edge and returns its handle.
    pub fn push(&mut self, left: N, right: N, weight: Weight) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            nodes: [left, right],
            weight,
        });
        id
    }

    /// Looks up an edge by handle.
    #[must_use]
    pub fn get(&self, id: EdgeId) -> Option<&Edge<N>> {
        self.edges.get(id.0)
    }

    /// Returns the weight of `id`, if the handle is known.
    #[must_use]
    pub fn weight(&self, id: EdgeId) -> Option<Weight> {
        self.get(id).map(Edge::weight)
    }

    /// Returns the number of stored edges.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when no edge has been stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates over every stored edge with its handle, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeId, &Edge<N>)> {
        self.edges
            .iter()
            .enumerate()
            .map(|(index, edge)| (EdgeId(index), edge))
    }
}

/// Heap entry pairing an edge handle with a copy of its weight.
///
/// Carrying the weight lets a per-node heap order its entries without
/// reaching back into the arena.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IncidentEdge {
    id: EdgeId,
    weight: Weight,
}

impl IncidentEdge {
    pub(crate) const fn new(id: EdgeId, weight: Weight) -> Self {
        Self { id, weight }
    }

    /// Returns the handle of the referenced edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> EdgeId { self.id }

    /// Returns the weight of the referenced edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

impl HeapOrder for IncidentEdge {
    fn less_than(&self, other: &Self) -> bool {
        self.weight < other.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_ARENA: &EdgeArena<u8> = &EdgeArena::new();

    #[test]
    fn size_queries_evaluate_in_const_context() {
        const LEN: usize = EMPTY_ARENA.len();
        const IS_EMPTY: bool = EMPTY_ARENA.is_empty();
        assert_eq!((LEN, IS_EMPTY), (0, true));
    }

    #[test]
    fn other_returns_opposite_endpoint() {
        let mut arena = EdgeArena::new();
        let id = arena.push('a', 'b', 3);
        let edge = arena.get(id).expect("edge must exist");
        assert_eq!(edge.other(&'a'), &'b');
        assert_eq!(edge.other(&'b'), &'a');
        assert!(edge.touches(&'a'));
        assert!(!edge.touches(&'c'));
    }

    #[test]
    fn self_loop_other_is_itself() {
        let mut arena = EdgeArena::new();
        let id = arena.push(7_u32, 7_u32, 1);
        assert_eq!(arena.get(id).map(|edge| *edge.other(&7)), Some(7));
    }

    #[test]
    fn handles_are_dense_and_stable() {
        let mut arena = EdgeArena::new();
        let first = arena.push("x", "y", 1);
        let second = arena.push("y", "z", 2);
        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
        assert_eq!(arena.weight(second), Some(2));
        assert_eq!(arena.len(), 2);
        assert_eq!(second.to_string(), "e1");
        assert_eq!(
            arena.get(first).map(ToString::to_string),
            Some("x<-1->y".to_owned())
        );
    }
}
