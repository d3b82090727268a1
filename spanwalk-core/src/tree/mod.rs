//! Degree-capped, cycle-free accumulator for the spanning path.
//!
//! Every node records at most two neighbours. An insertion is validated for
//! both endpoints before anything is written, so a rejected edge leaves the
//! tree exactly as it was.

use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
    ops::ControlFlow,
};

use crate::{
    edge::{EdgeArena, EdgeId, Weight},
    error::TreeError,
};

/// Maximum number of edges recorded against a single node.
pub const MAX_DEGREE: usize = 2;

/// Output structure of the spanner: a mapping from node to its neighbours
/// and the connecting edge handles.
///
/// # Examples
/// ```
/// use spanwalk_core::{EdgeArena, Tree, TreeError};
///
/// let mut arena = EdgeArena::new();
/// let mut tree = Tree::new();
/// let ab = arena.push("a", "b", 2);
/// let bc = arena.push("b", "c", 4);
/// let ca = arena.push("c", "a", 1);
///
/// tree.insert("a", "b", ab)?;
/// tree.insert("b", "c", bc)?;
/// assert_eq!(tree.insert("c", "a", ca), Err(TreeError::CycleGuard));
/// assert_eq!(tree.total_weight(&arena), Some(6));
/// # Ok::<(), TreeError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Tree<N> {
    adjacency: HashMap<N, HashMap<N, EdgeId>>,
    edge_count: usize,
}

impl<N> Default for Tree<N> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }
}

impl<N> Tree<N>
where
    N: Eq + Hash + Clone,
{
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty tree with room for `nodes` nodes.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Records `edge` between `left` and `right`.
    ///
    /// Checks run in order: self-loop, duplicate pair on either side, both
    /// endpoints already present, then the degree cap on either side. The
    /// edge is written to both sides only when every check passes.
    ///
    /// # Errors
    /// Returns the first [`TreeError`] that applies; the tree is unchanged.
    pub fn insert(&mut self, left: N, right: N, edge: EdgeId) -> Result<(), TreeError> {
        if left == right {
            return Err(TreeError::SelfLoop);
        }

        let left_neighbours = self.adjacency.get(&left);
        let right_neighbours = self.adjacency.get(&right);

        let duplicate = left_neighbours.is_some_and(|n| n.contains_key(&right))
            || right_neighbours.is_some_and(|n| n.contains_key(&left));
        if duplicate {
            return Err(TreeError::DuplicateEdge);
        }

        if left_neighbours.is_some() && right_neighbours.is_some() {
            return Err(TreeError::CycleGuard);
        }

        let saturated = left_neighbours.is_some_and(|n| n.len() >= MAX_DEGREE)
            || right_neighbours.is_some_and(|n| n.len() >= MAX_DEGREE);
        if saturated {
            return Err(TreeError::DegreeCapExceeded);
        }

        self.adjacency
            .entry(left.clone())
            .or_insert_with(|| HashMap::with_capacity(MAX_DEGREE))
            .insert(right.clone(), edge);
        self.adjacency
            .entry(right)
            .or_insert_with(|| HashMap::with_capacity(MAX_DEGREE))
            .insert(left, edge);
        self.edge_count = self.edge_count.saturating_add(1);
        Ok(())
    }

    /// Walks the path from one endpoint to the other, invoking `callback`
    /// once per edge in traversal order.
    ///
    /// The walk starts at a node of degree exactly one; an empty tree yields
    /// nothing. The walk stops early when the callback returns
    /// [`ControlFlow::Break`].
    pub fn iter_edges<F>(&self, mut callback: F)
    where
        F: FnMut(EdgeId) -> ControlFlow<()>,
    {
        let Some(mut current) = self.start_node() else {
            return;
        };

        let mut traversed = HashSet::with_capacity(self.edge_count);
        loop {
            let next = self.adjacency.get(current).and_then(|neighbours| {
                neighbours
                    .iter()
                    .find(|(_, edge)| !traversed.contains(*edge))
            });
            let Some((neighbour, edge)) = next else {
                break;
            };

            traversed.insert(*edge);
            current = neighbour;
            if callback(*edge).is_break() {
                break;
            }
        }
    }

    /// Returns the edges in traversal order.
    #[must_use]
    pub fn walk(&self) -> Vec<EdgeId> {
        let mut edges = Vec::with_capacity(self.edge_count);
        self.iter_edges(|edge| {
            edges.push(edge);
            ControlFlow::Continue(())
        });
        edges
    }

    /// Sums the weights of every recorded edge, resolving handles through
    /// `arena`. Each handle counts once, whether or not it is reachable from
    /// the walk start. Unknown handles contribute nothing.
    ///
    /// Returns `None` when the sum overflows [`Weight`].
    #[must_use]
    pub fn total_weight(&self, arena: &EdgeArena<N>) -> Option<Weight> {
        let recorded: HashSet<EdgeId> = self
            .adjacency
            .values()
            .flat_map(HashMap::values)
            .copied()
            .collect();
        recorded
            .into_iter()
            .filter_map(|edge| arena.weight(edge))
            .try_fold(0, Weight::checked_add)
    }

    /// Returns the nodes of degree one: the two ends of a non-empty path.
    pub fn endpoints(&self) -> impl Iterator<Item = &N> {
        self.adjacency
            .iter()
            .filter(|(_, neighbours)| neighbours.len() == 1)
            .map(|(node, _)| node)
    }

    /// Returns the neighbours of `node` with their connecting edges.
    #[must_use]
    pub fn neighbours(&self, node: &N) -> Option<&HashMap<N, EdgeId>> {
        self.adjacency.get(node)
    }

    /// Returns how many edges are recorded against `node`.
    #[must_use]
    pub fn degree(&self, node: &N) -> usize {
        self.adjacency.get(node).map_or(0, HashMap::len)
    }

    /// Returns `true` when `node` has been touched by an insertion.
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Returns the number of distinct nodes in the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of recorded edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Returns `true` while no edge has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    fn start_node(&self) -> Option<&N> {
        self.endpoints().next()
    }
}

#[cfg(test)]
mod tests;
