//! Error types for the spanwalk core library.
//!
//! Every fallible operation returns one of the enums below. Each enum exposes
//! a stable machine-readable code so callers can log or match on failures
//! without depending on the human-readable message.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::MinHeap`] operations.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum HeapError {
    /// `pop` or `fetch` was called on a heap with no elements.
    #[error("min-heap is empty")]
    Empty,
}

define_error_codes! {
    /// Stable codes describing [`HeapError`] variants.
    enum HeapErrorCode for HeapError {
        /// The heap held no elements.
        Empty => Empty => "HEAP_EMPTY",
    }
}

/// An error produced by [`crate::Graph`] lookups.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The requested node has never been inserted into the graph.
    #[error("node not found in graph")]
    NodeNotFound,
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The requested node has never been inserted.
        NodeNotFound => NodeNotFound => "GRAPH_NODE_NOT_FOUND",
    }
}

/// Reasons a [`crate::Tree`] insertion is rejected.
///
/// A rejected insertion never mutates the tree.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum TreeError {
    /// Both endpoints are the same node.
    #[error("an edge may not connect a node to itself")]
    SelfLoop,
    /// One endpoint already records a connection to the other.
    #[error("the same node pair can not be inserted into the tree twice")]
    DuplicateEdge,
    /// Both endpoints are already present, so the edge would close a loop.
    #[error("both nodes already exist in the tree")]
    CycleGuard,
    /// One endpoint already has two recorded edges.
    #[error("each node can only have two edges in the tree")]
    DegreeCapExceeded,
}

define_error_codes! {
    /// Stable codes describing [`TreeError`] variants.
    enum TreeErrorCode for TreeError {
        /// Both endpoints are the same node.
        SelfLoop => SelfLoop => "TREE_SELF_LOOP",
        /// The node pair is already recorded.
        DuplicateEdge => DuplicateEdge => "TREE_DUPLICATE_EDGE",
        /// Both endpoints are already present.
        CycleGuard => CycleGuard => "TREE_CYCLE_GUARD",
        /// An endpoint already has degree two.
        DegreeCapExceeded => DegreeCapExceeded => "TREE_DEGREE_CAP_EXCEEDED",
    }
}

/// Error type produced when building a spanning path with [`crate::Spanner`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum SpanError {
    /// The graph holds no nodes.
    #[error("cannot span an empty graph")]
    EmptyGraph,
    /// The frontier node has no entry in the graph.
    #[error("node not found in graph")]
    NodeNotFound,
    /// The frontier node has no remaining edge that can legally extend the
    /// path.
    #[error("unable to find a node to continue building the tree ({added} of {required} nodes added)")]
    Exhausted {
        /// Nodes attached to the path before the walk stalled.
        added: usize,
        /// Nodes that had to be attached for the path to span the graph.
        required: usize,
    },
    /// A heap entry referenced an edge handle missing from the arena.
    #[error("edge handle {index} is not present in the edge arena")]
    UnknownEdge {
        /// Raw index of the dangling handle.
        index: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`SpanError`] variants.
    enum SpanErrorCode for SpanError {
        /// The graph holds no nodes.
        EmptyGraph => EmptyGraph => "SPAN_EMPTY_GRAPH",
        /// The frontier node has no entry in the graph.
        NodeNotFound => NodeNotFound => "SPAN_NODE_NOT_FOUND",
        /// The walk could not be extended.
        Exhausted => Exhausted { .. } => "SPAN_EXHAUSTED",
        /// A dangling edge handle was encountered.
        UnknownEdge => UnknownEdge { .. } => "SPAN_UNKNOWN_EDGE",
    }
}

impl From<GraphError> for SpanError {
    fn from(error: GraphError) -> Self {
        match error {
            GraphError::NodeNotFound => Self::NodeNotFound,
        }
    }
}
