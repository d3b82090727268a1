//! Spanwalk core library.
//!
//! Builds a path-shaped spanning structure over a weighted undirected graph
//! with a Prim-style greedy walk. The pieces, leaves first:
//!
//! - [`MinHeap`]: array-backed binary min-heap ordered through [`HeapOrder`].
//! - [`Graph`]: one heap of incident edges per node over a shared
//!   [`EdgeArena`].
//! - [`Tree`]: degree-capped, cycle-guarded accumulator for the result.
//! - [`Spanner`]: the walk itself, configured through [`SpannerBuilder`].
#![cfg_attr(docsrs, feature(doc_cfg))]

mod edge;
mod error;
mod graph;
mod heap;
mod span;
mod tree;

pub use crate::{
    edge::{Edge, EdgeArena, EdgeId, IncidentEdge, Weight},
    error::{
        GraphError, GraphErrorCode, HeapError, HeapErrorCode, SpanError, SpanErrorCode,
        TreeError, TreeErrorCode,
    },
    graph::Graph,
    heap::{HeapOrder, MinHeap},
    span::{ExecutionStrategy, Spanner, SpannerBuilder, span_path},
    tree::{MAX_DEGREE, Tree},
};
