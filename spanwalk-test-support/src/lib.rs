//! Shared test utilities used across spanwalk crates.

pub mod ci;
pub mod graphs;
pub mod tracing;
