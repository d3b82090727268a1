//! Benchmark support crate for spanwalk.
//!
//! Holds the setup error and parameter types shared by the Criterion
//! benchmarks. Graphs come from `spanwalk_test_support::graphs`.

pub mod error;
pub mod params;
