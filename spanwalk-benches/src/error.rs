//! Benchmark setup error type.
//!
//! Setup functions propagate failures with `?` and the bench entry point
//! reports them once.

use spanwalk_core::SpanError;
use spanwalk_test_support::graphs::GraphGenError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Random graph generation failed.
    #[error("graph generation failed: {0}")]
    Generation(#[from] GraphGenError),
    /// A warm-up span over the generated graph failed.
    #[error("warm-up span failed: {0}")]
    Span(#[from] SpanError),
}
