//! Builder utilities for configuring [`Spanner`] instances.
//!
//! Exposes the start-node and execution strategy selection surface.

use super::Spanner;

/// Indicates how [`Spanner::span_all`] schedules independent graphs.
///
/// `Auto` resolves deterministically: it maps to `Parallel` when the
/// `parallel` feature is enabled and to `Sequential` otherwise.
///
/// # Examples
/// ```
/// use spanwalk_core::ExecutionStrategy;
///
/// let strategy = ExecutionStrategy::Auto;
/// assert!(matches!(strategy, ExecutionStrategy::Auto));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Allow the library to select a scheduling mode automatically.
    #[default]
    Auto,
    /// Process graphs one after another on the calling thread.
    Sequential,
    /// Process graphs on the Rayon thread pool, one computation per worker.
    Parallel,
}

impl ExecutionStrategy {
    /// Returns `true` when graphs will be spanned on the thread pool.
    #[must_use]
    pub const fn runs_in_parallel(self) -> bool {
        match self {
            Self::Sequential => false,
            Self::Auto | Self::Parallel => cfg!(feature = "parallel"),
        }
    }
}

/// Configures and constructs [`Spanner`] instances.
///
/// # Examples
/// ```
/// use spanwalk_core::{ExecutionStrategy, SpannerBuilder};
///
/// let spanner = SpannerBuilder::new()
///     .with_start("a")
///     .with_execution_strategy(ExecutionStrategy::Sequential)
///     .build();
/// assert_eq!(spanner.start(), Some(&"a"));
/// assert_eq!(spanner.execution_strategy(), ExecutionStrategy::Sequential);
/// ```
#[derive(Debug, Clone)]
pub struct SpannerBuilder<N> {
    start: Option<N>,
    execution_strategy: ExecutionStrategy,
}

impl<N> Default for SpannerBuilder<N> {
    fn default() -> Self {
        Self {
            start: None,
            execution_strategy: ExecutionStrategy::Auto,
        }
    }
}

impl<N> SpannerBuilder<N> {
    /// Creates a builder with an arbitrary start node and automatic
    /// scheduling.
    ///
    /// # Examples
    /// ```
    /// use spanwalk_core::{ExecutionStrategy, SpannerBuilder};
    ///
    /// let builder = SpannerBuilder::<u32>::new();
    /// assert_eq!(builder.start(), None);
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Auto);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the node the walk starts from.
    #[must_use]
    pub fn with_start(mut self, start: N) -> Self {
        self.start = Some(start);
        self
    }

    /// Returns the configured start node, if any.
    #[must_use]
    pub const fn start(&self) -> Option<&N> {
        self.start.as_ref()
    }

    /// Sets the scheduling mode used by [`Spanner::span_all`].
    #[must_use]
    pub const fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the configured execution strategy.
    #[must_use]
    pub const fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Constructs the configured [`Spanner`].
    #[must_use]
    pub fn build(self) -> Spanner<N> {
        Spanner {
            start: self.start,
            execution_strategy: self.execution_strategy,
        }
    }
}
