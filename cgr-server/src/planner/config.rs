//! Search configuration for the route planner.

/// Configuration parameters for route search.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Maximum number of review rounds (contacts finalized, plus the root).
    /// `None` lets the search run until the frontier is exhausted or pruned.
    pub max_iterations: Option<usize>,

    /// Reject queries whose source or destination never appears in the plan.
    /// When false such queries are answered as unreachable.
    pub strict_endpoints: bool,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_iterations: Option<usize>, strict_endpoints: bool) -> Self {
        Self {
            max_iterations,
            strict_endpoints,
        }
    }

    /// Returns a copy of this configuration with an iteration cap.
    pub fn with_max_iterations(mut self, limit: usize) -> Self {
        self.max_iterations = Some(limit);
        self
    }

    /// Returns a copy of this configuration that rejects unknown endpoints.
    pub fn with_strict_endpoints(mut self) -> Self {
        self.strict_endpoints = true;
        self
    }

    /// True if `iterations` review rounds exceed the configured cap.
    pub fn exceeded(&self, iterations: usize) -> bool {
        self.max_iterations.is_some_and(|limit| iterations > limit)
    }
}
