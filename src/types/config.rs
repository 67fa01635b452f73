//! Tunables for a graph instance.

use super::DEFAULT_MAX_RECURSION_DEPTH;

/// Settings carried by a [`Graph`](crate::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Deepest call chain the recursive traversals may build before they
    /// give up with [`GraphError::RecursionLimit`](crate::GraphError).
    pub max_recursion_depth: usize,
}

impl GraphConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
        }
    }

    /// Set the recursion depth limit.
    pub fn with_max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = depth;
        self
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::new()
    }
}
