//! Error types for the adjacency-graph library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the adjacency-graph library.
///
/// Removing an edge or vertex that does not exist is never an error, and an
/// unreachable target is reported as `Ok(None)` by the distance queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The handle was not issued by this graph, or its node was discarded.
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    /// A recursive traversal went deeper than the configured limit.
    #[error("Recursion depth limit of {limit} exceeded")]
    RecursionLimit { limit: usize },
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
