//! adjacency-graph — an in-memory undirected graph with traversal algorithms.
//!
//! Nodes carry an arbitrary value and are identified by handle, never by
//! value. Edges are stored as mutual membership in the endpoints' adjacency
//! sets. Depth-first search, breadth-first search and shortest-path distance
//! each come in an iterative and a recursive form.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    bfs_iterative, bfs_recursive, dfs_iterative, dfs_recursive, shortest_distance_bfs,
    shortest_distance_recursive, Graph, GraphBuilder, TraversalOrder, TraversalStrategy,
};
pub use types::{
    GraphConfig, GraphError, GraphResult, Node, NodeId, DEFAULT_MAX_RECURSION_DEPTH,
};
