//! In-memory graph operations — the core data structure.

pub mod adjacency_graph;
pub mod builder;
pub mod shortest_path;
pub mod traversal;

pub use adjacency_graph::Graph;
pub use builder::GraphBuilder;
pub use shortest_path::{shortest_distance_bfs, shortest_distance_recursive};
pub use traversal::{
    bfs_iterative, bfs_recursive, dfs_iterative, dfs_recursive, TraversalOrder,
    TraversalStrategy,
};
