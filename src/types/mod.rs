//! All data types for the adjacency-graph library.

pub mod config;
pub mod error;
pub mod node;

pub use config::GraphConfig;
pub use error::{GraphError, GraphResult};
pub use node::{Node, NodeId};

/// Default cap on call depth for the recursive traversal variants.
///
/// Sized so every recursive variant fits a 2 MiB thread stack (the default
/// for spawned and test threads) in an unoptimized build.
pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 1024;
