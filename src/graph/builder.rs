//! Fluent API for building Graph instances.

use crate::types::node::next_graph_tag;
use crate::types::{GraphConfig, GraphResult, Node, NodeId};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Handles are issued up front so links can be declared before the graph
/// exists; `build` checks them all.
pub struct GraphBuilder<T> {
    config: GraphConfig,
    nodes: Vec<Node<T>>,
    vertices: Vec<NodeId>,
    edges: Vec<(NodeId, NodeId)>,
    tag: u64,
    next_id: u64,
}

impl<T> GraphBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a new builder whose graph will carry `config`.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            nodes: Vec::new(),
            vertices: Vec::new(),
            edges: Vec::new(),
            tag: next_graph_tag(),
            next_id: 0,
        }
    }

    fn push_node(&mut self, value: T) -> NodeId {
        let id = NodeId::new(self.tag, self.next_id);
        self.next_id += 1;
        self.nodes.push(Node::new(id, value));
        id
    }

    /// Add a node and register it as a vertex.
    pub fn add_node(&mut self, value: T) -> NodeId {
        let id = self.push_node(value);
        self.vertices.push(id);
        id
    }

    /// Add a node without registering it as a vertex.
    pub fn add_detached(&mut self, value: T) -> NodeId {
        self.push_node(value)
    }

    /// Add an undirected edge between two nodes.
    pub fn link(&mut self, a: NodeId, b: NodeId) -> &mut Self {
        self.edges.push((a, b));
        self
    }

    /// Build the final Graph.
    ///
    /// Fails with `NodeNotFound` if a link names a handle this builder did
    /// not issue.
    pub fn build(self) -> GraphResult<Graph<T>> {
        Graph::from_parts(self.tag, self.nodes, self.vertices, self.edges, self.config)
    }
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
