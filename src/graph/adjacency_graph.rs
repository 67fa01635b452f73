//! Core graph structure — a node arena plus the vertex set.

use std::collections::{BTreeSet, HashMap};

use crate::types::node::next_graph_tag;
use crate::types::{GraphConfig, GraphError, GraphResult, Node, NodeId};

use super::shortest_path::{shortest_distance_bfs, shortest_distance_recursive};
use super::traversal::{
    bfs_iterative, bfs_recursive, dfs_iterative, dfs_recursive, TraversalOrder,
    TraversalStrategy,
};

/// An undirected graph whose edges live in the adjacency sets of their
/// endpoints.
///
/// Every node created through a graph stays in its arena until discarded.
/// Registering a node as a vertex is a separate step, and edges may connect
/// nodes that were never registered.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// Every live node, indexed by handle.
    arena: HashMap<NodeId, Node<T>>,
    /// Handles registered through `add_vertex`.
    nodes: BTreeSet<NodeId>,
    /// Stamped into every handle this graph issues.
    tag: u64,
    /// Next handle to issue.
    next_id: u64,
    config: GraphConfig,
}

impl<T> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a new empty graph with the given settings.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            arena: HashMap::new(),
            nodes: BTreeSet::new(),
            tag: next_graph_tag(),
            next_id: 0,
            config,
        }
    }

    /// Create from pre-built parts (used by the builder).
    ///
    /// `nodes` already carry handles stamped with `tag`; `vertices` and
    /// `edges` naming anything else fail with `NodeNotFound`.
    pub(crate) fn from_parts(
        tag: u64,
        nodes: Vec<Node<T>>,
        vertices: Vec<NodeId>,
        edges: Vec<(NodeId, NodeId)>,
        config: GraphConfig,
    ) -> GraphResult<Self> {
        let next_id = nodes.iter().map(|n| n.id.index + 1).max().unwrap_or(0);

        let mut graph = Self {
            arena: nodes.into_iter().map(|n| (n.id, n)).collect(),
            nodes: BTreeSet::new(),
            tag,
            next_id,
            config,
        };

        graph.add_vertices(vertices)?;
        for (a, b) in edges {
            graph.add_edge(a, b)?;
        }

        Ok(graph)
    }

    /// The settings this graph was created with.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Create a node with no neighbors. It is not a vertex until
    /// [`add_vertex`](Self::add_vertex) is called.
    pub fn create_node(&mut self, value: T) -> NodeId {
        let id = NodeId::new(self.tag, self.next_id);
        self.next_id += 1;
        self.arena.insert(id, Node::new(id, value));
        log::trace!("created node {}", id);
        id
    }

    /// Create a node that starts out adjacent to `adjacent`.
    ///
    /// Each listed neighbor gains the new node in its own adjacency set. On
    /// error no node is created.
    pub fn create_node_with_adjacent<I>(&mut self, value: T, adjacent: I) -> GraphResult<NodeId>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let adjacent: Vec<NodeId> = adjacent.into_iter().collect();
        for &neighbor in &adjacent {
            self.require(neighbor)?;
        }

        let id = self.create_node(value);
        for neighbor in adjacent {
            self.link(id, neighbor);
        }
        Ok(id)
    }

    /// Register a node as a vertex. Returns `false` if it already was one.
    pub fn add_vertex(&mut self, vertex: NodeId) -> GraphResult<bool> {
        self.require(vertex)?;
        let inserted = self.nodes.insert(vertex);
        log::trace!("add_vertex {} (new: {})", vertex, inserted);
        Ok(inserted)
    }

    /// Register several nodes as vertices, in order.
    ///
    /// All handles are checked first, so an unknown handle leaves the vertex
    /// set untouched.
    pub fn add_vertices<I>(&mut self, vertices: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let vertices: Vec<NodeId> = vertices.into_iter().collect();
        for &vertex in &vertices {
            self.require(vertex)?;
        }
        for vertex in vertices {
            self.add_vertex(vertex)?;
        }
        Ok(())
    }

    /// Add an undirected edge between `v1` and `v2`.
    ///
    /// Neither endpoint needs to be a registered vertex. `v1 == v2` makes a
    /// self-edge.
    pub fn add_edge(&mut self, v1: NodeId, v2: NodeId) -> GraphResult<()> {
        self.require(v1)?;
        self.require(v2)?;
        self.link(v1, v2);
        log::trace!("add_edge {} -- {}", v1, v2);
        Ok(())
    }

    /// Remove the edge between `v1` and `v2`.
    ///
    /// Returns `false` (and changes nothing) when there was no such edge,
    /// including when either handle is unknown.
    pub fn remove_edge(&mut self, v1: NodeId, v2: NodeId) -> bool {
        let removed = self.unlink(v1, v2);
        if removed {
            log::trace!("remove_edge {} -- {}", v1, v2);
        }
        removed
    }

    /// Drop every edge touching `vertex`, then unregister it.
    ///
    /// The node itself stays in the arena and can be registered again.
    /// Returns whether `vertex` was a registered vertex; unknown handles are
    /// a no-op.
    pub fn remove_vertex(&mut self, vertex: NodeId) -> bool {
        let neighbors: Vec<NodeId> = match self.arena.get(&vertex) {
            Some(node) => node.adjacent.iter().copied().collect(),
            None => return false,
        };
        for neighbor in neighbors {
            self.remove_edge(vertex, neighbor);
        }
        let removed = self.nodes.remove(&vertex);
        log::trace!("remove_vertex {} (was vertex: {})", vertex, removed);
        removed
    }

    /// Remove `node` from the graph entirely and hand back its value.
    ///
    /// Its handle becomes invalid afterwards.
    pub fn discard_node(&mut self, node: NodeId) -> GraphResult<T> {
        self.require(node)?;
        self.remove_vertex(node);
        let removed = self
            .arena
            .remove(&node)
            .ok_or(GraphError::NodeNotFound(node))?;
        Ok(removed.value)
    }

    /// Get a node by handle.
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.arena.get(&id)
    }

    /// Get a node's value.
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.arena.get(&id).map(|n| &n.value)
    }

    /// Get a node's value (mutable). Adjacency is not reachable this way.
    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.arena.get_mut(&id).map(|n| &mut n.value)
    }

    /// Neighbors of `id`, in creation order. Empty for unknown handles.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.arena
            .get(&id)
            .into_iter()
            .flat_map(|n| n.adjacent.iter().copied())
    }

    /// Whether `id` is a registered vertex.
    pub fn contains_vertex(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    /// Whether `id` names a live node, vertex or not.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.arena.contains_key(&id)
    }

    /// Whether `v1` and `v2` share an edge.
    pub fn has_edge(&self, v1: NodeId, v2: NodeId) -> bool {
        self.arena
            .get(&v1)
            .is_some_and(|n| n.adjacent.contains(&v2))
    }

    /// Registered vertices, in creation order.
    pub fn vertices(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// Number of registered vertices.
    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of live nodes, including ones never registered as vertices.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Number of undirected edges. A self-edge counts once.
    pub fn edge_count(&self) -> usize {
        let mut self_edges = 0;
        let mut endpoints = 0;
        for node in self.arena.values() {
            for &other in &node.adjacent {
                if other == node.id {
                    self_edges += 1;
                } else {
                    endpoints += 1;
                }
            }
        }
        self_edges + endpoints / 2
    }

    /// Depth-first values reachable from `start`, using an explicit stack.
    pub fn depth_first_search(&self, start: NodeId) -> GraphResult<Vec<&T>> {
        let order = dfs_iterative(self, start)?;
        Ok(self.values_of(&order))
    }

    /// Depth-first values reachable from `start`, in recursive pre-order.
    pub fn depth_first_search_recursive(&self, start: NodeId) -> GraphResult<Vec<&T>> {
        let order = dfs_recursive(self, start)?;
        Ok(self.values_of(&order))
    }

    /// Level-order values reachable from `start`, using a FIFO queue.
    pub fn breadth_first_search(&self, start: NodeId) -> GraphResult<Vec<&T>> {
        let order = bfs_iterative(self, start)?;
        Ok(self.values_of(&order))
    }

    /// Level-order values reachable from `start`, one call per dequeued node.
    pub fn breadth_first_search_recursive(&self, start: NodeId) -> GraphResult<Vec<&T>> {
        let order = bfs_recursive(self, start)?;
        Ok(self.values_of(&order))
    }

    /// Values reachable from `start` in the requested order and variant.
    pub fn traverse(
        &self,
        start: NodeId,
        order: TraversalOrder,
        strategy: TraversalStrategy,
    ) -> GraphResult<Vec<&T>> {
        let visited = match (order, strategy) {
            (TraversalOrder::DepthFirst, TraversalStrategy::Iterative) => {
                dfs_iterative(self, start)?
            }
            (TraversalOrder::DepthFirst, TraversalStrategy::Recursive) => {
                dfs_recursive(self, start)?
            }
            (TraversalOrder::BreadthFirst, TraversalStrategy::Iterative) => {
                bfs_iterative(self, start)?
            }
            (TraversalOrder::BreadthFirst, TraversalStrategy::Recursive) => {
                bfs_recursive(self, start)?
            }
        };
        Ok(self.values_of(&visited))
    }

    /// Fewest edges on any path from `start` to `end`, or `None` when `end`
    /// cannot be reached.
    pub fn distance_of_shortest_path(
        &self,
        start: NodeId,
        end: NodeId,
    ) -> GraphResult<Option<usize>> {
        shortest_distance_bfs(self, start, end)
    }

    /// Same answer as [`distance_of_shortest_path`](Self::distance_of_shortest_path),
    /// found by exhaustive depth-first search over simple paths.
    pub fn distance_of_shortest_path_recursive(
        &self,
        start: NodeId,
        end: NodeId,
    ) -> GraphResult<Option<usize>> {
        shortest_distance_recursive(self, start, end)
    }

    /// Get a node or fail with `NodeNotFound`. The arena is keyed by the
    /// full handle, so handles stamped by another graph never match.
    pub(crate) fn require(&self, id: NodeId) -> GraphResult<&Node<T>> {
        self.arena.get(&id).ok_or(GraphError::NodeNotFound(id))
    }

    fn values_of(&self, ids: &[NodeId]) -> Vec<&T> {
        ids.iter().filter_map(|id| self.value(*id)).collect()
    }

    /// Write both directions of an edge. Callers have checked both handles.
    fn link(&mut self, v1: NodeId, v2: NodeId) {
        if let Some(node) = self.arena.get_mut(&v1) {
            node.adjacent.insert(v2);
        }
        if let Some(node) = self.arena.get_mut(&v2) {
            node.adjacent.insert(v1);
        }
    }

    fn unlink(&mut self, v1: NodeId, v2: NodeId) -> bool {
        let mut removed = false;
        if let Some(node) = self.arena.get_mut(&v1) {
            removed |= node.adjacent.remove(&v2);
        }
        if let Some(node) = self.arena.get_mut(&v2) {
            removed |= node.adjacent.remove(&v1);
        }
        removed
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
