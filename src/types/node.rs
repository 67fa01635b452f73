//! Node handles and the node struct.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GRAPH_TAG: AtomicU64 = AtomicU64::new(0);

/// A fresh tag for a graph or builder. Handles carry their issuer's tag, so
/// one graph never resolves another graph's handles.
pub(crate) fn next_graph_tag() -> u64 {
    NEXT_GRAPH_TAG.fetch_add(1, Ordering::Relaxed)
}

/// Identity of a node.
///
/// Two nodes holding equal values are still distinct nodes; membership in
/// vertex and adjacency sets is decided by this handle alone. Handles are
/// issued by a [`Graph`](crate::Graph) in increasing order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    /// Tag of the graph (or builder) that issued this handle.
    pub(crate) graph: u64,
    pub(crate) index: u64,
}

impl NodeId {
    pub(crate) fn new(graph: u64, index: u64) -> Self {
        Self { graph, index }
    }

    /// Position of the node in its graph's issue order.
    pub fn as_u64(self) -> u64 {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// A value plus the set of nodes it shares an edge with.
///
/// There are no mutators here: edges are written through the graph, which
/// updates both endpoints at once.
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub(crate) id: NodeId,
    pub(crate) value: T,
    /// Ordered by handle, so iteration follows creation order.
    pub(crate) adjacent: BTreeSet<NodeId>,
}

impl<T> Node<T> {
    pub(crate) fn new(id: NodeId, value: T) -> Self {
        Self {
            id,
            value,
            adjacent: BTreeSet::new(),
        }
    }

    /// This node's handle.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The caller's payload.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Handles of every node sharing an edge with this one.
    pub fn adjacent(&self) -> &BTreeSet<NodeId> {
        &self.adjacent
    }

    /// Number of adjacent nodes. A self-edge counts once.
    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    /// Whether `other` shares an edge with this node.
    pub fn is_adjacent_to(&self, other: NodeId) -> bool {
        self.adjacent.contains(&other)
    }
}
