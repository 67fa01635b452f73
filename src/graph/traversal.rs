//! Graph traversal algorithms (DFS, BFS).
//!
//! Each function returns node handles in the order they were visited. The
//! start node does not have to be a registered vertex; whatever component
//! it sits in gets walked.

use std::collections::{HashSet, VecDeque};

use crate::types::{GraphError, GraphResult, NodeId};

use super::Graph;

/// Which order to visit nodes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Last discovered, first visited.
    DepthFirst,
    /// Level by level, nearest first.
    BreadthFirst,
}

/// How the traversal loop is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalStrategy {
    /// Explicit stack or queue. No depth limit.
    Iterative,
    /// Call stack, bounded by `GraphConfig::max_recursion_depth`.
    Recursive,
}

/// DFS with an explicit stack.
///
/// A node may sit on the stack more than once; it is visited the first time
/// it is popped. Among siblings, the one pushed last is visited first.
pub fn dfs_iterative<T>(graph: &Graph<T>, start: NodeId) -> GraphResult<Vec<NodeId>> {
    graph.require(start)?;

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut visited_order: Vec<NodeId> = Vec::new();
    let mut stack: Vec<NodeId> = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        visited_order.push(current);

        for neighbor in graph.neighbors(current) {
            if !visited.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
    }

    log::debug!(
        "dfs_iterative from {} visited {} nodes",
        start,
        visited_order.len()
    );
    Ok(visited_order)
}

/// DFS by recursion, pre-order: visit a node, then descend into each of its
/// still-unvisited neighbors in adjacency order.
pub fn dfs_recursive<T>(graph: &Graph<T>, start: NodeId) -> GraphResult<Vec<NodeId>> {
    graph.require(start)?;

    let limit = graph.config().max_recursion_depth;
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut visited_order: Vec<NodeId> = Vec::new();
    dfs_visit(graph, start, 1, limit, &mut visited, &mut visited_order)?;

    log::debug!(
        "dfs_recursive from {} visited {} nodes",
        start,
        visited_order.len()
    );
    Ok(visited_order)
}

fn dfs_visit<T>(
    graph: &Graph<T>,
    current: NodeId,
    depth: usize,
    limit: usize,
    visited: &mut HashSet<NodeId>,
    visited_order: &mut Vec<NodeId>,
) -> GraphResult<()> {
    if depth > limit {
        log::warn!("dfs_recursive hit the recursion limit of {} at {}", limit, current);
        return Err(GraphError::RecursionLimit { limit });
    }

    visited.insert(current);
    visited_order.push(current);

    for neighbor in graph.neighbors(current) {
        if !visited.contains(&neighbor) {
            dfs_visit(graph, neighbor, depth + 1, limit, visited, visited_order)?;
        }
    }
    Ok(())
}

/// BFS with a FIFO queue. Nodes are marked when enqueued, so each is queued
/// once and the visit order is the discovery order.
pub fn bfs_iterative<T>(graph: &Graph<T>, start: NodeId) -> GraphResult<Vec<NodeId>> {
    graph.require(start)?;

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut visited_order: Vec<NodeId> = Vec::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        visited_order.push(current);

        for neighbor in graph.neighbors(current) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    log::debug!(
        "bfs_iterative from {} visited {} nodes",
        start,
        visited_order.len()
    );
    Ok(visited_order)
}

/// BFS where each dequeued node is handled by its own call, with the queue
/// threaded through as a parameter.
///
/// Call depth grows with the number of reachable nodes, not with distance,
/// so the recursion limit caps the component size this can walk.
pub fn bfs_recursive<T>(graph: &Graph<T>, start: NodeId) -> GraphResult<Vec<NodeId>> {
    graph.require(start)?;

    let limit = graph.config().max_recursion_depth;
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut visited_order: Vec<NodeId> = Vec::new();

    visited.insert(start);
    bfs_step(
        graph,
        VecDeque::from([start]),
        1,
        limit,
        &mut visited,
        &mut visited_order,
    )?;

    log::debug!(
        "bfs_recursive from {} visited {} nodes",
        start,
        visited_order.len()
    );
    Ok(visited_order)
}

fn bfs_step<T>(
    graph: &Graph<T>,
    mut queue: VecDeque<NodeId>,
    depth: usize,
    limit: usize,
    visited: &mut HashSet<NodeId>,
    visited_order: &mut Vec<NodeId>,
) -> GraphResult<()> {
    let Some(current) = queue.pop_front() else {
        return Ok(());
    };
    if depth > limit {
        log::warn!("bfs_recursive hit the recursion limit of {} at {}", limit, current);
        return Err(GraphError::RecursionLimit { limit });
    }

    visited_order.push(current);
    for neighbor in graph.neighbors(current) {
        if visited.insert(neighbor) {
            queue.push_back(neighbor);
        }
    }

    bfs_step(graph, queue, depth + 1, limit, visited, visited_order)
}
