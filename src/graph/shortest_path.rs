//! Unweighted shortest-path distance.

use std::collections::{HashSet, VecDeque};

use crate::types::{GraphError, GraphResult, NodeId};

use super::Graph;

/// Fewest edges from `start` to `end` using BFS.
///
/// Nodes are dequeued in order of their distance from `start`, so the first
/// time `end` comes off the queue its depth is minimal. Returns `Ok(None)`
/// when `end` is not in `start`'s component.
pub fn shortest_distance_bfs<T>(
    graph: &Graph<T>,
    start: NodeId,
    end: NodeId,
) -> GraphResult<Option<usize>> {
    graph.require(start)?;
    graph.require(end)?;

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<(NodeId, usize)> = VecDeque::new();

    visited.insert(start);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        if current == end {
            log::debug!("shortest path {} -> {}: {} edges", start, end, depth);
            return Ok(Some(depth));
        }

        for neighbor in graph.neighbors(current) {
            if visited.insert(neighbor) {
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    log::debug!(
        "shortest path {} -> {}: unreachable after {} nodes",
        start,
        end,
        visited.len()
    );
    Ok(None)
}

/// Fewest edges from `start` to `end` by walking every simple path
/// depth-first and keeping the minimum.
///
/// Each path carries its own visited set, so a node reached late along one
/// path can still be reached early along another. Branches that cannot beat
/// the best distance so far are cut. Worst case is exponential; prefer
/// [`shortest_distance_bfs`].
pub fn shortest_distance_recursive<T>(
    graph: &Graph<T>,
    start: NodeId,
    end: NodeId,
) -> GraphResult<Option<usize>> {
    graph.require(start)?;
    graph.require(end)?;

    let limit = graph.config().max_recursion_depth;
    let mut on_path: HashSet<NodeId> = HashSet::new();
    let mut best: Option<usize> = None;
    explore(graph, start, end, 0, limit, &mut on_path, &mut best)?;

    log::debug!("shortest path (recursive) {} -> {}: {:?}", start, end, best);
    Ok(best)
}

fn explore<T>(
    graph: &Graph<T>,
    current: NodeId,
    end: NodeId,
    distance: usize,
    limit: usize,
    on_path: &mut HashSet<NodeId>,
    best: &mut Option<usize>,
) -> GraphResult<()> {
    if distance + 1 > limit {
        log::warn!(
            "shortest path (recursive) hit the recursion limit of {} at {}",
            limit,
            current
        );
        return Err(GraphError::RecursionLimit { limit });
    }

    if current == end {
        *best = Some(best.map_or(distance, |b| b.min(distance)));
        return Ok(());
    }
    if best.is_some_and(|b| distance + 1 >= b) {
        return Ok(());
    }

    on_path.insert(current);
    for neighbor in graph.neighbors(current) {
        if !on_path.contains(&neighbor) {
            explore(graph, neighbor, end, distance + 1, limit, on_path, best)?;
        }
    }
    on_path.remove(&current);

    Ok(())
}
