//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use adjacency_graph::{Graph, NodeId};

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Ten-vertex fixture:
///
/// ```text
/// T -> R, W
/// W -> Y, V, T
/// V -> X, U, W
/// U -> X, S, V
/// S -> X, U, P
/// P -> S, X, Q
/// Q -> P, X, R
/// R -> Q, Y, T
/// Y -> R, X, W
/// X -> Y, Q, P, U, V
/// ```
///
/// Nodes are created in the order S, P, U, Q, X, V, R, Y, W, T.
pub fn lettered_graph() -> (Graph<&'static str>, HashMap<&'static str, NodeId>) {
    let mut graph = Graph::new();
    let mut ids = HashMap::new();
    for name in ["S", "P", "U", "Q", "X", "V", "R", "Y", "W", "T"] {
        let id = graph.create_node(name);
        ids.insert(name, id);
    }
    graph.add_vertices(ids.values().copied()).unwrap();

    let edges = [
        ("T", "R"),
        ("T", "W"),
        ("W", "Y"),
        ("W", "V"),
        ("V", "X"),
        ("V", "U"),
        ("U", "X"),
        ("U", "S"),
        ("S", "X"),
        ("S", "P"),
        ("P", "X"),
        ("P", "Q"),
        ("Q", "X"),
        ("Q", "R"),
        ("R", "Y"),
        ("Y", "X"),
    ];
    for (a, b) in edges {
        graph.add_edge(ids[a], ids[b]).unwrap();
    }

    (graph, ids)
}

/// A simple path `0 - 1 - ... - (len - 1)` of registered vertices.
pub fn path_graph(graph: &mut Graph<usize>, len: usize) -> Vec<NodeId> {
    let ids: Vec<NodeId> = (0..len).map(|i| graph.create_node(i)).collect();
    graph.add_vertices(ids.iter().copied()).unwrap();
    for pair in ids.windows(2) {
        graph.add_edge(pair[0], pair[1]).unwrap();
    }
    ids
}

/// Sort a traversal result so it can be compared as a set.
pub fn sorted<'a>(values: Vec<&'a &'static str>) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = values.into_iter().copied().collect();
    out.sort_unstable();
    out
}
