//! Criterion benchmarks for adjacency-graph.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use adjacency_graph::{Graph, GraphBuilder, NodeId, DEFAULT_MAX_RECURSION_DEPTH};

/// Build a large random graph using the builder for fast construction.
fn make_large_graph(node_count: usize, edges_per_node: usize) -> (Graph<usize>, Vec<NodeId>) {
    let mut rng = rand::thread_rng();
    let mut builder = GraphBuilder::new();

    let ids: Vec<NodeId> = (0..node_count).map(|i| builder.add_node(i)).collect();
    for i in 0..node_count {
        for _ in 0..edges_per_node {
            let target = rng.gen_range(0..node_count);
            builder.link(ids[i], ids[target]);
        }
    }

    (builder.build().unwrap(), ids)
}

fn bench_add_edge(c: &mut Criterion) {
    let (mut graph, ids) = make_large_graph(10_000, 3);

    c.bench_function("add_edge_to_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let src = ids[rng.gen_range(0..ids.len())];
            let tgt = ids[rng.gen_range(0..ids.len())];
            let _ = graph.add_edge(src, tgt);
        })
    });
}

fn bench_remove_vertex(c: &mut Criterion) {
    c.bench_function("remove_vertex_from_10k", |b| {
        b.iter_batched(
            || make_large_graph(10_000, 3),
            |(mut graph, ids)| graph.remove_vertex(ids[ids.len() / 2]),
            criterion::BatchSize::LargeInput,
        )
    });
}

fn bench_dfs_iterative(c: &mut Criterion) {
    let (graph, ids) = make_large_graph(100_000, 3);

    c.bench_function("dfs_iterative_100k", |b| {
        b.iter(|| graph.depth_first_search(ids[0]).unwrap().len())
    });
}

fn bench_bfs_iterative(c: &mut Criterion) {
    let (graph, ids) = make_large_graph(100_000, 3);

    c.bench_function("bfs_iterative_100k", |b| {
        b.iter(|| graph.breadth_first_search(ids[0]).unwrap().len())
    });
}

fn bench_recursive_variants(c: &mut Criterion) {
    let (graph, ids) = make_large_graph(DEFAULT_MAX_RECURSION_DEPTH, 3);

    c.bench_function("dfs_recursive_default_limit", |b| {
        b.iter(|| graph.depth_first_search_recursive(ids[0]).unwrap().len())
    });
    c.bench_function("bfs_recursive_default_limit", |b| {
        b.iter(|| graph.breadth_first_search_recursive(ids[0]).unwrap().len())
    });
}

fn bench_shortest_path(c: &mut Criterion) {
    let (graph, ids) = make_large_graph(100_000, 3);

    c.bench_function("shortest_path_100k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let start = ids[rng.gen_range(0..ids.len())];
            let end = ids[rng.gen_range(0..ids.len())];
            graph.distance_of_shortest_path(start, end).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_add_edge,
    bench_remove_vertex,
    bench_dfs_iterative,
    bench_bfs_iterative,
    bench_recursive_variants,
    bench_shortest_path,
);
criterion_main!(benches);
