//! Build a small graph, walk it every way, and measure a few distances.

use adjacency_graph::*;

fn main() -> GraphResult<()> {
    // Create the graph
    let mut builder = GraphBuilder::new();

    let s = builder.add_node("S");
    let p = builder.add_node("P");
    let u = builder.add_node("U");
    let x = builder.add_node("X");
    let v = builder.add_node("V");
    let w = builder.add_node("W");
    let lone = builder.add_node("lone");

    // Link them
    builder
        .link(s, p)
        .link(s, u)
        .link(s, x)
        .link(p, x)
        .link(u, v)
        .link(x, v)
        .link(v, w);

    let mut graph = builder.build()?;

    println!(
        "Graph created with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    println!("DFS (stack):     {:?}", graph.depth_first_search(s)?);
    println!("DFS (recursive): {:?}", graph.depth_first_search_recursive(s)?);
    println!("BFS (queue):     {:?}", graph.breadth_first_search(s)?);
    println!("BFS (recursive): {:?}", graph.breadth_first_search_recursive(s)?);

    for (label, end) in [("W", w), ("S", s), ("lone", lone)] {
        match graph.distance_of_shortest_path(s, end)? {
            Some(d) => println!("S -> {}: {} edges", label, d),
            None => println!("S -> {}: unreachable", label),
        }
    }

    // Cut V out and look again
    graph.remove_vertex(v);
    match graph.distance_of_shortest_path(s, w)? {
        Some(d) => println!("After removing V, S -> W: {} edges", d),
        None => println!("After removing V, S -> W: unreachable"),
    }

    Ok(())
}
