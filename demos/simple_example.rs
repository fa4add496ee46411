use route_sssp::{DirectedGraph, Edge, Graph, ShortestPathEngine};

fn main() -> Result<(), route_sssp::Error> {
    // Create a simple directed graph
    let vertices = ["A", "B", "C", "D", "E"];
    let edges = [
        Edge::new("A", "B", 4.0),
        Edge::new("A", "C", 2.0),
        Edge::new("B", "E", 3.0),
        Edge::new("C", "D", 2.0),
        Edge::new("C", "B", 1.0),
        Edge::new("D", "E", 3.0),
        Edge::new("D", "B", 4.0),
    ];
    let graph = DirectedGraph::build(vertices, edges)?;
    let engine = ShortestPathEngine::new(&graph);

    println!("--- Testing on a simple graph ---");
    println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

    let result = engine.query(&"A", &"E")?;
    println!("\nShortest path from A to E:");
    match result.distance {
        Some(distance) => println!("  Distance: {:.1}, path: {}", distance, result.path.join(" -> ")),
        None => println!("  No path exists"),
    }

    let all = engine.query_all(&"A")?;
    println!("\nAll shortest paths from A:");
    for vertex in graph.vertices() {
        match (all.distance_to(vertex), all.path_to(vertex)) {
            (Some(distance), Some(path)) => {
                println!("  To {}: distance = {:.1}, path = {}", vertex, distance, path.join(" -> "))
            }
            (Some(_), None) => {}
            _ => println!("  To {}: unreachable", vertex),
        }
    }

    Ok(())
}
