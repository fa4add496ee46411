use std::time::{Duration, Instant};

use route_sssp::graph::generators::{generate_random_graph, generate_street_grid, intersection_id};
use route_sssp::graph::DirectedGraph;
use route_sssp::{Graph, ShortestPathEngine};

// Time one single-source and one point-to-point query from `start` to `end`
fn benchmark_graph(
    label: &str,
    graph: &DirectedGraph<String, f64>,
    start: &String,
    end: &String,
) -> Result<(Duration, Duration), route_sssp::Error> {
    let engine = ShortestPathEngine::new(graph);
    println!(
        "Running on {} with {} vertices and {} edges...",
        label,
        graph.vertex_count(),
        graph.edge_count()
    );

    let begin = Instant::now();
    let all = engine.query_all(start)?;
    let all_time = begin.elapsed();
    println!(
        "  - query_all: {} reachable vertices in {:?} ({} stale entries skipped)",
        all.paths.len() + 1,
        all_time,
        all.stats.stale_skipped
    );

    let begin = Instant::now();
    let single = engine.query(start, end)?;
    let single_time = begin.elapsed();
    match single.distance {
        Some(distance) => println!(
            "  - query {} -> {}: {:.2} over {} hops in {:?} (settled {})",
            start,
            end,
            distance,
            single.path.len().saturating_sub(1),
            single_time,
            single.stats.settled
        ),
        None => println!("  - query {} -> {}: unreachable ({:?})", start, end, single_time),
    }

    Ok((all_time, single_time))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let grid_sizes = vec![10, 50, 100, 300];
    let random_sizes = vec![1_000, 10_000, 100_000];
    let edge_factor = 3.0;

    println!("=====================================================");
    println!("Benchmark: Dijkstra query vs query_all");
    println!("=====================================================");

    let mut results = Vec::new();

    for &side in &grid_sizes {
        let graph = generate_street_grid(side, side, 7)?;
        let start = intersection_id(0, 0);
        let end = intersection_id(side - 1, side - 1);
        let (all_time, single_time) = benchmark_graph(&format!("{0}x{0} street grid", side), &graph, &start, &end)?;
        results.push((graph.vertex_count(), all_time, single_time));
    }

    for &size in &random_sizes {
        let graph = generate_random_graph(size, edge_factor, 42)?;
        let start = "v0".to_string();
        let end = format!("v{}", size - 1);
        let (all_time, single_time) = benchmark_graph("random graph", &graph, &start, &end)?;
        results.push((graph.vertex_count(), all_time, single_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15}", "Vertices", "query_all (ms)", "query (ms)");
    println!("-----------------------------------------------------");
    for (vertices, all_time, single_time) in &results {
        println!(
            "{:<10} | {:<15.3} | {:<15.3}",
            vertices,
            all_time.as_secs_f64() * 1000.0,
            single_time.as_secs_f64() * 1000.0
        );
    }

    Ok(())
}
