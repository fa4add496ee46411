use colored::*;
use route_sssp::graph::generators::{generate_street_grid, intersection_id};
use route_sssp::{DirectedGraph, Edge, ShortestPathEngine};

fn print_route(engine: &ShortestPathEngine<'_, DirectedGraph<&'static str, f64>>, from: &'static str, to: &'static str) -> Result<(), route_sssp::Error> {
    let route = engine.query(&from, &to)?;
    match route.distance {
        Some(minutes) => println!(
            "{} {} -> {}: {} via {}",
            "Route".green().bold(),
            from,
            to,
            format!("{:.0}", minutes).yellow(),
            route.path.join(" -> ").cyan()
        ),
        None => println!("{} {} -> {}: no path exists", "Route".red().bold(), from, to),
    }
    Ok(())
}

fn main() -> Result<(), route_sssp::Error> {
    println!("{}", "=== City Road Network ===".bold());

    let places = ["Home", "Work", "Gym", "Store", "Park", "School"];
    let roads = [
        Edge::new("Home", "Work", 10.0),
        Edge::new("Home", "Store", 5.0),
        Edge::new("Store", "Work", 3.0),
        Edge::new("Store", "Gym", 4.0),
        Edge::new("Gym", "Work", 2.0),
        Edge::new("Work", "Park", 6.0),
        Edge::new("Park", "School", 3.0),
        Edge::new("Gym", "School", 8.0),
        Edge::new("Home", "Park", 15.0),
    ];
    let city = DirectedGraph::build(places, roads)?;
    let engine = ShortestPathEngine::new(&city);

    print_route(&engine, "Home", "School")?;
    print_route(&engine, "Home", "Work")?;
    print_route(&engine, "School", "Home")?;

    println!("\n{}", "=== Disconnected Graph ===".bold());
    let islands = DirectedGraph::build(
        ["A", "B", "C", "D"],
        [Edge::new("A", "B", 1.0), Edge::new("C", "D", 1.0)],
    )?;
    print_route(&ShortestPathEngine::new(&islands), "A", "D")?;

    println!("\n{}", "=== Street Grid (travel minutes) ===".bold());
    let grid = generate_street_grid(20, 20, 2024)?;
    let engine = ShortestPathEngine::new(&grid);
    let start = intersection_id(0, 0);
    let end = intersection_id(19, 19);
    let route = engine.query(&start, &end)?;
    if let Some(minutes) = route.distance {
        println!(
            "{} -> {}: {} minutes over {} blocks, {} intersections settled",
            start,
            end,
            format!("{:.1}", minutes).yellow(),
            route.path.len() - 1,
            route.stats.settled
        );
    }

    Ok(())
}
