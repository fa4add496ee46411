use crate::graph::directed::{DirectedGraph, Edge};
use crate::Result;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Returns the vertex id used for intersection `(x, y)` in a street grid
pub fn intersection_id(x: usize, y: usize) -> String {
    format!("{},{}", x, y)
}

/// Generates a street grid of `width * height` intersections.
///
/// Neighbouring intersections are joined by two one-way segments, one per
/// direction. Each segment is one block long and gets its own speed drawn
/// from 5..35 mph, so the weight is a travel time in minutes and the two
/// directions of a street can differ, the way live congestion does.
pub fn generate_street_grid(width: usize, height: usize, seed: u64) -> Result<DirectedGraph<String, f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let block_miles = 0.1;

    let vertices: Vec<String> = (0..height)
        .flat_map(|y| (0..width).map(move |x| intersection_id(x, y)))
        .collect();

    let mut edges = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let mut neighbours = Vec::with_capacity(4);
            if x > 0 {
                neighbours.push((x - 1, y));
            }
            if x + 1 < width {
                neighbours.push((x + 1, y));
            }
            if y > 0 {
                neighbours.push((x, y - 1));
            }
            if y + 1 < height {
                neighbours.push((x, y + 1));
            }

            for (nx, ny) in neighbours {
                let speed_mph: f64 = rng.gen_range(5.0..35.0);
                let minutes = block_miles / speed_mph * 60.0;
                edges.push(Edge::new(intersection_id(x, y), intersection_id(nx, ny), minutes));
            }
        }
    }

    DirectedGraph::build(vertices, edges)
}

/// Generates a random directed graph with `n` vertices named `v0..vn` and
/// about `edge_factor * n` edges with weights in 1..100.
///
/// Self-loops are skipped; parallel edges may appear.
pub fn generate_random_graph(n: usize, edge_factor: f64, seed: u64) -> Result<DirectedGraph<String, f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let vertices: Vec<String> = (0..n).map(|i| format!("v{}", i)).collect();

    let num_edges = (edge_factor * n as f64) as usize;
    let mut edges = Vec::with_capacity(num_edges);
    if n > 1 {
        for _ in 0..num_edges {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            if u != v {
                let weight = rng.gen_range(1.0..100.0);
                edges.push(Edge::new(vertices[u].clone(), vertices[v].clone(), weight));
            }
        }
    }

    DirectedGraph::build(vertices, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn street_grid_has_two_way_segments() {
        let graph = generate_street_grid(3, 2, 7).unwrap();
        assert_eq!(graph.vertex_count(), 6);
        // 4 horizontal + 3 vertical streets, two segments each
        assert_eq!(graph.edge_count(), 14);
        assert!(graph.has_edge(&intersection_id(0, 0), &intersection_id(1, 0)));
        assert!(graph.has_edge(&intersection_id(1, 0), &intersection_id(0, 0)));
        assert!(!graph.has_edge(&intersection_id(0, 0), &intersection_id(1, 1)));
    }

    #[test]
    fn generators_are_deterministic_per_seed() {
        let a = generate_random_graph(50, 3.0, 42).unwrap();
        let b = generate_random_graph(50, 3.0, 42).unwrap();
        assert_eq!(a.edge_count(), b.edge_count());
        for v in 0..a.vertex_count() {
            let left: Vec<_> = a.outgoing_edges(v).collect();
            let right: Vec<_> = b.outgoing_edges(v).collect();
            assert_eq!(left, right);
        }
    }
}
