//! Route SSSP - Dijkstra shortest paths over static directed graphs
//!
//! A graph is built once from a vertex list and a directed edge list with
//! non-negative weights, and then answers any number of queries:
//! point-to-point (distance and path from one vertex to another) and
//! single-source (distances and paths from one vertex to every reachable
//! vertex).
//!
//! ```
//! use route_sssp::{DirectedGraph, Edge, ShortestPathEngine};
//!
//! let graph = DirectedGraph::build(
//!     ["A", "B", "C"],
//!     [Edge::new("A", "B", 0.0), Edge::new("B", "C", 1.0)],
//! ).unwrap();
//!
//! let engine = ShortestPathEngine::new(&graph);
//! let result = engine.query(&"A", &"C").unwrap();
//! assert_eq!(result.distance, Some(1.0));
//! assert_eq!(result.path, vec!["A", "B", "C"]);
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

pub use algorithm::{
    dijkstra::Dijkstra,
    engine::{AllPathsResult, PathResult, ShortestPathEngine},
    CancellationToken, QueryStats, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{DirectedGraph, Edge, Graph};

/// Reasons a graph cannot be built from its vertex and edge lists
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConstructionError {
    #[error("duplicate vertex id: {vertex}")]
    DuplicateVertex { vertex: String },

    #[error("edge {edge} references unknown vertex: {vertex}")]
    UnknownEndpoint { edge: usize, vertex: String },
}

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("graph construction failed: {0}")]
    Construction(#[from] ConstructionError),

    #[error("invalid weight {weight} on edge {edge}: weights must be non-negative")]
    InvalidWeight { edge: usize, weight: f64 },

    #[error("unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("query cancelled")]
    Cancelled,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
