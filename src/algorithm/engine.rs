use num_traits::Zero;
use rayon::prelude::*;
use std::collections::HashMap;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{CancellationToken, QueryStats, ShortestPathAlgorithm};
use crate::graph::Graph;
use crate::{Error, Result};

/// Answer to a point-to-point query
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult<V, W> {
    /// Shortest distance, `None` if `end` is unreachable
    pub distance: Option<W>,
    /// Vertices from start to end inclusive; empty iff unreachable
    pub path: Vec<V>,
    pub stats: QueryStats,
}

impl<V, W> PathResult<V, W> {
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Answer to a single-source query
#[derive(Debug, Clone, PartialEq)]
pub struct AllPathsResult<V, W>
where
    V: std::hash::Hash + Eq,
{
    pub source: V,
    /// Every vertex of the graph; the source maps to zero and unreachable
    /// vertices to `None`
    pub distances: HashMap<V, Option<W>>,
    /// One path per reachable vertex other than the source
    pub paths: HashMap<V, Vec<V>>,
    pub stats: QueryStats,
}

impl<V, W> AllPathsResult<V, W>
where
    V: std::hash::Hash + Eq,
    W: Copy,
{
    pub fn distance_to(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    pub fn path_to(&self, vertex: &V) -> Option<&[V]> {
        self.paths.get(vertex).map(Vec::as_slice)
    }
}

/// Id-level query interface over a built graph.
///
/// Borrows the graph immutably and allocates all per-query state inside each
/// call, so one graph can back any number of engines, on any number of
/// threads.
#[derive(Debug, Clone)]
pub struct ShortestPathEngine<'g, G, A = Dijkstra> {
    graph: &'g G,
    algorithm: A,
}

impl<'g, G> ShortestPathEngine<'g, G, Dijkstra>
where
    G: Graph,
{
    /// Creates an engine running Dijkstra's algorithm
    pub fn new(graph: &'g G) -> Self {
        ShortestPathEngine {
            graph,
            algorithm: Dijkstra::new(),
        }
    }

    /// Aborts queries with [`Error::Cancelled`] once `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.algorithm = self.algorithm.with_cancellation(token);
        self
    }
}

impl<'g, G, A> ShortestPathEngine<'g, G, A>
where
    G: Graph,
    A: ShortestPathAlgorithm<G>,
{
    /// Creates an engine with a custom algorithm
    pub fn with_algorithm(graph: &'g G, algorithm: A) -> Self {
        ShortestPathEngine { graph, algorithm }
    }

    fn resolve(&self, vertex: &G::Vertex) -> Result<usize> {
        self.graph
            .index_of(vertex)
            .ok_or_else(|| Error::UnknownVertex(format!("{:?}", vertex)))
    }

    fn to_ids(&self, indices: Vec<usize>) -> Vec<G::Vertex> {
        indices
            .into_iter()
            .filter_map(|index| self.graph.vertex(index).cloned())
            .collect()
    }

    /// Shortest distance and path from `start` to `end`
    pub fn query(&self, start: &G::Vertex, end: &G::Vertex) -> Result<PathResult<G::Vertex, G::Weight>> {
        let source = self.resolve(start)?;
        let target = self.resolve(end)?;

        if source == target {
            return Ok(PathResult {
                distance: Some(<G::Weight as Zero>::zero()),
                path: vec![start.clone()],
                stats: QueryStats::default(),
            });
        }

        let result = self.algorithm.compute_shortest_path(self.graph, source, target)?;
        let distance = result.distance_to(target);
        let path = match distance {
            Some(_) => self.to_ids(self.algorithm.get_path(&result, target)),
            None => Vec::new(),
        };

        log::debug!(
            "{} query {:?} -> {:?}: distance {:?}, {} hops",
            self.algorithm.name(),
            start,
            end,
            distance,
            path.len().saturating_sub(1)
        );

        Ok(PathResult {
            distance,
            path,
            stats: result.stats,
        })
    }

    /// Distances to every vertex and paths to every reachable vertex from `start`
    pub fn query_all(&self, start: &G::Vertex) -> Result<AllPathsResult<G::Vertex, G::Weight>> {
        let source = self.resolve(start)?;
        let result = self.algorithm.compute_shortest_paths(self.graph, source)?;

        let n = self.graph.vertex_count();
        let mut distances = HashMap::with_capacity(n);
        let mut paths = HashMap::new();

        for index in 0..n {
            let Some(vertex) = self.graph.vertex(index) else {
                continue;
            };
            let distance = result.distance_to(index);
            distances.insert(vertex.clone(), distance);

            if index != source && distance.is_some() {
                paths.insert(vertex.clone(), self.to_ids(self.algorithm.get_path(&result, index)));
            }
        }

        log::debug!(
            "{} query_all from {:?}: {} of {} vertices reachable",
            self.algorithm.name(),
            start,
            paths.len() + 1,
            n
        );

        Ok(AllPathsResult {
            source: start.clone(),
            distances,
            paths,
            stats: result.stats,
        })
    }

    /// Runs many point-to-point queries in parallel against the shared graph.
    ///
    /// Results come back in input order; each query succeeds or fails on
    /// its own.
    pub fn query_many(
        &self,
        pairs: &[(G::Vertex, G::Vertex)],
    ) -> Vec<Result<PathResult<G::Vertex, G::Weight>>>
    where
        G: Sync,
        A: Sync,
        G::Vertex: Send + Sync,
        G::Weight: Send,
    {
        pairs
            .par_iter()
            .map(|(start, end)| self.query(start, end))
            .collect()
    }
}
