use serde::Serialize;

use crate::algorithm::path::reconstruct_path;
use crate::graph::Graph;
use crate::Result;

/// Counters collected while a query runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QueryStats {
    /// Vertices whose distance was finalized
    pub settled: usize,
    /// Edge relaxations that improved a tentative distance
    pub relaxed: usize,
    /// Frontier entries dropped because they were stale or already settled
    pub stale_skipped: usize,
    /// Largest number of pending frontier entries at any point
    pub frontier_peak: usize,
}

/// Result of a shortest path algorithm execution, over dense vertex indices
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W> {
    /// Distances from source to each vertex; `None` is unreachable.
    ///
    /// When the run stopped early at `target`, only the target's entry and
    /// those of settled vertices are final.
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex index
    pub source: usize,

    pub stats: QueryStats,
}

impl<W: Copy> ShortestPathResult<W> {
    /// Distance to `target`, `None` if unreachable or out of range
    pub fn distance_to(&self, target: usize) -> Option<W> {
        self.distances.get(target).copied().flatten()
    }

    /// Path from the source to `target`, empty if unreachable
    pub fn path_to(&self, target: usize) -> Vec<usize> {
        reconstruct_path(&self.predecessors, self.source, target)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<G>
where
    G: Graph,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<G::Weight>>;

    /// Compute the shortest path from `source` to `target`, stopping as soon
    /// as `target` is settled
    fn compute_shortest_path(
        &self,
        graph: &G,
        source: usize,
        target: usize,
    ) -> Result<ShortestPathResult<G::Weight>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Rebuild the path from the result's source to `target`
    fn get_path(&self, result: &ShortestPathResult<G::Weight>, target: usize) -> Vec<usize> {
        reconstruct_path(&result.predecessors, result.source, target)
    }
}
