use crate::algorithm::{CancellationToken, QueryStats, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::PriorityFrontier;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with a lazy-deletion binary heap frontier
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    cancellation: Option<CancellationToken>,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra { cancellation: None }
    }

    /// Aborts runs with [`Error::Cancelled`] once `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .map_or(false, CancellationToken::is_cancelled)
    }

    /// Relaxation loop shared by both query modes. With a `target` the loop
    /// stops as soon as the target is extracted; without one it runs until
    /// the frontier is exhausted.
    fn run<G, W>(&self, graph: &G, source: usize, target: Option<usize>) -> Result<ShortestPathResult<W>>
    where
        G: Graph<Weight = W>,
        W: Weight,
    {
        let n = graph.vertex_count();
        if source >= n {
            return Err(Error::UnknownVertex(format!("#{}", source)));
        }
        if let Some(t) = target.filter(|&t| t >= n) {
            return Err(Error::UnknownVertex(format!("#{}", t)));
        }

        let infinity = W::infinity();
        let mut distances = vec![infinity; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut stats = QueryStats::default();

        // Distance to source is 0
        distances[source] = W::zero();

        let mut frontier = PriorityFrontier::with_capacity(n);
        if target != Some(source) {
            frontier.push(source, W::zero());
            stats.frontier_peak = 1;
        }

        while let Some((u, priority)) = frontier.pop() {
            if self.is_cancelled() {
                log::debug!("query from #{} cancelled after {} settled vertices", source, stats.settled);
                return Err(Error::Cancelled);
            }

            // Already finalized, or superseded by a shorter entry
            if settled[u] || priority > distances[u] {
                stats.stale_skipped += 1;
                continue;
            }

            settled[u] = true;
            stats.settled += 1;
            log::trace!("settled #{} at {:?}", u, distances[u]);

            if Some(u) == target {
                break;
            }

            let dist_u = distances[u];
            for (v, weight) in graph.outgoing_edges(u) {
                let candidate = dist_u + weight;
                if candidate < distances[v] {
                    distances[v] = candidate;
                    predecessors[v] = Some(u);
                    frontier.push(v, candidate);
                    stats.relaxed += 1;
                }
            }
            stats.frontier_peak = stats.frontier_peak.max(frontier.len());
        }

        log::debug!(
            "dijkstra from #{}: settled {}, relaxed {}, skipped {} stale entries",
            source,
            stats.settled,
            stats.relaxed,
            stats.stale_skipped
        );

        Ok(ShortestPathResult {
            distances: distances
                .into_iter()
                .map(|d| if d < infinity { Some(d) } else { None })
                .collect(),
            predecessors,
            source,
            stats,
        })
    }
}

impl<G> ShortestPathAlgorithm<G> for Dijkstra
where
    G: Graph,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<G::Weight>> {
        self.run(graph, source, None)
    }

    fn compute_shortest_path(
        &self,
        graph: &G,
        source: usize,
        target: usize,
    ) -> Result<ShortestPathResult<G::Weight>> {
        self.run(graph, source, Some(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::generators::{generate_street_grid, intersection_id};
    use crate::graph::DirectedGraph;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Barrier;
    use std::thread;

    /// Street grid that stops at its first edge expansion until another
    /// thread has passed the barrier twice
    #[derive(Debug)]
    struct PausingGrid {
        inner: DirectedGraph<String, f64>,
        barrier: Barrier,
        paused: AtomicBool,
    }

    impl Graph for PausingGrid {
        type Vertex = String;
        type Weight = f64;

        fn vertex_count(&self) -> usize {
            self.inner.vertex_count()
        }

        fn edge_count(&self) -> usize {
            self.inner.edge_count()
        }

        fn index_of(&self, vertex: &String) -> Option<usize> {
            self.inner.index_of(vertex)
        }

        fn vertex(&self, index: usize) -> Option<&String> {
            self.inner.vertex(index)
        }

        fn outgoing_edges(&self, index: usize) -> Box<dyn Iterator<Item = (usize, f64)> + '_> {
            if !self.paused.swap(true, Ordering::SeqCst) {
                self.barrier.wait();
                self.barrier.wait();
            }
            self.inner.outgoing_edges(index)
        }
    }

    fn sample() -> DirectedGraph<usize, f64> {
        DirectedGraph::build(
            0..5,
            [
                (0, 1, 10.0),
                (0, 2, 5.0),
                (1, 3, 1.0),
                (2, 1, 3.0),
                (2, 3, 9.0),
                (2, 4, 2.0),
                (3, 4, 4.0),
                (4, 0, 7.0),
                (4, 3, 6.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn computes_all_distances() {
        let graph = sample();
        let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
        assert_eq!(
            result.distances,
            vec![Some(0.0), Some(8.0), Some(5.0), Some(9.0), Some(7.0)]
        );
        assert_eq!(result.path_to(3), vec![0, 2, 1, 3]);
        assert_eq!(result.stats.settled, 5);
    }

    #[test]
    fn point_to_point_stops_at_target() {
        let graph = sample();
        let full = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
        let early = Dijkstra::new().compute_shortest_path(&graph, 0, 2).unwrap();
        assert_eq!(early.distance_to(2), Some(5.0));
        assert_eq!(early.path_to(2), vec![0, 2]);
        assert!(early.stats.settled < full.stats.settled);
    }

    #[test]
    fn stale_entries_are_skipped() {
        // 0 -> 2 is pushed at 10, then improved to 2 through 1
        let graph =
            DirectedGraph::build(0..3, [(0, 2, 10.0), (0, 1, 1.0), (1, 2, 1.0)]).unwrap();
        let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
        assert_eq!(result.distance_to(2), Some(2.0));
        assert_eq!(result.stats.stale_skipped, 1);
    }

    #[test]
    fn out_of_range_indices_are_unknown() {
        let graph = sample();
        let err = Dijkstra::new().compute_shortest_paths(&graph, 9).unwrap_err();
        assert_eq!(err, Error::UnknownVertex("#9".to_string()));
        let err = Dijkstra::new().compute_shortest_path(&graph, 0, 5).unwrap_err();
        assert_eq!(err, Error::UnknownVertex("#5".to_string()));
    }

    #[test]
    fn cancelled_token_aborts_the_run() {
        let graph = sample();
        let token = CancellationToken::new();
        token.cancel();
        let dijkstra = Dijkstra::new().with_cancellation(token);
        assert_eq!(
            dijkstra.compute_shortest_paths(&graph, 0).unwrap_err(),
            Error::Cancelled
        );
    }

    #[test]
    fn cancelling_from_another_thread_stops_a_running_query() {
        let grid = PausingGrid {
            inner: generate_street_grid(60, 60, 17).unwrap(),
            barrier: Barrier::new(2),
            paused: AtomicBool::new(false),
        };
        let source = grid.index_of(&intersection_id(0, 0)).unwrap();
        let token = CancellationToken::new();
        let dijkstra = Dijkstra::new().with_cancellation(token.clone());

        let outcome = thread::scope(|scope| {
            let query = scope.spawn(|| dijkstra.compute_shortest_paths(&grid, source));
            // the query is now blocked inside its first expansion
            grid.barrier.wait();
            token.cancel();
            grid.barrier.wait();
            query.join().unwrap()
        });

        assert_eq!(outcome.unwrap_err(), Error::Cancelled);
    }

    fn sample_path(dijkstra: &Dijkstra, result: &ShortestPathResult<f64>, target: usize) -> Vec<usize> {
        ShortestPathAlgorithm::<DirectedGraph<usize, f64>>::get_path(dijkstra, result, target)
    }

    #[test]
    fn get_path_follows_predecessors() {
        let graph = sample();
        let dijkstra = Dijkstra::new();
        let result = dijkstra.compute_shortest_paths(&graph, 0).unwrap();
        assert_eq!(sample_path(&dijkstra, &result, 4), vec![0, 2, 4]);
        assert_eq!(sample_path(&dijkstra, &result, 0), vec![0]);
        assert_eq!(sample_path(&dijkstra, &result, 3), result.path_to(3));

        let partial = dijkstra.compute_shortest_path(&graph, 2, 1).unwrap();
        assert_eq!(sample_path(&dijkstra, &partial, 1), vec![2, 1]);
    }

    #[test]
    fn name_is_reported() {
        let graph = sample();
        assert_eq!(ShortestPathAlgorithm::<DirectedGraph<usize, f64>>::name(&Dijkstra::new()), "Dijkstra");
        assert!(Dijkstra::new().compute_shortest_paths(&graph, 4).is_ok());
    }
}
