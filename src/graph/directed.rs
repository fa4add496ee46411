use crate::graph::traits::{Graph, VertexId, Weight};
use crate::{ConstructionError, Error, Result};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// A directed, weighted edge as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<V, W> {
    pub from: V,
    pub to: V,
    pub weight: W,
}

impl<V, W> Edge<V, W> {
    /// Creates a new edge from `from` to `to`
    pub fn new(from: V, to: V, weight: W) -> Self {
        Edge { from, to, weight }
    }
}

impl<V, W> From<(V, V, W)> for Edge<V, W> {
    fn from((from, to, weight): (V, V, W)) -> Self {
        Edge::new(from, to, weight)
    }
}

/// An immutable directed multigraph stored as adjacency lists.
///
/// Built once with [`DirectedGraph::build`], which validates the whole input
/// up front. After that the graph is read-only, so it can be shared between
/// threads and queried concurrently.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V, W>
where
    V: VertexId,
    W: Weight,
{
    /// Vertex ids in input order; position is the dense index
    vertices: Vec<V>,

    /// vertex id -> dense index
    index: HashMap<V, usize>,

    /// Outgoing edges for each vertex: index -> [(target index, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,

    /// Total number of edges, parallel edges included
    edge_count: usize,
}

impl<V, W> DirectedGraph<V, W>
where
    V: VertexId,
    W: Weight,
{
    /// Builds a graph from a vertex list and an ordered edge list.
    ///
    /// Fails on a duplicate vertex id, on an edge whose endpoint is not in
    /// the vertex list, and on a negative or NaN weight. Nothing is returned
    /// unless the whole input is valid.
    pub fn build<I, E>(vertices: I, edges: E) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator,
        E::Item: Into<Edge<V, W>>,
    {
        let vertices = vertices.into_iter();
        let mut ids = Vec::with_capacity(vertices.size_hint().0);
        let mut index = HashMap::with_capacity(vertices.size_hint().0);

        for vertex in vertices {
            match index.entry(vertex.clone()) {
                Entry::Occupied(_) => {
                    return Err(ConstructionError::DuplicateVertex {
                        vertex: format!("{:?}", vertex),
                    }
                    .into());
                }
                Entry::Vacant(slot) => {
                    slot.insert(ids.len());
                    ids.push(vertex);
                }
            }
        }

        let mut outgoing_edges = vec![Vec::new(); ids.len()];
        let mut edge_count = 0;

        for (position, edge) in edges.into_iter().enumerate() {
            let Edge { from, to, weight } = edge.into();
            let source = Self::resolve_endpoint(&index, &from, position)?;
            let target = Self::resolve_endpoint(&index, &to, position)?;

            if weight.is_nan() || weight < W::zero() {
                return Err(Error::InvalidWeight {
                    edge: position,
                    weight: weight.to_f64().unwrap_or(f64::NAN),
                });
            }

            outgoing_edges[source].push((target, weight));
            edge_count += 1;
        }

        log::debug!(
            "built directed graph with {} vertices and {} edges",
            ids.len(),
            edge_count
        );

        Ok(DirectedGraph {
            vertices: ids,
            index,
            outgoing_edges,
            edge_count,
        })
    }

    fn resolve_endpoint(index: &HashMap<V, usize>, vertex: &V, edge: usize) -> Result<usize> {
        index.get(vertex).copied().ok_or_else(|| {
            ConstructionError::UnknownEndpoint {
                edge,
                vertex: format!("{:?}", vertex),
            }
            .into()
        })
    }

    /// Iterates over vertex ids in input order
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }
}

impl<V, W> Graph for DirectedGraph<V, W>
where
    V: VertexId,
    W: Weight,
{
    type Vertex = V;
    type Weight = W;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    fn vertex(&self, index: usize) -> Option<&V> {
        self.vertices.get(index)
    }

    fn outgoing_edges(&self, index: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(index) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_keeps_edge_input_order() {
        let graph = DirectedGraph::build(
            ["a", "b", "c"],
            [("a", "c", 2.0), ("a", "b", 1.0), ("a", "c", 0.5)],
        )
        .unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        let a = graph.index_of(&"a").unwrap();
        let edges: Vec<_> = graph.outgoing_edges(a).collect();
        assert_eq!(edges, vec![(2, 2.0), (1, 1.0), (2, 0.5)]);
    }

    #[test]
    fn parallel_edges_report_smallest_weight() {
        let graph =
            DirectedGraph::build(["a", "b"], [("a", "b", 3.0), ("a", "b", 1.5)]).unwrap();
        assert!(graph.has_edge(&"a", &"b"));
        assert!(!graph.has_edge(&"b", &"a"));
        assert_eq!(graph.edge_weight(&"a", &"b"), Some(1.5));
    }

    #[test]
    fn duplicate_vertex_is_rejected() {
        let err = DirectedGraph::<_, f64>::build(["a", "b", "a"], Vec::<Edge<&str, f64>>::new())
            .unwrap_err();
        assert_eq!(
            err,
            Error::Construction(ConstructionError::DuplicateVertex {
                vertex: "\"a\"".to_string()
            })
        );
    }

    #[test]
    fn unknown_endpoint_is_rejected() {
        let err = DirectedGraph::build(["a", "b"], [("a", "b", 1.0), ("b", "z", 1.0)])
            .unwrap_err();
        assert_eq!(
            err,
            Error::Construction(ConstructionError::UnknownEndpoint {
                edge: 1,
                vertex: "\"z\"".to_string()
            })
        );
    }

    #[test]
    fn negative_and_nan_weights_are_rejected() {
        let err = DirectedGraph::build(["a", "b"], [("a", "b", -1.0)]).unwrap_err();
        assert_eq!(err, Error::InvalidWeight { edge: 0, weight: -1.0 });

        let err = DirectedGraph::build(["a", "b"], [("a", "b", f64::NAN)]).unwrap_err();
        assert!(matches!(err, Error::InvalidWeight { edge: 0, .. }));
    }

    #[test]
    fn zero_weight_is_accepted() {
        let graph = DirectedGraph::build(["a", "b"], [("a", "b", 0.0)]).unwrap();
        assert_eq!(graph.edge_weight(&"a", &"b"), Some(0.0));
    }

    #[test]
    fn vertices_iterate_in_input_order() {
        let graph =
            DirectedGraph::<_, f32>::build(["z", "y", "x"], Vec::<(&str, &str, f32)>::new())
                .unwrap();
        let order: Vec<_> = graph.vertices().copied().collect();
        assert_eq!(order, vec!["z", "y", "x"]);
        assert_eq!(graph.vertex(0), Some(&"z"));
        assert_eq!(graph.vertex(3), None);
    }
}
