use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

/// Bounds required of a vertex identifier
pub trait VertexId: Clone + Eq + Hash + Debug {}

impl<T> VertexId for T where T: Clone + Eq + Hash + Debug {}

/// Bounds required of an edge weight
pub trait Weight: Float + Debug {}

impl<T> Weight for T where T: Float + Debug {}

/// Trait representing a read-only weighted directed graph.
///
/// Vertices are addressed two ways: by their caller-supplied id `V`, and by
/// a dense index in `0..vertex_count()` assigned in vertex-input order. The
/// shortest path algorithms work on indices; ids are resolved once at the
/// query boundary.
pub trait Graph: Debug {
    /// Caller-supplied vertex identifier
    type Vertex: VertexId;

    /// Edge weight and distance type
    type Weight: Weight;

    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph, parallel edges included
    fn edge_count(&self) -> usize;

    /// Returns the dense index of a vertex id
    fn index_of(&self, vertex: &Self::Vertex) -> Option<usize>;

    /// Returns the vertex id stored at a dense index
    fn vertex(&self, index: usize) -> Option<&Self::Vertex>;

    /// Returns an iterator over the outgoing edges from a vertex index, in edge-input order
    fn outgoing_edges(&self, index: usize) -> Box<dyn Iterator<Item = (usize, Self::Weight)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &Self::Vertex) -> bool {
        self.index_of(vertex).is_some()
    }

    /// Returns true if there's at least one edge from `from` to `to`
    fn has_edge(&self, from: &Self::Vertex, to: &Self::Vertex) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists.
    ///
    /// With parallel edges the smallest weight is returned.
    fn edge_weight(&self, from: &Self::Vertex, to: &Self::Vertex) -> Option<Self::Weight> {
        let from = self.index_of(from)?;
        let to = self.index_of(to)?;
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .fold(None, |best: Option<Self::Weight>, weight| match best {
                Some(current) if current <= weight => Some(current),
                _ => Some(weight),
            })
    }
}
