pub mod traits;
pub mod directed;
pub mod generators;

pub use traits::{Graph, VertexId, Weight};
pub use directed::{DirectedGraph, Edge};
