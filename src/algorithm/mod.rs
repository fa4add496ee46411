pub mod traits;
pub mod cancel;
pub mod path;
pub mod dijkstra;
pub mod engine;

pub use cancel::CancellationToken;
pub use engine::{AllPathsResult, PathResult, ShortestPathEngine};
pub use path::reconstruct_path;
pub use traits::{QueryStats, ShortestPathAlgorithm, ShortestPathResult};
