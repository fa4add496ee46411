use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::algorithm::{AllPathsResult, PathResult, QueryStats};
use crate::graph::{DirectedGraph, Edge, Graph};

/// Graph type served over HTTP: string ids, `f64` weights
pub type WebGraph = DirectedGraph<String, f64>;

/// Vertex and edge lists for building a graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildGraphRequest {
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<Edge<String, f64>>,
}

/// Point-to-point query parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathRequest {
    pub start: String,
    pub end: String,
}

/// Single-source query parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllPathsRequest {
    pub start: String,
}

/// Many point-to-point queries against one graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    pub queries: Vec<PathRequest>,
}

/// Description of a stored graph
#[derive(Debug, Clone, Serialize)]
pub struct GraphSummary {
    pub id: Uuid,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub created_at: DateTime<Utc>,
}

/// Point-to-point answer. `distance` is `null` when unreachable.
#[derive(Debug, Clone, Serialize)]
pub struct PathResponse {
    pub start: String,
    pub end: String,
    pub distance: Option<f64>,
    pub path: Vec<String>,
    pub stats: QueryStats,
    /// Absent for batch entries, which are timed as a whole
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<f64>,
}

impl PathResponse {
    pub fn new(request: PathRequest, result: PathResult<String, f64>, execution_time_ms: Option<f64>) -> Self {
        PathResponse {
            start: request.start,
            end: request.end,
            distance: result.distance,
            path: result.path,
            stats: result.stats,
            execution_time_ms,
        }
    }
}

/// Single-source answer. Unreachable vertices map to `null` in `distances`
/// and are absent from `paths`.
#[derive(Debug, Clone, Serialize)]
pub struct AllPathsResponse {
    pub start: String,
    pub distances: HashMap<String, Option<f64>>,
    pub paths: HashMap<String, Vec<String>>,
    pub stats: QueryStats,
    pub execution_time_ms: f64,
}

impl AllPathsResponse {
    pub fn new(result: AllPathsResult<String, f64>, execution_time_ms: f64) -> Self {
        AllPathsResponse {
            start: result.source,
            distances: result.distances,
            paths: result.paths,
            stats: result.stats,
            execution_time_ms,
        }
    }
}

/// One entry of a batch answer
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchItem {
    Ok(PathResponse),
    Error(ErrorResponse),
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchResponse {
    pub results: Vec<BatchItem>,
    pub execution_time_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub graphs: usize,
}

/// Error response for API
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// A built graph kept by the server between queries
#[derive(Debug, Clone)]
pub struct GraphSession {
    pub id: Uuid,
    pub graph: Arc<WebGraph>,
    pub created_at: DateTime<Utc>,
}

impl GraphSession {
    pub fn new(graph: WebGraph) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph: Arc::new(graph),
            created_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            id: self.id,
            vertex_count: self.graph.vertex_count(),
            edge_count: self.graph.edge_count(),
            created_at: self.created_at,
        }
    }
}
