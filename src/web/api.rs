use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::ShortestPathEngine;
use crate::graph::DirectedGraph;
use crate::web::models::*;
use crate::web::server::ServerConfig;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub graphs: Arc<Mutex<HashMap<Uuid, GraphSession>>>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            graphs: Arc::new(Mutex::new(HashMap::new())),
            config: Arc::new(config),
        }
    }

    fn graphs(&self) -> Result<MutexGuard<'_, HashMap<Uuid, GraphSession>>, ApiError> {
        self.graphs.lock().map_err(|_| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "state_unavailable",
                "Graph store lock is poisoned".to_string(),
            )
        })
    }

    fn graph(&self, id: Uuid) -> Result<Arc<WebGraph>, ApiError> {
        self.graphs()?
            .get(&id)
            .map(|session| Arc::clone(&session.graph))
            .ok_or_else(|| graph_not_found(id))
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/graphs", post(create_graph).get(list_graphs))
        .route("/api/graphs/:graph_id", get(get_graph).delete(delete_graph))
        .route("/api/graphs/:graph_id/path", post(shortest_path))
        .route("/api/graphs/:graph_id/paths", post(all_paths))
        .route("/api/graphs/:graph_id/batch", post(batch_paths))
}

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}

fn graph_not_found(id: Uuid) -> ApiError {
    api_error(
        StatusCode::NOT_FOUND,
        "graph_not_found",
        format!("Graph not found: {}", id),
    )
}

/// Maps engine errors onto HTTP statuses
fn error_response(err: &Error) -> ApiError {
    let (status, code) = match err {
        Error::Construction(_) => (StatusCode::BAD_REQUEST, "invalid_graph"),
        Error::InvalidWeight { .. } => (StatusCode::BAD_REQUEST, "invalid_weight"),
        Error::UnknownVertex(_) => (StatusCode::NOT_FOUND, "unknown_vertex"),
        Error::Cancelled => (StatusCode::SERVICE_UNAVAILABLE, "cancelled"),
    };
    api_error(status, code, err.to_string())
}

fn engine_error(err: Error) -> ApiError {
    log::warn!("request rejected: {}", err);
    error_response(&err)
}

/// Runs a CPU-bound closure off the async executor
async fn run_blocking<T, F>(work: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, Error> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|err| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "worker_failed",
                format!("Query worker failed: {}", err),
            )
        })?
        .map_err(engine_error)
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let graphs = state.graphs()?.len();
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        graphs,
    }))
}

/// Build and store a graph
pub async fn create_graph(
    State(state): State<AppState>,
    Json(request): Json<BuildGraphRequest>,
) -> Result<(StatusCode, Json<GraphSummary>), ApiError> {
    let max_graphs = state.config.max_graphs;
    if state.graphs()?.len() >= max_graphs {
        return Err(api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "graph_limit_reached",
            format!("Server already holds {} graphs", max_graphs),
        ));
    }

    let graph = run_blocking(move || DirectedGraph::build(request.vertices, request.edges)).await?;
    let session = GraphSession::new(graph);
    let summary = session.summary();

    {
        let mut graphs = state.graphs()?;
        // Re-check under the lock; another request may have filled the store
        if graphs.len() >= max_graphs {
            return Err(api_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "graph_limit_reached",
                format!("Server already holds {} graphs", max_graphs),
            ));
        }
        graphs.insert(session.id, session);
    }

    log::info!(
        "stored graph {} ({} vertices, {} edges)",
        summary.id,
        summary.vertex_count,
        summary.edge_count
    );
    Ok((StatusCode::CREATED, Json(summary)))
}

/// List all stored graphs
pub async fn list_graphs(State(state): State<AppState>) -> Result<Json<Vec<GraphSummary>>, ApiError> {
    let graphs = state.graphs()?;
    let mut summaries: Vec<GraphSummary> = graphs.values().map(GraphSession::summary).collect();
    summaries.sort_by_key(|summary| summary.created_at);
    Ok(Json(summaries))
}

/// Get a stored graph's summary
pub async fn get_graph(
    State(state): State<AppState>,
    Path(graph_id): Path<Uuid>,
) -> Result<Json<GraphSummary>, ApiError> {
    let graphs = state.graphs()?;
    graphs
        .get(&graph_id)
        .map(|session| Json(session.summary()))
        .ok_or_else(|| graph_not_found(graph_id))
}

/// Drop a stored graph
pub async fn delete_graph(
    State(state): State<AppState>,
    Path(graph_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let removed = state.graphs()?.remove(&graph_id);
    match removed {
        Some(_) => {
            log::info!("deleted graph {}", graph_id);
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(graph_not_found(graph_id)),
    }
}

/// Point-to-point shortest path
pub async fn shortest_path(
    State(state): State<AppState>,
    Path(graph_id): Path<Uuid>,
    Json(request): Json<PathRequest>,
) -> Result<Json<PathResponse>, ApiError> {
    let graph = state.graph(graph_id)?;
    let response = run_blocking(move || {
        let start = Instant::now();
        let result = ShortestPathEngine::new(graph.as_ref()).query(&request.start, &request.end)?;
        Ok(PathResponse::new(request, result, Some(elapsed_ms(start))))
    })
    .await?;
    Ok(Json(response))
}

/// Single-source distances and paths
pub async fn all_paths(
    State(state): State<AppState>,
    Path(graph_id): Path<Uuid>,
    Json(request): Json<AllPathsRequest>,
) -> Result<Json<AllPathsResponse>, ApiError> {
    let graph = state.graph(graph_id)?;
    let response = run_blocking(move || {
        let start = Instant::now();
        let result = ShortestPathEngine::new(graph.as_ref()).query_all(&request.start)?;
        Ok(AllPathsResponse::new(result, elapsed_ms(start)))
    })
    .await?;
    Ok(Json(response))
}

/// Many point-to-point queries in one request
pub async fn batch_paths(
    State(state): State<AppState>,
    Path(graph_id): Path<Uuid>,
    Json(request): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, ApiError> {
    let max_batch = state.config.max_batch;
    if request.queries.len() > max_batch {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "batch_too_large",
            format!("Batch of {} exceeds the limit of {}", request.queries.len(), max_batch),
        ));
    }

    let graph = state.graph(graph_id)?;
    let response = run_blocking(move || {
        let start = Instant::now();
        let pairs: Vec<(String, String)> = request
            .queries
            .iter()
            .map(|query| (query.start.clone(), query.end.clone()))
            .collect();
        let results = ShortestPathEngine::new(graph.as_ref()).query_many(&pairs);

        let mut failed = 0;
        let results: Vec<BatchItem> = request
            .queries
            .into_iter()
            .zip(results)
            .map(|(query, result)| match result {
                Ok(result) => BatchItem::Ok(PathResponse::new(query, result, None)),
                Err(err) => {
                    log::debug!("batch query {} -> {} failed: {}", query.start, query.end, err);
                    failed += 1;
                    let (_, Json(body)) = error_response(&err);
                    BatchItem::Error(body)
                }
            })
            .collect();
        if failed > 0 {
            log::warn!("{} of {} batch queries failed", failed, results.len());
        }

        Ok(BatchResponse {
            results,
            execution_time_ms: elapsed_ms(start),
        })
    })
    .await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConstructionError;

    #[test]
    fn errors_map_to_statuses() {
        let cases = [
            (
                Error::Construction(ConstructionError::DuplicateVertex { vertex: "\"A\"".to_string() }),
                StatusCode::BAD_REQUEST,
                "invalid_graph",
            ),
            (
                Error::InvalidWeight { edge: 0, weight: -1.0 },
                StatusCode::BAD_REQUEST,
                "invalid_weight",
            ),
            (Error::UnknownVertex("\"Z\"".to_string()), StatusCode::NOT_FOUND, "unknown_vertex"),
            (Error::Cancelled, StatusCode::SERVICE_UNAVAILABLE, "cancelled"),
        ];

        for (err, status, code) in cases {
            let (actual, Json(body)) = error_response(&err);
            assert_eq!(actual, status);
            assert_eq!(body.error, code);
            assert_eq!(body.message, err.to_string());
        }
    }
}
