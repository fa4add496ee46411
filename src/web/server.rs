use axum::{
    http::{header, Method},
    Router,
};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
    /// Graphs kept in memory at once
    pub max_graphs: usize,
    /// Queries accepted in one batch request
    pub max_batch: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3005,
            enable_cors: true,
            max_graphs: 1000,
            max_batch: 10_000,
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `ROUTE_SSSP_HOST`, `ROUTE_SSSP_PORT`,
    /// `ROUTE_SSSP_CORS`, `ROUTE_SSSP_MAX_GRAPHS` and `ROUTE_SSSP_MAX_BATCH`.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_or("ROUTE_SSSP_HOST", defaults.host),
            port: env_or("ROUTE_SSSP_PORT", defaults.port),
            enable_cors: env_or("ROUTE_SSSP_CORS", defaults.enable_cors),
            max_graphs: env_or("ROUTE_SSSP_MAX_GRAPHS", defaults.max_graphs),
            max_batch: env_or("ROUTE_SSSP_MAX_BATCH", defaults.max_batch),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("ignoring invalid {}={:?}", key, raw);
            default
        }),
        Err(_) => default,
    }
}

/// Build the application router with middleware
pub fn build_app(config: ServerConfig) -> Router {
    let enable_cors = config.enable_cors;
    let app = Router::new()
        .merge(create_router())
        .with_state(AppState::new(config));

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        app.layer(ServiceBuilder::new().layer(cors).into_inner())
    } else {
        app
    }
}

/// Start the web server with the given configuration
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.socket_addr();
    let app = build_app(config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("route_sssp server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
