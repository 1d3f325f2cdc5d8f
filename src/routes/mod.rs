// HTTP routes

mod http;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: AppConfig,
}

pub fn app(config: AppConfig) -> Router {
    let body_limit = config.processing.max_snapshot_bytes;
    let state = AppState { config };
    Router::new()
        .route("/", get(|| async { "goblin-monitor: telemetry digest" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/process", post(http::process_handler)) // POST /api/process
        .route("/api/overview", post(http::overview_handler)) // POST /api/overview
        .route("/api/resolvers", post(http::resolvers_handler)) // POST /api/resolvers
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
