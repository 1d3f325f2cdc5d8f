// Handlers: version, and the three snapshot-processing endpoints

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::AppState;
use crate::error::SnapshotError;
use crate::models::{OverviewReport, ProcessedData, RawSnapshot, ResolversReport, Snapshot};
use crate::modes;
use crate::version::{NAME, VERSION};

/// Failure of a processing request. No partial report is ever returned.
pub(super) enum ApiError {
    Snapshot(SnapshotError),
    Internal(anyhow::Error),
}

impl From<SnapshotError> for ApiError {
    fn from(e: SnapshotError) -> Self {
        Self::Snapshot(e)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::Internal(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Snapshot(e) => {
                tracing::info!(error = %e, "rejected malformed snapshot");
                (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
            }
            ApiError::Internal(e) => {
                tracing::warn!(error = %e, "snapshot processing failed");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// POST /api/process — both modes, shaped `{overview, resolvers}`.
pub(super) async fn process_handler(
    State(state): State<AppState>,
    Json(raw): Json<RawSnapshot>,
) -> Result<Json<ProcessedData>, ApiError> {
    let snapshot = Snapshot::try_from(raw)?;
    let data = if state.config.processing.parallel_modes {
        modes::process_parallel(Arc::new(snapshot)).await?
    } else {
        modes::process(&snapshot)
    };
    tracing::info!(
        total_requests = data.overview.summary.num_total_requests,
        resolvers = data.resolvers.invocation_counts.len(),
        "snapshot processed"
    );
    Ok(Json(data))
}

/// POST /api/overview
pub(super) async fn overview_handler(
    Json(raw): Json<RawSnapshot>,
) -> Result<Json<OverviewReport>, ApiError> {
    let snapshot = Snapshot::try_from(raw)?;
    Ok(Json(modes::overview::get_overview_data(&snapshot)))
}

/// POST /api/resolvers
pub(super) async fn resolvers_handler(
    Json(raw): Json<RawSnapshot>,
) -> Result<Json<ResolversReport>, ApiError> {
    let snapshot = Snapshot::try_from(raw)?;
    Ok(Json(modes::resolvers::get_resolvers_data(&snapshot)))
}
