use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use blotter_lib::{Library, LoadReport};
use tracing::error;

use super::assign_headers;

/// Rebuilds the catalog on the blocking pool. Readers keep seeing the old
/// catalog until the new one is published.
pub async fn run(
    State(library): State<Arc<Library>>,
) -> Result<(HeaderMap, Json<LoadReport>), StatusCode> {
    let report = tokio::task::spawn_blocking(move || library.refresh())
        .await
        .map_err(|err| {
            error!("Refresh task failed: {err}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map_err(|err| {
            error!("Refresh failed: {err}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok((assign_headers(), Json(report)))
}
