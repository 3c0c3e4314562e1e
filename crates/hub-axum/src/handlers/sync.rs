//! Sync status handler.

use axum::Json;
use axum::extract::State;

use crate::dto::SyncStatusResponse;
use crate::error::HttpError;
use crate::state::AppState;

/// Report the last recorded sync result.
pub async fn status(State(state): State<AppState>) -> Result<Json<SyncStatusResponse>, HttpError> {
    let last_sync = state
        .core
        .sync()
        .last_result()
        .await
        .map_err(|e| HttpError::from(e).context("Failed to get sync status"))?;
    Ok(Json(SyncStatusResponse {
        success: true,
        last_sync,
    }))
}
