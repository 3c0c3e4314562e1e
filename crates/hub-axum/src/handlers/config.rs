//! Config file handlers.
//!
//! Every entry point serves the same languages document, serialized the
//! same way.

use axum::Json;
use axum::extract::{Path, State};
use serde_json::Value;

use crate::error::HttpError;
use crate::state::AppState;

/// `GET /api/v1/config` and the fixed `config-file` routes.
pub async fn languages(State(state): State<AppState>) -> Result<Json<Value>, HttpError> {
    let config = state
        .core
        .content()
        .languages_config()
        .await
        .map_err(|e| HttpError::from(e).context("Failed to load config"))?;
    Ok(Json(config))
}

/// Catch-all `config-file/{*path}` lookup.
pub async fn file(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Json<Value>, HttpError> {
    let config = state
        .core
        .content()
        .config_file(&path)
        .await
        .map_err(|e| HttpError::from(e).context("Failed to load config"))?;
    Ok(Json(config))
}
