//! Collection listing handlers.

use axum::Json;
use axum::extract::{Path, State};
use hub_core::FileListing;

use crate::error::HttpError;
use crate::state::AppState;

/// List the files stored under `(lang, folder)`.
pub async fn list(
    State(state): State<AppState>,
    Path((lang, folder)): Path<(String, String)>,
) -> Result<Json<FileListing>, HttpError> {
    let listing = state
        .core
        .content()
        .list_files(&lang, &folder)
        .await
        .map_err(|e| HttpError::from(e).context("Failed to fetch collection"))?;
    Ok(Json(listing))
}
