//! Admin handlers - file deletion and language readiness.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use chrono::Utc;

use crate::dto::{DeleteFileRequest, DeleteFileResponse, LanguageCheckQuery, LanguageCheckResponse};
use crate::error::HttpError;
use crate::state::AppState;

/// Delete one stored file.
///
/// Identity validation happens before the store is touched, so a request
/// missing any field never reaches it.
pub async fn delete(
    State(state): State<AppState>,
    payload: Result<Json<DeleteFileRequest>, JsonRejection>,
) -> Result<Json<DeleteFileResponse>, HttpError> {
    let Json(req) = payload?;
    let id = state
        .core
        .content()
        .delete_file(req.lang, req.folder, req.filename)
        .await
        .map_err(|e| HttpError::from(e).context("Failed to delete file"))?;

    Ok(Json(DeleteFileResponse {
        success: true,
        message: format!("File {} deleted successfully", id.filename()),
    }))
}

/// Compute the readiness checklist for one language.
pub async fn language_check(
    State(state): State<AppState>,
    Query(query): Query<LanguageCheckQuery>,
) -> Result<Json<LanguageCheckResponse>, HttpError> {
    let lang = query
        .lang
        .filter(|l| !l.trim().is_empty())
        .ok_or_else(|| HttpError::BadRequest("Language code is required".to_string()))?;

    let checklist = state
        .core
        .languages()
        .checklist(&lang)
        .await
        .map_err(|e| HttpError::from(e).context("Failed to check language"))?;

    Ok(Json(LanguageCheckResponse {
        language_code: lang,
        checklist,
        timestamp: Utc::now(),
    }))
}
