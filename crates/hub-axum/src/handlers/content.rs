//! Static content collection handlers.
//!
//! These routes set their own CORS headers and are mounted outside the
//! configurable CORS layer.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CACHE_CONTROL,
};
use axum::response::{IntoResponse, Response};
use hub_core::ContentCollection;

use crate::error::HttpError;
use crate::state::AppState;

const CACHE_POLICY: &str = "public, max-age=3600";

fn parse(name: &str) -> Result<ContentCollection, HttpError> {
    ContentCollection::parse(name)
        .ok_or_else(|| HttpError::NotFound(format!("Unknown content collection: {name}")))
}

/// Serve one collection verbatim.
pub async fn get(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, HttpError> {
    let collection = parse(&name)?;
    let payload = state
        .core
        .content()
        .collection(collection)
        .await
        .map_err(|e| HttpError::from(e).context(format!("Failed to load {collection}")))?;

    Ok((
        [
            (CACHE_CONTROL, CACHE_POLICY),
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        Json(payload),
    )
        .into_response())
}

/// CORS preflight for a collection.
pub async fn preflight(Path(name): Path<String>) -> Result<Response, HttpError> {
    parse(&name)?;
    Ok((
        StatusCode::OK,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS"),
            (ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
        .into_response())
}
