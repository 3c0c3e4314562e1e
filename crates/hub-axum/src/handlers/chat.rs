//! Chat handler - single request/response against the chat backend.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use chrono::Utc;

use crate::dto::{ChatMessageRequest, ChatMessageResponse};
use crate::error::HttpError;
use crate::state::AppState;

/// Append the message to the supplied history and return the reply.
pub async fn message(
    State(state): State<AppState>,
    payload: Result<Json<ChatMessageRequest>, JsonRejection>,
) -> Result<Json<ChatMessageResponse>, HttpError> {
    let Json(req) = payload?;
    let response = state
        .core
        .chat()
        .reply(
            req.message.as_deref(),
            req.conversation_history.unwrap_or_default(),
            req.context.as_ref(),
        )
        .await?;

    Ok(Json(ChatMessageResponse {
        response,
        timestamp: Utc::now(),
    }))
}
