//! Request and response bodies for the HTTP API.
//!
//! Field names follow the camelCase JSON the admin frontend expects.

use chrono::{DateTime, Utc};
use hub_core::{ChatMessage, LanguageChecklist};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name reported by the health endpoint.
pub const APP_NAME: &str = "content-hub";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub app: &'static str,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            app: APP_NAME,
            timestamp: Utc::now(),
        }
    }
}

/// Delete request. Every field is optional on the wire so a missing one
/// surfaces as a 400 instead of a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteFileRequest {
    pub lang: Option<String>,
    pub folder: Option<String>,
    pub filename: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteFileResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct LanguageCheckQuery {
    pub lang: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageCheckResponse {
    pub language_code: String,
    pub checklist: LanguageChecklist,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageRequest {
    pub message: Option<String>,
    #[serde(default)]
    pub context: Option<Value>,
    #[serde(default)]
    pub conversation_history: Option<Vec<ChatMessage>>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessageResponse {
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatusResponse {
    pub success: bool,
    pub last_sync: Value,
}
