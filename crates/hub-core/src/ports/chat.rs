//! Chat inference port.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::ChatMessage;

/// Errors from the external chat backend.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Backend unreachable or returned a failure status.
    #[error("Chat backend unavailable: {0}")]
    Unavailable(String),

    /// Backend answered with something we could not use.
    #[error("Invalid chat response: {0}")]
    InvalidResponse(String),

    /// Client is misconfigured (missing URL, bad credentials).
    #[error("Chat configuration error: {0}")]
    Configuration(String),
}

/// External chat collaborator.
///
/// Receives the full ordered conversation and optional caller-supplied
/// context, returns the assistant's reply text.
#[async_trait]
pub trait ChatPort: Send + Sync {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        context: Option<&Value>,
    ) -> Result<String, ChatError>;
}
