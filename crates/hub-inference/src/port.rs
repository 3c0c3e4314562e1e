//! Port trait implementation for `OpenAiChatClient`.

use async_trait::async_trait;
use serde_json::Value;

use hub_core::{ChatError, ChatMessage, ChatPort};

use crate::client::OpenAiChatClient;
use crate::error::InferenceError;

/// Convert internal `InferenceError` to core `ChatError`.
fn map_error(err: InferenceError) -> ChatError {
    match err {
        InferenceError::ApiRequestFailed { status, body } if status == 401 || status == 403 => {
            ChatError::Configuration(format!("API rejected credentials ({status}): {body}"))
        }
        InferenceError::ApiRequestFailed { .. } => ChatError::Unavailable(err.to_string()),
        InferenceError::EmptyResponse => ChatError::InvalidResponse(err.to_string()),
        InferenceError::Network(e) if e.is_decode() => ChatError::InvalidResponse(e.to_string()),
        InferenceError::Network(e) => ChatError::Unavailable(e.to_string()),
    }
}

#[async_trait]
impl ChatPort for OpenAiChatClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        context: Option<&Value>,
    ) -> Result<String, ChatError> {
        self.send(messages, context).await.map_err(map_error)
    }
}
