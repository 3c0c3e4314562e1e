//! Chat completions client.

use hub_core::ChatMessage;
use serde_json::Value;

use crate::config::ChatClientConfig;
use crate::error::{InferenceError, InferenceResult};
use crate::models::{CompletionRequest, CompletionResponse, build_messages};

/// Maximum number of error body bytes kept for logging.
const ERROR_BODY_LIMIT: usize = 512;

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
///
/// One request per call, no retries.
pub struct OpenAiChatClient {
    http: reqwest::Client,
    config: ChatClientConfig,
}

impl OpenAiChatClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ChatClientConfig) -> InferenceResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { http, config })
    }

    pub(crate) async fn send(
        &self,
        conversation: &[ChatMessage],
        context: Option<&Value>,
    ) -> InferenceResult<String> {
        let body = CompletionRequest {
            model: self.config.model.clone(),
            messages: build_messages(self.config.system_prompt(), context, conversation),
        };

        tracing::debug!(
            target: "hub.chat",
            model = %body.model,
            messages = body.messages.len(),
            "Sending chat completion request"
        );

        let mut request = self.http.post(self.config.completions_url()).json(&body);
        if let Some(ref key) = self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let mut text = response.text().await.unwrap_or_default();
            if text.len() > ERROR_BODY_LIMIT {
                let mut cut = ERROR_BODY_LIMIT;
                while !text.is_char_boundary(cut) {
                    cut -= 1;
                }
                text.truncate(cut);
            }
            tracing::warn!(target: "hub.chat", status = status.as_u16(), "Chat API returned an error status");
            return Err(InferenceError::ApiRequestFailed {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: CompletionResponse = response.json().await?;
        parsed.into_text().ok_or(InferenceError::EmptyResponse)
    }
}
