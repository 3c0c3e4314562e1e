//! Wire types for the OpenAI-compatible chat completions API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use hub_core::ChatMessage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct WireMessage {
    pub role: String,
    pub content: String,
}

impl From<&ChatMessage> for WireMessage {
    fn from(m: &ChatMessage) -> Self {
        Self {
            role: m.role.as_str().to_string(),
            content: m.content.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CompletionRequest {
    pub model: String,
    pub messages: Vec<WireMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Text of the first choice, if any.
    pub fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|t| !t.is_empty())
    }
}

/// Build the wire message list: system prompt, then context, then the conversation.
pub(crate) fn build_messages(
    system_prompt: Option<&str>,
    context: Option<&Value>,
    conversation: &[ChatMessage],
) -> Vec<WireMessage> {
    let mut messages = Vec::with_capacity(conversation.len() + 2);
    if let Some(prompt) = system_prompt {
        messages.push(WireMessage {
            role: "system".to_string(),
            content: prompt.to_string(),
        });
    }
    if let Some(ctx) = context.filter(|c| !c.is_null()) {
        messages.push(WireMessage {
            role: "system".to_string(),
            content: format!("Context:\n{ctx}"),
        });
    }
    messages.extend(conversation.iter().map(WireMessage::from));
    messages
}
