//! Chat service - builds the conversation and forwards it to the chat port.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{ChatMessage, build_conversation};
use crate::ports::{ChatPort, CoreError};

pub struct ChatService {
    chat: Arc<dyn ChatPort>,
}

impl ChatService {
    pub fn new(chat: Arc<dyn ChatPort>) -> Self {
        Self { chat }
    }

    /// Send `message` after `history` and return the assistant reply.
    pub async fn reply(
        &self,
        message: Option<&str>,
        history: Vec<ChatMessage>,
        context: Option<&Value>,
    ) -> Result<String, CoreError> {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .ok_or_else(|| CoreError::Validation("Message is required".to_string()))?;

        let messages = build_conversation(history, message);
        tracing::debug!(target: "hub.chat", messages = messages.len(), "Forwarding chat request");

        self.chat.complete(&messages, context).await.map_err(|e| {
            tracing::error!(target: "hub.chat", error = %e, "Chat backend failed");
            CoreError::Chat(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MessageRole;
    use crate::ports::ChatError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingChat {
        seen: Mutex<Vec<Vec<ChatMessage>>>,
        fail: bool,
    }

    #[async_trait]
    impl ChatPort for RecordingChat {
        async fn complete(
            &self,
            messages: &[ChatMessage],
            _context: Option<&Value>,
        ) -> Result<String, ChatError> {
            self.seen.lock().unwrap().push(messages.to_vec());
            if self.fail {
                return Err(ChatError::Unavailable("connection refused".into()));
            }
            Ok("pong".to_string())
        }
    }

    #[tokio::test]
    async fn test_empty_history_sends_single_user_message() {
        let chat = Arc::new(RecordingChat::default());
        let svc = ChatService::new(chat.clone());

        let reply = svc.reply(Some("ping"), Vec::new(), None).await.unwrap();
        assert_eq!(reply, "pong");

        let seen = chat.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].len(), 1);
        assert_eq!(seen[0][0].role, MessageRole::User);
        assert_eq!(seen[0][0].content, "ping");
    }

    #[tokio::test]
    async fn test_missing_message_is_validation_error() {
        let chat = Arc::new(RecordingChat::default());
        let svc = ChatService::new(chat.clone());

        for message in [None, Some(""), Some("   ")] {
            let err = svc.reply(message, Vec::new(), None).await.unwrap_err();
            assert!(matches!(err, CoreError::Validation(_)));
        }
        assert!(chat.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_backend_failure_maps_to_chat_error() {
        let chat = Arc::new(RecordingChat {
            fail: true,
            ..RecordingChat::default()
        });
        let svc = ChatService::new(chat);

        let err = svc.reply(Some("ping"), Vec::new(), None).await.unwrap_err();
        assert!(matches!(err, CoreError::Chat(ChatError::Unavailable(_))));
    }
}
