//! Public configuration for the chat client.

use std::time::Duration;

/// Configuration for the chat client.
///
/// # Example
///
/// ```
/// use hub_inference::ChatClientConfig;
/// use std::time::Duration;
///
/// let config = ChatClientConfig::new()
///     .with_base_url("http://localhost:8080/v1")
///     .with_model("llama-3")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct ChatClientConfig {
    /// Base URL of the OpenAI-compatible API (without `/chat/completions`)
    pub(crate) base_url: String,
    /// Model name sent with every request
    pub(crate) model: String,
    /// Optional bearer token
    pub(crate) api_key: Option<String>,
    /// Optional system prompt placed before everything else
    pub(crate) system_prompt: Option<String>,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
}

impl Default for ChatClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: None,
            system_prompt: None,
            timeout: Duration::from_secs(30),
            user_agent: concat!("hub-inference/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ChatClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL. A trailing slash is ignored.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set an optional API key.
    #[must_use]
    pub fn with_optional_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key.filter(|k| !k.is_empty());
        self
    }

    /// Set a system prompt sent ahead of the page context.
    #[must_use]
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn system_prompt(&self) -> Option<&str> {
        self.system_prompt.as_deref()
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}
