//! Internal error types for inference calls.
//!
//! These errors are internal to `hub-inference` and are mapped to the core
//! `ChatError` at the boundary.

use thiserror::Error;

pub(crate) type InferenceResult<T> = Result<T, InferenceError>;

#[derive(Debug, Error)]
pub enum InferenceError {
    /// The API answered with a non-success status.
    #[error("Chat API request failed with status {status}: {body}")]
    ApiRequestFailed { status: u16, body: String },

    /// The API answered 2xx but without a usable choice.
    #[error("Chat API returned no message content")]
    EmptyResponse,

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
