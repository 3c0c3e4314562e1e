//! OpenAI-compatible chat client implementing the hub's `ChatPort`.
//!
//! Use [`OpenAiChatClient`] through the `ChatPort` trait; wire types and
//! error details stay internal.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod models;
mod port;

// ============================================================================
// Public API
// ============================================================================

pub use client::OpenAiChatClient;
pub use config::ChatClientConfig;
pub use error::InferenceError;

// Silence unused dev-dependency warnings
#[cfg(test)]
use axum as _;
#[cfg(test)]
use tokio as _;
