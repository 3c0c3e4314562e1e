//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `redis` or `reqwest` types in any signature
//! - Each port call is a single attempt against its collaborator

pub mod chat;
pub mod content_provider;
pub mod content_store;
pub mod sync;

use thiserror::Error;

pub use chat::{ChatError, ChatPort};
pub use content_provider::{ContentError, ContentProvider};
pub use content_store::ContentStore;
pub use sync::{SourceDocument, SourceFile, SyncError, SyncJob, SyncSnapshot, SyncSource};

/// Errors from the key-value store adapter.
///
/// Abstracts away client library details so services can handle store
/// failures uniformly.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Could not reach the store or the connection dropped.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The store rejected or failed a command.
    #[error("Command failed: {0}")]
    Command(String),

    /// A value could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes,
/// process exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (missing or invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Chat(#[from] ChatError),
}
