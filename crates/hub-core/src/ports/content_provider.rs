//! Static content provider port.
//!
//! Static JSON resources (content collections, the languages configuration)
//! are loaded explicitly through this port so tests can substitute them.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::ContentCollection;

/// Errors raised while loading a static resource.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The resource does not exist.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The resource exists but could not be read.
    #[error("Failed to read resource: {0}")]
    Io(String),

    /// The resource is not valid JSON.
    #[error("Invalid JSON in resource: {0}")]
    Parse(String),
}

#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Load one static content collection.
    async fn collection(&self, collection: ContentCollection) -> Result<Value, ContentError>;

    /// Load the languages configuration document.
    async fn languages_config(&self) -> Result<Value, ContentError>;
}
