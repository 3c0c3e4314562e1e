//! Sync job and sync source ports.

use async_trait::async_trait;
use thiserror::Error;

use super::StoreError;
use crate::domain::SyncResult;

/// Errors that abort a sync run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The source snapshot could not be produced.
    #[error("Sync source error: {0}")]
    Source(String),

    /// Writing to the store failed in a way the run cannot record.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A named JSON document from the source (config or collection).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub name: String,
    pub content: String,
}

/// A content file from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub lang: String,
    pub folder: String,
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Everything a source offers for one run.
///
/// `errors` carries entries the source could not read; the run records them
/// and continues.
#[derive(Debug, Clone, Default)]
pub struct SyncSnapshot {
    pub configs: Vec<SourceDocument>,
    pub collections: Vec<SourceDocument>,
    pub files: Vec<SourceFile>,
    pub errors: Vec<String>,
}

/// Where sync data comes from.
#[async_trait]
pub trait SyncSource: Send + Sync {
    /// Human-readable label identifying this source.
    fn label(&self) -> &str;

    async fn snapshot(&self) -> Result<SyncSnapshot, SyncError>;
}

/// The job invoked by the startup trigger.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SyncJob: Send + Sync {
    async fn perform_sync(&self) -> Result<SyncResult, SyncError>;
}
