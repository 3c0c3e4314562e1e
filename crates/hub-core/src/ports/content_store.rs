//! Key-value content store port.
//!
//! This port defines the typed accessors the hub needs from the external
//! key-value store. Implementations handle connection setup, key layout
//! (see [`crate::keys`]) and encoding internally.

use async_trait::async_trait;
use serde_json::Value;

use super::StoreError;
use crate::domain::FileIdentity;

/// Typed operations over the external key-value store.
///
/// # Design Rules
///
/// - No client library types in signatures
/// - One attempt per call; failures propagate as [`StoreError`]
/// - Last write wins, no transactions
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Read a key. Stored text that is not JSON comes back as a JSON string.
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Write a JSON value under a key, replacing any previous value.
    async fn set(&self, key: &str, value: &Value) -> Result<(), StoreError>;

    /// Ordered filenames under `(lang, folder)`, or `None` if the folder is unknown.
    async fn get_file_list(
        &self,
        lang: &str,
        folder: &str,
    ) -> Result<Option<Vec<String>>, StoreError>;

    /// Store a file payload and index it in its folder list.
    async fn put_file(&self, id: &FileIdentity, payload: &str) -> Result<(), StoreError>;

    /// Remove a file payload and its folder list entry.
    async fn delete_file(&self, id: &FileIdentity) -> Result<(), StoreError>;
}
