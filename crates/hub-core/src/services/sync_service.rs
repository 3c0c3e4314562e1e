//! Sync status lookup.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::SyncResult;
use crate::keys;
use crate::ports::{ContentStore, CoreError, StoreError};

pub struct SyncService {
    store: Arc<dyn ContentStore>,
}

impl SyncService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// The stored last sync result, verbatim, or a zero-valued placeholder
    /// when no sync has been recorded.
    pub async fn last_result(&self) -> Result<Value, CoreError> {
        match self.store.get(keys::SYNC_LAST_RESULT).await? {
            Some(stored) => Ok(stored),
            None => serde_json::to_value(SyncResult::never_run())
                .map_err(|e| CoreError::Store(StoreError::Serialization(e.to_string()))),
        }
    }
}
