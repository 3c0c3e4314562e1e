//! Composition utilities for building store adapters.
//!
//! Construction only, no domain logic.

use std::path::Path;
use std::sync::Arc;

use hub_core::{ContentProvider, ContentStore, SyncSource};

use crate::{FsContentProvider, FsSyncSource, MemoryContentStore, RedisContentStore};

/// Factory for creating adapter instances behind their port traits.
pub struct StoreFactory;

impl StoreFactory {
    /// Connect to Redis when a URL is given, otherwise use an in-memory store.
    pub async fn content_store(redis_url: Option<&str>) -> anyhow::Result<Arc<dyn ContentStore>> {
        if let Some(url) = redis_url {
            let store = RedisContentStore::connect(url).await?;
            return Ok(Arc::new(store));
        }
        tracing::warn!(
            target: "hub.store",
            "No Redis URL configured, using in-memory content store"
        );
        Ok(Arc::new(MemoryContentStore::new()))
    }

    /// Static content provider rooted at `content_dir`.
    pub fn content_provider(content_dir: &Path) -> Arc<dyn ContentProvider> {
        Arc::new(FsContentProvider::new(content_dir))
    }

    /// Sync source rooted at `source_dir`.
    pub fn sync_source(source_dir: &Path) -> Arc<dyn SyncSource> {
        Arc::new(FsSyncSource::new(source_dir))
    }
}
