//! Content sync job - copies a source snapshot into the store.
//!
//! Configs and collections are validated as JSON before writing. Files are
//! stored as UTF-8 text, except images which are stored base64-encoded.
//! A failing entry is recorded in the result and the run continues; only a
//! failure to read the source or to record the result aborts the run.

use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::domain::{FileIdentity, SyncResult};
use crate::keys;
use crate::ports::{
    ContentStore, SourceDocument, SourceFile, StoreError, SyncError, SyncJob, SyncSource,
};

const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "svg"];

fn is_image(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .is_some_and(|(_, ext)| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

enum FileKind {
    Image,
    Text,
}

/// The sync job wired at startup.
pub struct ContentSync {
    store: Arc<dyn ContentStore>,
    source: Arc<dyn SyncSource>,
}

impl ContentSync {
    pub fn new(store: Arc<dyn ContentStore>, source: Arc<dyn SyncSource>) -> Self {
        Self { store, source }
    }

    async fn write_document(&self, key: String, doc: &SourceDocument) -> Result<(), String> {
        let value: Value = serde_json::from_str(&doc.content)
            .map_err(|e| format!("{}: invalid JSON: {e}", doc.name))?;
        self.store
            .set(&key, &value)
            .await
            .map_err(|e| format!("{}: {e}", doc.name))
    }

    async fn write_file(&self, file: &SourceFile) -> Result<FileKind, String> {
        let id = FileIdentity::new(&file.lang, &file.folder, &file.filename)
            .map_err(|e| e.to_string())?;

        let (kind, payload) = if is_image(&file.filename) {
            (FileKind::Image, STANDARD.encode(&file.bytes))
        } else {
            let text = String::from_utf8(file.bytes.clone())
                .map_err(|_| format!("{id}: not valid UTF-8"))?;
            (FileKind::Text, text)
        };

        self.store
            .put_file(&id, &payload)
            .await
            .map_err(|e| format!("{id}: {e}"))?;
        Ok(kind)
    }
}

#[async_trait]
impl SyncJob for ContentSync {
    async fn perform_sync(&self) -> Result<SyncResult, SyncError> {
        tracing::info!(target: "hub.sync", source = self.source.label(), "Reading sync source");
        let snapshot = self.source.snapshot().await?;

        let mut result = SyncResult::started_now();
        result.errors.extend(snapshot.errors);

        for doc in &snapshot.configs {
            match self.write_document(keys::config_key(&doc.name), doc).await {
                Ok(()) => result.configs += 1,
                Err(e) => result.errors.push(e),
            }
        }

        for doc in &snapshot.collections {
            match self.write_document(keys::collection_key(&doc.name), doc).await {
                Ok(()) => result.collections += 1,
                Err(e) => result.errors.push(e),
            }
        }

        for file in &snapshot.files {
            match self.write_file(file).await {
                Ok(FileKind::Image) => result.images += 1,
                Ok(FileKind::Text) => result.files += 1,
                Err(e) => result.errors.push(e),
            }
        }

        for error in &result.errors {
            tracing::warn!(target: "hub.sync", error = %error, "Sync entry failed");
        }

        let record = serde_json::to_value(&result)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.store.set(keys::SYNC_LAST_RESULT, &record).await?;

        tracing::info!(
            target: "hub.sync",
            configs = result.configs,
            collections = result.collections,
            images = result.images,
            files = result.files,
            errors = result.errors.len(),
            "Sync finished"
        );
        Ok(result)
    }
}
