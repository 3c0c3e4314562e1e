//! Content service - collections, file listings, deletes and config files.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{ContentCollection, FileIdentity, FileListing, validate_key_segment};
use crate::ports::{ContentProvider, ContentStore, CoreError};

/// Config file names that resolve to the languages configuration.
const LANGUAGES_CONFIG_PATHS: [&str; 2] = ["languages", "languages.json"];

/// Thin orchestrator over the content store and the static content provider.
pub struct ContentService {
    store: Arc<dyn ContentStore>,
    provider: Arc<dyn ContentProvider>,
}

impl ContentService {
    pub fn new(store: Arc<dyn ContentStore>, provider: Arc<dyn ContentProvider>) -> Self {
        Self { store, provider }
    }

    /// List files under `(lang, folder)`. Unknown folders list as empty.
    pub async fn list_files(&self, lang: &str, folder: &str) -> Result<FileListing, CoreError> {
        validate_key_segment("lang", lang)?;
        validate_key_segment("folder", folder)?;
        let files = self.store.get_file_list(lang, folder).await?;
        Ok(FileListing::new(lang.to_string(), folder.to_string(), files))
    }

    /// Delete a file. Identity is validated before the store is touched.
    pub async fn delete_file(
        &self,
        lang: Option<String>,
        folder: Option<String>,
        filename: Option<String>,
    ) -> Result<FileIdentity, CoreError> {
        let id = FileIdentity::from_parts(lang, folder, filename)?;
        self.store.delete_file(&id).await?;
        tracing::info!(target: "hub.store", file = %id, "Deleted content file");
        Ok(id)
    }

    /// Load one static collection.
    pub async fn collection(&self, collection: ContentCollection) -> Result<Value, CoreError> {
        Ok(self.provider.collection(collection).await?)
    }

    /// Load the languages configuration document.
    pub async fn languages_config(&self) -> Result<Value, CoreError> {
        Ok(self.provider.languages_config().await?)
    }

    /// Resolve a config file sub-path. Only the languages config is served.
    pub async fn config_file(&self, path: &str) -> Result<Value, CoreError> {
        let path = path.trim_matches('/');
        if LANGUAGES_CONFIG_PATHS.contains(&path) {
            return self.languages_config().await;
        }
        Err(CoreError::NotFound(format!("Config file not found: {path}")))
    }
}
