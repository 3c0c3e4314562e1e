//! Filesystem implementation of the `ContentProvider` port.
//!
//! Layout under the content root:
//!
//! ```text
//! <root>/content/<collection>.json
//! <root>/config/languages.json
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use hub_core::{ContentCollection, ContentError, ContentProvider};

/// Loads static JSON resources from a content directory on every call.
#[derive(Debug, Clone)]
pub struct FsContentProvider {
    root: PathBuf,
}

impl FsContentProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn collection_path(&self, collection: ContentCollection) -> PathBuf {
        self.root
            .join("content")
            .join(format!("{}.json", collection.as_str()))
    }

    fn languages_path(&self) -> PathBuf {
        self.root.join("config").join("languages.json")
    }

    async fn load(path: &Path) -> Result<Value, ContentError> {
        let text = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ContentError::NotFound(path.display().to_string())
            } else {
                ContentError::Io(format!("{}: {e}", path.display()))
            }
        })?;
        serde_json::from_str(&text)
            .map_err(|e| ContentError::Parse(format!("{}: {e}", path.display())))
    }
}

#[async_trait]
impl ContentProvider for FsContentProvider {
    async fn collection(&self, collection: ContentCollection) -> Result<Value, ContentError> {
        Self::load(&self.collection_path(collection)).await
    }

    async fn languages_config(&self) -> Result<Value, ContentError> {
        Self::load(&self.languages_path()).await
    }
}
