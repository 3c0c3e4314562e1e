//! In-memory implementation of the `ContentStore` port.
//!
//! Used when no Redis URL is configured, and as the store in tests.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use hub_core::keys;
use hub_core::{ContentStore, FileIdentity, StoreError};

use crate::codec;

#[derive(Default)]
struct Inner {
    values: HashMap<String, String>,
    lists: BTreeMap<String, BTreeSet<String>>,
}

/// Process-local content store with the same key layout as Redis.
#[derive(Default)]
pub struct MemoryContentStore {
    inner: RwLock<Inner>,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a raw key is present.
    pub async fn contains_key(&self, key: &str) -> bool {
        self.inner.read().await.values.contains_key(key)
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.values.get(key).cloned().map(codec::decode))
    }

    async fn set(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        let text = codec::encode(value)?;
        self.inner.write().await.values.insert(key.to_string(), text);
        Ok(())
    }

    async fn get_file_list(
        &self,
        lang: &str,
        folder: &str,
    ) -> Result<Option<Vec<String>>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .lists
            .get(&keys::file_list_key(lang, folder))
            .map(|set| set.iter().cloned().collect()))
    }

    async fn put_file(&self, id: &FileIdentity, payload: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.values.insert(keys::file_key(id), payload.to_string());
        inner
            .lists
            .entry(keys::file_list_key(id.lang(), id.folder()))
            .or_default()
            .insert(id.filename().to_string());
        Ok(())
    }

    async fn delete_file(&self, id: &FileIdentity) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.values.remove(&keys::file_key(id));
        // Redis drops a sorted set once its last member is removed
        let list_key = keys::file_list_key(id.lang(), id.folder());
        if let Some(set) = inner.lists.get_mut(&list_key) {
            set.remove(id.filename());
            if set.is_empty() {
                inner.lists.remove(&list_key);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn id(filename: &str) -> FileIdentity {
        FileIdentity::new("en", "blog", filename).unwrap()
    }

    #[tokio::test]
    async fn test_file_list_is_ordered() {
        let store = MemoryContentStore::new();
        for name in ["c.json", "a.json", "b.json"] {
            store.put_file(&id(name), "{}").await.unwrap();
        }
        let files = store.get_file_list("en", "blog").await.unwrap().unwrap();
        assert_eq!(files, ["a.json", "b.json", "c.json"]);
    }

    #[tokio::test]
    async fn test_unknown_folder_is_none() {
        let store = MemoryContentStore::new();
        assert_eq!(store.get_file_list("en", "nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_removes_payload_and_entry() {
        let store = MemoryContentStore::new();
        store.put_file(&id("a.json"), r#"{"t":1}"#).await.unwrap();
        assert_eq!(
            store.get("cms:file:en:blog:a.json").await.unwrap(),
            Some(json!({"t": 1}))
        );

        store.delete_file(&id("a.json")).await.unwrap();
        assert!(!store.contains_key("cms:file:en:blog:a.json").await);
        assert_eq!(store.get_file_list("en", "blog").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_deleting_last_file_drops_list_key() {
        let store = MemoryContentStore::new();
        store.put_file(&id("a.json"), "{}").await.unwrap();
        store.put_file(&id("b.json"), "{}").await.unwrap();

        store.delete_file(&id("a.json")).await.unwrap();
        assert_eq!(
            store.get_file_list("en", "blog").await.unwrap(),
            Some(vec!["b.json".to_string()])
        );

        store.delete_file(&id("b.json")).await.unwrap();
        assert!(store.inner.read().await.lists.is_empty());
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let store = MemoryContentStore::new();
        store.set("k", &json!(1)).await.unwrap();
        store.set("k", &json!(2)).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(json!(2)));
    }
}
