//! Redis implementation of the `ContentStore` port.

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::MultiplexedConnection;
use serde_json::Value;

use hub_core::keys;
use hub_core::{ContentStore, FileIdentity, StoreError};

use crate::codec;

fn map_error(err: redis::RedisError) -> StoreError {
    if err.is_io_error() || err.is_connection_dropped() || err.is_connection_refusal() {
        StoreError::Connection(err.to_string())
    } else {
        StoreError::Command(err.to_string())
    }
}

/// Redis-backed content store.
///
/// Holds one multiplexed connection, cloned per call. Folder listings are
/// sorted sets with a constant score, so members come back in lexicographic
/// order.
#[derive(Clone)]
pub struct RedisContentStore {
    conn: MultiplexedConnection,
}

impl RedisContentStore {
    /// Open a client and establish the multiplexed connection.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(url).map_err(map_error)?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(map_error)?;
        tracing::info!(target: "hub.store", "Connected to Redis");
        Ok(Self { conn })
    }
}

#[async_trait]
impl ContentStore for RedisContentStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn.get(key).await.map_err(map_error)?;
        Ok(raw.map(codec::decode))
    }

    async fn set(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        let text = codec::encode(value)?;
        let mut conn = self.conn.clone();
        let (): () = conn.set(key, text).await.map_err(map_error)?;
        Ok(())
    }

    async fn get_file_list(
        &self,
        lang: &str,
        folder: &str,
    ) -> Result<Option<Vec<String>>, StoreError> {
        let mut conn = self.conn.clone();
        let files: Vec<String> = conn
            .zrange(keys::file_list_key(lang, folder), 0, -1)
            .await
            .map_err(map_error)?;
        // A missing sorted set and an empty one are indistinguishable in Redis.
        Ok((!files.is_empty()).then_some(files))
    }

    async fn put_file(&self, id: &FileIdentity, payload: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        let (): () = redis::pipe()
            .atomic()
            .set(keys::file_key(id), payload)
            .ignore()
            .zadd(keys::file_list_key(id.lang(), id.folder()), id.filename(), 0)
            .ignore()
            .query_async(&mut conn)
            .await
            .map_err(map_error)?;
        Ok(())
    }

    async fn delete_file(&self, id: &FileIdentity) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        let (): () = redis::pipe()
            .atomic()
            .del(keys::file_key(id))
            .ignore()
            .zrem(keys::file_list_key(id.lang(), id.folder()), id.filename())
            .ignore()
            .query_async(&mut conn)
            .await
            .map_err(map_error)?;
        Ok(())
    }
}
