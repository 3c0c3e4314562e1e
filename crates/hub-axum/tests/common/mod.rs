//! Shared fixtures for the router tests.
//!
//! Every test builds its own context: a counting in-memory store, static
//! content in a temp directory and a scripted chat backend.

#![allow(dead_code)]

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use hub_axum::{AppState, AxumContext, CorsConfig, create_router};
use hub_core::{
    ChatError, ChatMessage, ChatPort, ContentStore, ContentSync, FileIdentity, HubCore, StoreError,
    SyncJob,
};
use hub_store::{FsContentProvider, FsSyncSource, MemoryContentStore};

/// Store wrapper that counts calls and can be switched to fail.
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryContentStore,
    pub calls: AtomicUsize,
    pub fail: bool,
}

impl CountingStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(StoreError::Connection("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ContentStore for CountingStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        self.enter()?;
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        self.enter()?;
        self.inner.set(key, value).await
    }

    async fn get_file_list(
        &self,
        lang: &str,
        folder: &str,
    ) -> Result<Option<Vec<String>>, StoreError> {
        self.enter()?;
        self.inner.get_file_list(lang, folder).await
    }

    async fn put_file(&self, id: &FileIdentity, payload: &str) -> Result<(), StoreError> {
        self.enter()?;
        self.inner.put_file(id, payload).await
    }

    async fn delete_file(&self, id: &FileIdentity) -> Result<(), StoreError> {
        self.enter()?;
        self.inner.delete_file(id).await
    }
}

/// Chat backend that records every conversation and replies with a
/// fixed string, or fails when `reply` is `None`.
#[derive(Default)]
pub struct ScriptedChat {
    pub reply: Option<String>,
    pub seen: Mutex<Vec<Vec<ChatMessage>>>,
    pub contexts: Mutex<Vec<Option<Value>>>,
}

impl ScriptedChat {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            ..Self::default()
        }
    }

    pub fn conversations(&self) -> Vec<Vec<ChatMessage>> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatPort for ScriptedChat {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        context: Option<&Value>,
    ) -> Result<String, ChatError> {
        self.seen.lock().unwrap().push(messages.to_vec());
        self.contexts.lock().unwrap().push(context.cloned());
        self.reply
            .clone()
            .ok_or_else(|| ChatError::Unavailable("upstream exploded with api key sk-secret".into()))
    }
}

pub fn languages_config() -> Value {
    json!({
        "defaultLanguage": "en",
        "languages": [
            {"code": "en", "name": "English", "enabled": true},
            {"code": "fr", "name": "Français", "enabled": true}
        ],
        "requiredFolders": ["blog"]
    })
}

fn write_json(path: &Path, value: &Value) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

/// Everything a test needs to drive the router and inspect collaborators.
pub struct TestHub {
    pub dir: TempDir,
    pub store: Arc<CountingStore>,
    pub chat: Arc<ScriptedChat>,
    pub state: AppState,
}

impl TestHub {
    pub fn new() -> Self {
        Self::with(CountingStore::default(), ScriptedChat::replying("Hello from the assistant"))
    }

    pub fn with(store: CountingStore, chat: ScriptedChat) -> Self {
        let dir = TempDir::new().unwrap();
        write_json(&dir.path().join("config/languages.json"), &languages_config());
        write_json(
            &dir.path().join("content/skills.json"),
            &json!([{"name": "Rust", "level": "advanced"}]),
        );
        write_json(
            &dir.path().join("content/projects.json"),
            &json!([{"title": "Content Hub"}]),
        );

        let store = Arc::new(store);
        let chat = Arc::new(chat);
        let sync_source = Arc::new(FsSyncSource::new(dir.path().join("sync")));
        let sync_job: Arc<dyn SyncJob> = Arc::new(ContentSync::new(
            Arc::clone(&store) as Arc<dyn ContentStore>,
            sync_source,
        ));
        let core = Arc::new(HubCore::new(
            Arc::clone(&store) as Arc<dyn ContentStore>,
            Arc::new(FsContentProvider::new(dir.path())),
            Arc::clone(&chat) as Arc<dyn ChatPort>,
        ));
        let state = Arc::new(AxumContext::new(core, sync_job, true));

        Self {
            dir,
            store,
            chat,
            state,
        }
    }

    pub fn router(&self) -> Router {
        create_router(Arc::clone(&self.state), &CorsConfig::AllowAll)
    }

    pub fn write_sync_file(&self, relative: &str, contents: &str) {
        let path = self.dir.path().join("sync").join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router().oneshot(request).await.unwrap()
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
