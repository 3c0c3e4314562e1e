//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. All concrete implementations are instantiated here.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use hub_core::{ChatPort, ContentSync, HubCore, SyncJob, SyncTrigger, TriggerOutcome};
use hub_inference::{ChatClientConfig, OpenAiChatClient};
use hub_store::StoreFactory;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

impl CorsConfig {
    /// Parse a comma separated origin list. Blank input allows all origins.
    pub fn from_origin_list(list: &str) -> Self {
        let origins: Vec<String> = list
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();
        if origins.is_empty() {
            Self::AllowAll
        } else {
            Self::AllowOrigins(origins)
        }
    }
}

/// Server configuration for the web adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Redis connection URL. `None` selects the in-memory store.
    pub redis_url: Option<String>,
    /// Root of the static content (`content/` and `config/`).
    pub content_dir: PathBuf,
    /// Directory the sync job reads from. Defaults to `{content_dir}/sync`.
    pub sync_source_dir: Option<PathBuf>,
    /// Run the sync job once when the server starts.
    pub sync_on_startup: bool,
    /// Optional directory served for unmatched paths.
    pub static_dir: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Chat backend client settings.
    pub chat: ChatClientConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            redis_url: None,
            content_dir: PathBuf::from("./data"),
            sync_source_dir: None,
            sync_on_startup: true,
            static_dir: None,
            cors: CorsConfig::default(),
            chat: ChatClientConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(port) = get("HUB_PORT") {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid HUB_PORT: {port}"))?;
        }
        config.redis_url = get("REDIS_URL");
        if let Some(dir) = get("HUB_CONTENT_DIR") {
            config.content_dir = PathBuf::from(dir);
        }
        config.sync_source_dir = get("HUB_SYNC_SOURCE_DIR").map(PathBuf::from);
        if let Some(flag) = get("HUB_SYNC_ON_STARTUP") {
            config.sync_on_startup = parse_flag(&flag)
                .with_context(|| format!("Invalid HUB_SYNC_ON_STARTUP: {flag}"))?;
        }
        config.static_dir = get("HUB_STATIC_DIR").map(PathBuf::from);
        if let Some(origins) = get("HUB_CORS_ORIGINS") {
            config.cors = CorsConfig::from_origin_list(&origins);
        }

        let mut chat = ChatClientConfig::new().with_optional_api_key(get("CHAT_API_KEY"));
        if let Some(url) = get("CHAT_API_URL") {
            chat = chat.with_base_url(url);
        }
        if let Some(model) = get("CHAT_MODEL") {
            chat = chat.with_model(model);
        }
        if let Some(secs) = get("CHAT_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("Invalid CHAT_TIMEOUT_SECS: {secs}"))?;
            chat = chat.with_timeout(Duration::from_secs(secs));
        }
        if let Some(prompt) = get("CHAT_SYSTEM_PROMPT") {
            chat = chat.with_system_prompt(prompt);
        }
        config.chat = chat;

        Ok(config)
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub const fn with_sync_on_startup(mut self, enabled: bool) -> Self {
        self.sync_on_startup = enabled;
        self
    }

    /// Set the static directory served for unmatched paths.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// Directory the sync job reads its snapshot from.
    pub fn resolved_sync_source_dir(&self) -> PathBuf {
        self.sync_source_dir
            .clone()
            .unwrap_or_else(|| self.content_dir.join("sync"))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Application context for the web adapter.
///
/// Holds every service handle the handlers need. Immutable after
/// construction apart from the trigger's flag.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<HubCore>,
    /// Job run by the startup trigger.
    pub sync_job: Arc<dyn SyncJob>,
    /// Process-scoped at-most-once guard for the startup sync.
    pub trigger: Arc<SyncTrigger>,
    /// Whether the startup sync is enabled for this process.
    pub sync_on_startup: bool,
}

impl AxumContext {
    pub fn new(core: Arc<HubCore>, sync_job: Arc<dyn SyncJob>, sync_on_startup: bool) -> Self {
        Self {
            core,
            sync_job,
            trigger: Arc::new(SyncTrigger::new()),
            sync_on_startup,
        }
    }

    /// Fire the startup sync. Later calls are no-ops.
    pub async fn run_startup_sync(&self) -> TriggerOutcome {
        self.trigger
            .fire(self.sync_on_startup, self.sync_job.as_ref())
            .await
    }
}

/// Bootstrap the server with all services.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let sync_dir = config.resolved_sync_source_dir();
    tracing::info!(
        target: "hub.http",
        content_dir = %config.content_dir.display(),
        sync_source_dir = %sync_dir.display(),
        redis = config.redis_url.is_some(),
        sync_on_startup = config.sync_on_startup,
        "Bootstrapping content hub"
    );

    warn_if_missing("Content", &config.content_dir);
    if config.sync_on_startup {
        warn_if_missing("Sync source", &sync_dir);
    }

    // 1. Key-value store
    let store = StoreFactory::content_store(config.redis_url.as_deref())
        .await
        .context("Failed to initialize content store")?;

    // 2. Static content and chat backend
    let provider = StoreFactory::content_provider(&config.content_dir);
    let chat: Arc<dyn ChatPort> = Arc::new(
        OpenAiChatClient::new(config.chat.clone()).context("Failed to build chat client")?,
    );

    // 3. Sync job over the configured source
    let sync_job: Arc<dyn SyncJob> = Arc::new(ContentSync::new(
        Arc::clone(&store),
        StoreFactory::sync_source(&sync_dir),
    ));

    let core = Arc::new(HubCore::new(store, provider, chat));
    Ok(AxumContext::new(core, sync_job, config.sync_on_startup))
}

/// Start the web server on the configured port.
///
/// The startup sync runs in the background so a slow source never delays
/// the listener.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = Arc::new(bootstrap(&config).await?);

    tokio::spawn({
        let ctx = Arc::clone(&ctx);
        async move {
            ctx.run_startup_sync().await;
        }
    });

    let app = match config.static_dir.as_deref() {
        Some(static_dir) => {
            info!(target: "hub.http", "Serving static assets from: {}", static_dir.display());
            crate::routes::create_spa_router(ctx, static_dir, &config.cors)
        }
        None => crate::routes::create_router(ctx, &config.cors),
    };

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(target: "hub.http", "content-hub listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

fn warn_if_missing(label: &str, dir: &Path) {
    if !dir.is_dir() {
        tracing::warn!(target: "hub.http", dir = %dir.display(), "{label} directory does not exist");
    }
}
