//! Route definitions and router construction.

use std::path::Path;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::bootstrap::CorsConfig;
use crate::handlers;
use crate::pages;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// API routes without the `/api` prefix, for nesting under `/api`.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::check))
        // Collections
        .route(
            "/collections/{lang}/{folder}",
            get(handlers::collections::list),
        )
        // Admin
        .route("/admin/delete", delete(handlers::admin::delete))
        .route(
            "/admin/language-check",
            get(handlers::admin::language_check),
        )
        // Config files
        .route("/config-file/languages", get(handlers::config::languages))
        .route(
            "/config-file/languages.json",
            get(handlers::config::languages),
        )
        .route("/config-file/{*path}", get(handlers::config::file))
        // v1
        .route("/v1/config", get(handlers::config::languages))
        .route("/v1/sync-status", get(handlers::sync::status))
        .route("/v1/chat/message", post(handlers::chat::message))
}

/// Public content routes. They carry fixed CORS headers of their own.
pub(crate) fn content_routes() -> Router<AppState> {
    Router::new().route(
        "/api/content/{name}",
        get(handlers::content::get).options(handlers::content::preflight),
    )
}

fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(pages::login))
        .route("/admin", get(pages::dashboard))
        .route("/admin/collections", get(pages::collections))
        .route("/admin/users", get(pages::users))
}

/// Create the main router with API, content and page routes.
pub fn create_router(state: AppState, cors_config: &CorsConfig) -> Router {
    let cors = build_cors_layer(cors_config);

    Router::new()
        .nest("/api", api_routes().layer(cors))
        .merge(content_routes())
        .merge(page_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Create a router that also serves files from `static_dir` for any path
/// no route matches.
pub fn create_spa_router<P: AsRef<Path>>(
    state: AppState,
    static_dir: P,
    cors_config: &CorsConfig,
) -> Router {
    create_router(state, cors_config).fallback_service(ServeDir::new(static_dir.as_ref()))
}
