//! Router wiring tests: health, content, collections, config and pages.

mod common;

use axum::http::{Method, Request, StatusCode, header};
use axum::body::Body;
use serde_json::json;

use common::{TestHub, body_bytes, body_json, get, languages_config};
use hub_core::{ContentStore, FileIdentity};

#[tokio::test]
async fn health_reports_app_name() {
    let hub = TestHub::new();
    let response = hub.send(get("/api/health")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["app"], "content-hub");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn content_collection_is_served_with_cache_headers() {
    let hub = TestHub::new();
    let response = hub.send(get("/api/content/skills")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, max-age=3600"
    );
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        body_json(response).await,
        json!([{"name": "Rust", "level": "advanced"}])
    );
}

#[tokio::test]
async fn missing_content_resource_is_500() {
    let hub = TestHub::new();
    let response = hub.send(get("/api/content/achievements")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["status"], 500);
    assert_eq!(body["error"], "Failed to load achievements");
}

#[tokio::test]
async fn unknown_content_category_is_404() {
    let hub = TestHub::new();
    let response = hub.send(get("/api/content/recipes")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn content_preflight_returns_allowed_methods() {
    let hub = TestHub::new();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/content/projects")
        .body(Body::empty())
        .unwrap();
    let response = hub.send(request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET, OPTIONS");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
}

#[tokio::test]
async fn empty_collection_lists_no_files() {
    let hub = TestHub::new();
    let response = hub.send(get("/api/collections/en/blog")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"lang": "en", "folder": "blog", "files": [], "count": 0})
    );
}

#[tokio::test]
async fn collection_lists_stored_files_in_order() {
    let hub = TestHub::new();
    for name in ["b.json", "a.json"] {
        let id = FileIdentity::new("en", "blog", name).unwrap();
        hub.store.put_file(&id, "{}").await.unwrap();
    }

    let body = body_json(hub.send(get("/api/collections/en/blog")).await).await;
    assert_eq!(body["files"], json!(["a.json", "b.json"]));
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn collection_segment_with_key_separator_is_400() {
    for uri in ["/api/collections/en:blog/x", "/api/collections/en/blog:x"] {
        let hub = TestHub::new();
        let response = hub.send(get(uri)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(hub.store.calls(), 0, "store touched for {uri}");
    }
}

#[tokio::test]
async fn collection_store_failure_is_500_with_details() {
    let hub = TestHub::with(
        common::CountingStore::failing(),
        common::ScriptedChat::replying("unused"),
    );
    let response = hub.send(get("/api/collections/en/blog")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Failed to fetch collection");
    assert!(body["details"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn languages_config_endpoints_are_byte_identical() {
    let hub = TestHub::new();
    let mut bodies = Vec::new();
    for uri in [
        "/api/config-file/languages",
        "/api/config-file/languages.json",
        "/api/v1/config",
    ] {
        let response = hub.send(get(uri)).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        bodies.push(body_bytes(response).await);
    }

    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[1], bodies[2]);
    assert_eq!(
        serde_json::from_slice::<serde_json::Value>(&bodies[0]).unwrap(),
        languages_config()
    );
}

#[tokio::test]
async fn unknown_config_file_is_404() {
    let hub = TestHub::new();
    let response = hub.send(get("/api/config-file/secrets/keys.json")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["status"], 404);
}

#[tokio::test]
async fn admin_pages_render_html() {
    let hub = TestHub::new();
    for uri in ["/login", "/admin", "/admin/collections", "/admin/users"] {
        let response = hub.send(get(uri)).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
        let page = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"), "{uri}");
    }
}

#[tokio::test]
async fn unknown_route_is_404() {
    let hub = TestHub::new();
    let response = hub.send(get("/api/nope")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
