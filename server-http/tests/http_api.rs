//! Tests for the HTTP cache surface
//!
//! Drives the router directly against a facade whose store is unreachable,
//! checking the degradation mappings the handlers promise.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use server_http::{AppState, build_router};
use shared::config::Config;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use vortex::facade::CacheFacade;

fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        http_port: 0,
        redis_url: "not-a-redis-url".to_string(),
        default_ttl_secs: 300,
        sync_interval_secs: 300,
        allowed_origins: vec!["*".to_string()],
    }
}

async fn degraded_app() -> Router {
    let config = test_config();
    let cache = Arc::new(
        CacheFacade::connect(
            &config.redis_url,
            Duration::from_secs(config.default_ttl_secs),
        )
        .await,
    );
    assert!(!cache.is_connected());
    build_router(AppState::new(cache), &config)
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn index_lists_the_cache_endpoints() {
    let router = degraded_app().await;

    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Vortex Cache Service");
    assert_eq!(json["endpoints"]["set_cache"], "POST /cache/{key}");
    assert_eq!(json["endpoints"]["get_cache"], "GET /cache/{key}");
}

#[tokio::test]
async fn health_reports_the_cache_connection_state() {
    let router = degraded_app().await;

    let response = router
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "OK");
    assert_eq!(json["cache_connected"], false);
}

#[tokio::test]
async fn set_degrades_to_service_unavailable() {
    let router = degraded_app().await;

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/cache/coins:btc")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"price": 42.5}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn get_degrades_to_service_unavailable() {
    let router = degraded_app().await;

    let response = router
        .oneshot(
            Request::builder()
                .uri("/cache/coins:btc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn zero_ttl_is_rejected() {
    let router = degraded_app().await;

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/cache/coins:btc?ttl=0")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"price": 42.5}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
