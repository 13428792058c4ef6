use crate::models::{SetCacheQuery, SetCacheResponse};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::Value;
use shared::TtlSecs;
use tracing::info;
use vortex::facade::{CacheRead, CacheWrite};

/// POST /cache/:key
pub async fn set_cache(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<SetCacheQuery>,
    Json(value): Json<Value>,
) -> Result<Json<SetCacheResponse>, StatusCode> {
    info!("SET: key={}", key);

    // The store rejects a non-positive expiry; fail fast at the boundary.
    if query.ttl == Some(0) {
        return Err(StatusCode::BAD_REQUEST);
    }

    match state.cache.set(&key, &value, query.ttl.map(TtlSecs)).await {
        CacheWrite::Stored => Ok(Json(SetCacheResponse { ok: true })),
        CacheWrite::Unavailable => Err(StatusCode::SERVICE_UNAVAILABLE),
    }
}

/// GET /cache/:key
pub async fn get_cache(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    info!("GET: key={}", key);

    match state.cache.get::<Value>(&key).await {
        CacheRead::Hit(value) => Ok(Json(value)),
        CacheRead::Miss => Err(StatusCode::NOT_FOUND),
        CacheRead::Unavailable => Err(StatusCode::SERVICE_UNAVAILABLE),
    }
}
