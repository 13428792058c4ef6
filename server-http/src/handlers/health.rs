use crate::models::{EndpointIndex, HealthResponse, IndexResponse};
use crate::state::AppState;
use axum::Json;
use axum::extract::State;

/// GET /
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Vortex Cache Service",
        endpoints: EndpointIndex {
            set_cache: "POST /cache/{key}",
            get_cache: "GET /cache/{key}",
        },
    })
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "OK".into(),
        cache_connected: state.cache.is_connected(),
    })
}
