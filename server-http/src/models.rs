use serde::{Deserialize, Serialize};

// === Cache Operation Models ===

#[derive(Deserialize)]
pub struct SetCacheQuery {
    #[serde(default)]
    pub ttl: Option<u64>,
}

#[derive(Serialize)]
pub struct SetCacheResponse {
    pub ok: bool,
}

// === Service Models ===

#[derive(Serialize)]
pub struct HealthResponse {
    pub message: String,
    pub cache_connected: bool,
}

#[derive(Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub endpoints: EndpointIndex,
}

#[derive(Serialize)]
pub struct EndpointIndex {
    pub set_cache: &'static str,
    pub get_cache: &'static str,
}
