use crate::ports::KeyValueStore;
use crate::store::RedisStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::TtlSecs;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Outcome of a cache read.
///
/// `Miss` covers absent and expired keys alike; the store's own expiry is the
/// sole authority and the two are indistinguishable. `Unavailable` covers a
/// degraded facade as well as a per-call store error.
#[derive(Clone, Debug, PartialEq)]
pub enum CacheRead<T> {
    Hit(T),
    Miss,
    Unavailable,
}

impl<T> CacheRead<T> {
    /// Collapses to the plain optional contract: anything but a hit is `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            CacheRead::Hit(value) => Some(value),
            CacheRead::Miss | CacheRead::Unavailable => None,
        }
    }
}

/// Outcome of a cache write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheWrite {
    Stored,
    Unavailable,
}

impl CacheWrite {
    pub fn is_stored(self) -> bool {
        matches!(self, CacheWrite::Stored)
    }
}

/// Best-effort facade over the remote key-value store.
///
/// Construction probes the store once. If the probe fails the facade runs
/// degraded for its lifetime: every operation short-circuits to
/// `Unavailable` without touching the network, and the store is never
/// re-probed. On a healthy facade, individual operation failures are logged
/// and degrade that call only. `set` and `get` never return an error, so the
/// cache stays advisory and can never fail a caller's request path.
pub struct CacheFacade {
    store: Option<Arc<dyn KeyValueStore>>,
    default_ttl: Duration,
}

impl CacheFacade {
    /// Probe `store` and wire the facade to it. A failed probe drops the
    /// handle and yields a degraded facade.
    pub async fn new(store: Arc<dyn KeyValueStore>, default_ttl: Duration) -> Self {
        let store = match store.ping().await {
            Ok(()) => {
                info!("Connected to cache store");
                Some(store)
            }
            Err(e) => {
                warn!("Cache store unreachable, running degraded: {e}");
                None
            }
        };
        Self { store, default_ttl }
    }

    /// Facade over a Redis store at `redis_url`. A connection failure yields
    /// a degraded facade rather than an error.
    pub async fn connect(redis_url: &str, default_ttl: Duration) -> Self {
        match RedisStore::connect(redis_url).await {
            Ok(store) => Self::new(Arc::new(store), default_ttl).await,
            Err(e) => {
                warn!("Cache store unreachable, running degraded: {e}");
                Self {
                    store: None,
                    default_ttl,
                }
            }
        }
    }

    /// Health flag, written once at construction.
    pub fn is_connected(&self) -> bool {
        self.store.is_some()
    }

    /// Serialize `value` to JSON text and store it under `key` with an
    /// expiry of `ttl` (the configured default when `None`).
    pub async fn set<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
        ttl: Option<TtlSecs>,
    ) -> CacheWrite {
        let Some(store) = &self.store else {
            return CacheWrite::Unavailable;
        };
        let text = match serde_json::to_string(value) {
            Ok(text) => text,
            Err(e) => {
                warn!("Cache set skipped for key '{key}': {e}");
                return CacheWrite::Unavailable;
            }
        };
        let ttl = ttl.map_or(self.default_ttl, |t| Duration::from_secs(t.0));
        match store.set_ex(key, text, ttl).await {
            Ok(()) => CacheWrite::Stored,
            Err(e) => {
                warn!("Cache set failed for key '{key}': {e}");
                CacheWrite::Unavailable
            }
        }
    }

    /// Read and deserialize the value stored under `key`.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> CacheRead<T> {
        let Some(store) = &self.store else {
            return CacheRead::Unavailable;
        };
        match store.get(key).await {
            Ok(Some(text)) => match serde_json::from_str(&text) {
                Ok(value) => CacheRead::Hit(value),
                Err(e) => {
                    // The entry is unusable; it will age out by TTL.
                    warn!("Cache entry for key '{key}' is not valid JSON: {e}");
                    CacheRead::Miss
                }
            },
            Ok(None) => CacheRead::Miss,
            Err(e) => {
                warn!("Cache get failed for key '{key}': {e}");
                CacheRead::Unavailable
            }
        }
    }
}
