#![deny(clippy::all)]

use async_trait::async_trait;
use shared::Result;
use std::time::Duration;

// Ports are the pluggable extension points for underlying store backends

/// Port for the remote key-value store the cache facade fronts.
#[async_trait]
pub trait KeyValueStore: Send + Sync + 'static {
    /// Liveness probe, issued once when a facade is constructed.
    async fn ping(&self) -> Result<()>;

    /// Store `value` under `key`, expiring after `ttl`. The value and its
    /// expiry must land atomically; the entry is never observable without one.
    async fn set_ex(&self, key: &str, value: String, ttl: Duration) -> Result<()>;

    /// Raw text for `key`, `None` when the key is absent or already expired.
    async fn get(&self, key: &str) -> Result<Option<String>>;
}
