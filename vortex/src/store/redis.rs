use crate::ports::KeyValueStore;
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use shared::{Error, Result};
use std::fmt;
use std::time::Duration;
use tracing::info;

/// Redis-backed store behind the [`KeyValueStore`] port.
///
/// Holds a single multiplexed `ConnectionManager`, cloned per call, so the
/// same store can be used concurrently by request handlers and the sync loop.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
    redis_url: String,
}

impl RedisStore {
    pub async fn connect(redis_url: &str) -> Result<Self> {
        let client =
            Client::open(redis_url).map_err(|e| Error::Store(format!("invalid redis url: {e}")))?;
        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| Error::Store(format!("redis connect: {e}")))?;
        info!("Redis connection manager initialized for {}", redis_url);
        Ok(Self {
            conn,
            redis_url: redis_url.to_string(),
        })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn ping(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let pong: redis::RedisResult<String> = redis::cmd("PING").query_async(&mut conn).await;
        pong.map(|_| ())
            .map_err(|e| Error::Store(format!("redis ping: {e}")))
    }

    async fn set_ex(&self, key: &str, value: String, ttl: Duration) -> Result<()> {
        let mut conn = self.conn.clone();
        let result: redis::RedisResult<()> = conn.set_ex(key, value, ttl.as_secs()).await;
        result.map_err(|e| Error::Store(format!("redis setex: {e}")))
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        conn.get::<_, Option<String>>(key)
            .await
            .map_err(|e| Error::Store(format!("redis get: {e}")))
    }
}

impl fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisStore")
            .field("redis_url", &self.redis_url)
            .finish()
    }
}
