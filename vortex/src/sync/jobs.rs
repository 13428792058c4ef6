use super::SyncJob;
use crate::facade::CacheFacade;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use shared::Result;
use std::sync::Arc;
use tracing::info;

// The registered jobs. The upstream fetch itself is not wired in yet; a run
// logs and stamps a status marker through the cache facade, which is where a
// fetch would publish its refreshed data.

/// Refreshes cached market data for tracked coins.
pub struct CoinsSync {
    cache: Arc<CacheFacade>,
}

impl CoinsSync {
    pub fn new(cache: Arc<CacheFacade>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl SyncJob for CoinsSync {
    fn name(&self) -> &str {
        "coins"
    }

    async fn run(&self) -> Result<()> {
        info!("Syncing coins data");
        let marker = json!({"job": "coins", "synced_at": Utc::now().to_rfc3339()});
        self.cache.set("sync:coins:status", &marker, None).await;
        Ok(())
    }
}

/// Refreshes cached news articles.
pub struct NewsSync {
    cache: Arc<CacheFacade>,
}

impl NewsSync {
    pub fn new(cache: Arc<CacheFacade>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl SyncJob for NewsSync {
    fn name(&self) -> &str {
        "news"
    }

    async fn run(&self) -> Result<()> {
        info!("Syncing news data");
        let marker = json!({"job": "news", "synced_at": Utc::now().to_rfc3339()});
        self.cache.set("sync:news:status", &marker, None).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facade::CacheRead;
    use crate::testing::MemoryStore;
    use serde_json::Value;
    use std::time::Duration;

    async fn cache(store: Arc<MemoryStore>) -> Arc<CacheFacade> {
        Arc::new(CacheFacade::new(store, Duration::from_secs(300)).await)
    }

    #[tokio::test]
    async fn coins_sync_stamps_its_status_marker() {
        let cache = cache(Arc::new(MemoryStore::new())).await;
        let job = CoinsSync::new(cache.clone());
        assert_eq!(job.name(), "coins");

        job.run().await.unwrap();

        let CacheRead::Hit(marker) = cache.get::<Value>("sync:coins:status").await else {
            panic!("marker not written");
        };
        assert_eq!(marker["job"], "coins");
    }

    #[tokio::test]
    async fn news_sync_stamps_its_status_marker() {
        let cache = cache(Arc::new(MemoryStore::new())).await;
        let job = NewsSync::new(cache.clone());
        assert_eq!(job.name(), "news");

        job.run().await.unwrap();

        let CacheRead::Hit(marker) = cache.get::<Value>("sync:news:status").await else {
            panic!("marker not written");
        };
        assert_eq!(marker["job"], "news");
    }

    #[tokio::test]
    async fn jobs_tolerate_a_degraded_cache() {
        let cache = cache(Arc::new(MemoryStore::unreachable())).await;

        // The cache is advisory; a degraded facade must not fail the job.
        CoinsSync::new(cache.clone()).run().await.unwrap();
        NewsSync::new(cache).run().await.unwrap();
    }
}
