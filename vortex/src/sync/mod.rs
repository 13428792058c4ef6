mod jobs;
mod scheduler;

pub use jobs::{CoinsSync, NewsSync};
pub use scheduler::{SchedulerHandle, SyncScheduler};

use async_trait::async_trait;
use shared::Result;

/// A named recurring unit of work that refreshes cached data from an
/// upstream source. Jobs are registered once at scheduler construction and
/// invoked for the scheduler's lifetime.
#[async_trait]
pub trait SyncJob: Send + Sync + 'static {
    fn name(&self) -> &str;

    /// One synchronization pass. An error is logged by the scheduler and
    /// does not affect other jobs or later cycles.
    async fn run(&self) -> Result<()>;
}
