use super::SyncJob;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Runs registered sync jobs on a fixed interval.
///
/// Each cycle invokes every job sequentially in registration order. A job
/// error is caught here, logged with the job's name, and stops neither the
/// remaining jobs of the cycle nor future cycles. The loop has no terminal
/// state of its own; it ends only when the handle signals shutdown, which
/// interrupts both a running cycle and the inter-cycle sleep.
pub struct SyncScheduler {
    jobs: Vec<Arc<dyn SyncJob>>,
    interval: Duration,
}

impl SyncScheduler {
    pub fn new(jobs: Vec<Arc<dyn SyncJob>>, interval: Duration) -> Self {
        Self { jobs, interval }
    }

    /// Spawns the background loop. The first cycle runs immediately.
    pub fn spawn(self) -> SchedulerHandle {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    _ = shutdown_rx.recv() => break,
                }
                tokio::select! {
                    _ = self.run_cycle() => {}
                    _ = shutdown_rx.recv() => break,
                }
            }
            info!("Sync scheduler stopped");
        });

        SchedulerHandle { shutdown_tx, task }
    }

    async fn run_cycle(&self) {
        for job in &self.jobs {
            match job.run().await {
                Ok(()) => debug!("Sync job '{}' completed", job.name()),
                Err(e) => warn!("Sync job '{}' failed: {e}", job.name()),
            }
        }
    }
}

/// Handle for stopping the background sync loop.
pub struct SchedulerHandle {
    shutdown_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl SchedulerHandle {
    /// Signals the loop to stop and waits for it to wind down.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(()).await;
        let _ = self.task.await;
    }
}
