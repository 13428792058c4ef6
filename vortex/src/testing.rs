//! Test doubles shared by the unit tests.

use crate::ports::KeyValueStore;
use crate::sync::SyncJob;
use async_trait::async_trait;
use shared::{Error, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// In-memory stand-in for the remote store, with switchable failure modes.
pub struct MemoryStore {
    entries: Mutex<HashMap<String, (String, Instant)>>,
    reachable: bool,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            reachable: true,
            failing: AtomicBool::new(false),
        }
    }

    /// A store whose liveness probe always fails.
    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            ..Self::new()
        }
    }

    /// Makes every subsequent operation fail until cleared.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_failing(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(Error::Store("injected failure".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn ping(&self) -> Result<()> {
        if self.reachable {
            Ok(())
        } else {
            Err(Error::Store("connection refused".into()))
        }
    }

    async fn set_ex(&self, key: &str, value: String, ttl: Duration) -> Result<()> {
        self.check_failing()?;
        let deadline = Instant::now() + ttl;
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value, deadline));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.check_failing()?;
        let mut entries = self.entries.lock().unwrap();
        let expired =
            matches!(entries.get(key), Some((_, deadline)) if *deadline <= Instant::now());
        if expired {
            entries.remove(key);
            return Ok(None);
        }
        Ok(entries.get(key).map(|(value, _)| value.clone()))
    }
}

/// Job that counts its invocations, optionally recording them in a journal.
pub struct CountingJob {
    name: &'static str,
    runs: AtomicUsize,
    journal: Option<Arc<Mutex<Vec<&'static str>>>>,
}

impl CountingJob {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            runs: AtomicUsize::new(0),
            journal: None,
        }
    }

    pub fn with_journal(name: &'static str, journal: Arc<Mutex<Vec<&'static str>>>) -> Self {
        Self {
            journal: Some(journal),
            ..Self::new(name)
        }
    }

    pub fn runs(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SyncJob for CountingJob {
    fn name(&self) -> &str {
        self.name
    }

    async fn run(&self) -> Result<()> {
        self.runs.fetch_add(1, Ordering::SeqCst);
        if let Some(journal) = &self.journal {
            journal.lock().unwrap().push(self.name);
        }
        Ok(())
    }
}

/// Job that always fails, counting its attempts.
pub struct FailingJob {
    runs: AtomicUsize,
}

impl FailingJob {
    pub fn new() -> Self {
        Self {
            runs: AtomicUsize::new(0),
        }
    }

    pub fn runs(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SyncJob for FailingJob {
    fn name(&self) -> &str {
        "failing"
    }

    async fn run(&self) -> Result<()> {
        self.runs.fetch_add(1, Ordering::SeqCst);
        Err(Error::Sync("refusing to sync".into()))
    }
}
