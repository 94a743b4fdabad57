//! In-memory test doubles for the ports

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::Snapshot;
use crate::ports::{CacheStore, RemoteSource};

/// In-memory [`CacheStore`] for unit tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key directly, bypassing the trait
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    async fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

/// Scripted [`RemoteSource`] returning a fixed snapshot (or nothing)
///
/// Counts fetches so tests can assert the one-time-seed behavior.
#[derive(Debug)]
pub struct FixedRemote {
    snapshot: Option<Snapshot>,
    fetches: AtomicUsize,
}

impl FixedRemote {
    pub fn new(snapshot: Option<Snapshot>) -> Self {
        Self {
            snapshot,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Remote that fails every fetch
    pub fn unreachable() -> Self {
        Self::new(None)
    }

    /// How many times `fetch_snapshot` was called
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteSource for FixedRemote {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn fetch_snapshot(&self) -> Option<Snapshot> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.snapshot.clone()
    }
}
