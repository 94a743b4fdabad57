//! File-backed cache store
//!
//! Persists the whole key-value map as one JSON object in `cache.json` under
//! the app directory. Reads always go to disk; writes are read-modify-write
//! serialized by an in-process mutex. Two processes racing on the file are
//! last-writer-wins, which matches the single-writer model the store is
//! specified for.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::warn;

use crate::domain::result::{Error, Result};
use crate::ports::CacheStore;

const CACHE_FILENAME: &str = "cache.json";

/// JSON-file-backed implementation of [`CacheStore`]
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Create a store rooted at the given app directory
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(CACHE_FILENAME),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_map(&self) -> Result<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| Error::storage(e.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(Error::storage(e.to_string())),
        }
    }

    async fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        let content = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, content)
            .await
            .map_err(|e| Error::storage(e.to_string()))
    }

    async fn try_get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map().await?.get(key).cloned())
    }

    async fn try_set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map).await
    }

    async fn try_clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::storage(e.to_string())),
        }
    }
}

#[async_trait]
impl CacheStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        match self.try_get(key).await {
            Ok(value) => value,
            Err(e) => {
                // A failed read is a cache miss
                warn!(key, error = %e, "cache read failed, treating as miss");
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.try_set(key, value).await {
            // The store keeps its previous state
            warn!(key, error = %e, "cache write failed, previous value kept");
        }
    }

    async fn clear(&self) {
        if let Err(e) = self.try_clear().await {
            warn!(error = %e, "cache clear failed");
        }
    }
}
