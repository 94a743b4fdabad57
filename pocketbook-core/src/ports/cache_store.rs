//! Cache store port - durable key-value persistence

use async_trait::async_trait;

/// Durable string key-value store
///
/// The offline-first cache behind every screen. Failure semantics follow the
/// store's callers, not the other way around: a failed read is a miss, a
/// failed write leaves the previous value in place, and both are logged by
/// the implementation rather than surfaced. There is exactly one conceptual
/// writer per key in normal use; concurrent writers race with
/// last-writer-wins.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Read the value for a key; `None` on miss or read failure
    async fn get(&self, key: &str) -> Option<String>;

    /// Write a value; on failure the store keeps its previous state
    async fn set(&self, key: &str, value: &str);

    /// Remove every key
    async fn clear(&self);
}
