//! Remote snapshot source port

use async_trait::async_trait;

use crate::domain::Snapshot;

/// Remote snapshot source
///
/// Implementations fetch the snapshot document (user, cards, categorized
/// transactions) from an external endpoint. A single attempt per call; any
/// transport or parse failure is logged by the implementation and surfaces
/// as `None`, never as a panic or error. Callers degrade to cached data.
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Source name (e.g., "jsonbin"), for logs and sync output
    fn name(&self) -> &str;

    /// Fetch the current snapshot, or `None` on any failure
    async fn fetch_snapshot(&self) -> Option<Snapshot>;
}
