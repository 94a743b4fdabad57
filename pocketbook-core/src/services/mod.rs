//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod onboarding;
mod status;
mod sync;
mod transfer;
mod wallet;

pub use onboarding::{OnboardingService, ONBOARDING_KEY};
pub use status::{StatusService, StatusSummary};
pub use sync::{reconcile, RefreshResult, SyncService, TransactionStats, TRANSACTIONS_KEY};
pub use transfer::TransferService;
pub use wallet::{WalletService, CARDS_KEY};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::ports::CacheStore;

/// Read a JSON list from the cache
///
/// A miss, a read failure, or a value of the wrong shape all come back as an
/// empty list; the shape mismatch additionally gets a log line.
pub(crate) async fn read_list<T: DeserializeOwned>(store: &dyn CacheStore, key: &str) -> Vec<T> {
    let Some(raw) = store.get(key).await else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(list) => list,
        Err(e) => {
            warn!(key, error = %e, "cached value has unexpected shape, treating as absent");
            Vec::new()
        }
    }
}

/// Persist a JSON list to the cache
///
/// Serialization failure is logged and the store keeps its previous value,
/// matching the cache store's own write-failure semantics.
pub(crate) async fn write_list<T: Serialize>(store: &dyn CacheStore, key: &str, list: &[T]) {
    match serde_json::to_string(list) {
        Ok(json) => store.set(key, &json).await,
        Err(e) => warn!(key, error = %e, "failed to serialize list for cache"),
    }
}
