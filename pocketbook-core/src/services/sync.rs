//! Sync service - reconcile cached transactions with the remote snapshot

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::{Snapshot, Transaction};
use crate::ports::{CacheStore, RemoteSource};

/// Cache key holding the merged transaction list
pub const TRANSACTIONS_KEY: &str = "@app_transactions";

/// Sync service for the transaction refresh cycle
pub struct SyncService {
    store: Arc<dyn CacheStore>,
    remote: Arc<dyn RemoteSource>,
}

impl SyncService {
    pub fn new(store: Arc<dyn CacheStore>, remote: Arc<dyn RemoteSource>) -> Self {
        Self { store, remote }
    }

    /// The currently cached transaction list
    pub async fn transactions(&self) -> Vec<Transaction> {
        super::read_list(self.store.as_ref(), TRANSACTIONS_KEY).await
    }

    /// Run one refresh cycle: load local, fetch remote, reconcile, persist
    ///
    /// When the fetch fails the cached list is returned as-is and the store
    /// is not touched; a merge with nothing changes nothing.
    pub async fn refresh(&self) -> RefreshResult {
        let local = self.transactions().await;
        let cached_before = local.len();

        let snapshot = self.remote.fetch_snapshot().await;
        let fetched = snapshot.is_some();
        let discovered = snapshot
            .as_ref()
            .map(Snapshot::transaction_count)
            .unwrap_or(0);

        let transactions = reconcile(local, snapshot.as_ref());

        let new = transactions.len().saturating_sub(cached_before);
        let skipped = discovered.saturating_sub(new);

        if fetched {
            super::write_list(self.store.as_ref(), TRANSACTIONS_KEY, &transactions).await;
        }

        debug!(
            source = self.remote.name(),
            fetched, discovered, new, skipped, "refresh cycle complete"
        );

        RefreshResult {
            source: self.remote.name().to_string(),
            fetched,
            stats: TransactionStats {
                discovered,
                new,
                skipped,
            },
            transactions,
        }
    }
}

/// Merge the cached list with a freshly fetched snapshot
///
/// - A missing snapshot returns the local list unchanged.
/// - The snapshot's category lists are flattened and unioned into the local
///   list; the first occurrence of each id wins, so nothing present in either
///   input is dropped and no id appears twice.
/// - The result is sorted by date descending. `sort_by` is stable, so entries
///   with equal dates keep their union order (local before remote, remote in
///   category order).
pub fn reconcile(local: Vec<Transaction>, snapshot: Option<&Snapshot>) -> Vec<Transaction> {
    let Some(snapshot) = snapshot else {
        return local;
    };

    let mut merged: Vec<Transaction> =
        Vec::with_capacity(local.len() + snapshot.transaction_count());
    let mut seen: HashSet<i64> = HashSet::new();

    for tx in local.into_iter().chain(snapshot.flattened().cloned()) {
        if seen.insert(tx.id) {
            merged.push(tx);
        }
    }

    merged.sort_by(|a, b| b.occurred_at().cmp(&a.occurred_at()));
    merged
}

/// Result of one refresh cycle
#[derive(Debug, Serialize)]
pub struct RefreshResult {
    pub source: String,
    /// False when the remote was unreachable and the cycle fell back to
    /// cached data only
    pub fetched: bool,
    pub stats: TransactionStats,
    #[serde(skip)]
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Serialize)]
pub struct TransactionStats {
    pub discovered: usize,
    pub new: usize,
    pub skipped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{FixedRemote, MemoryStore};
    use rust_decimal::Decimal;

    fn tx(id: i64, date: &str, amount: i64) -> Transaction {
        Transaction {
            id,
            card_id: 1,
            amount: Decimal::new(amount, 0),
            date: date.to_string(),
            description: format!("tx {}", id),
            category: "misc".to_string(),
            status: "completed".to_string(),
        }
    }

    fn snapshot_with(categories: &[(&str, Vec<Transaction>)]) -> Snapshot {
        serde_json::from_value(serde_json::json!({
            "user": {"id": 1, "name": "John", "email": "john@example.com", "cards": []},
            "transactions": categories
                .iter()
                .map(|(name, txs)| (name.to_string(), txs.clone()))
                .collect::<std::collections::BTreeMap<_, _>>(),
        }))
        .unwrap()
    }

    #[test]
    fn test_null_snapshot_returns_local_unchanged() {
        // Identity law: even an unsorted local list comes back verbatim
        let local = vec![tx(1, "2024-01-01", -50), tx(2, "2024-03-01", 10)];
        let result = reconcile(local.clone(), None);
        assert_eq!(result, local);
    }

    #[test]
    fn test_union_keeps_every_id_exactly_once() {
        let local = vec![tx(1, "2024-01-01", -50), tx(2, "2024-01-02", -20)];
        let snapshot = snapshot_with(&[
            ("food", vec![tx(2, "2024-01-02", -20), tx(3, "2024-01-03", -30)]),
            ("salary", vec![tx(4, "2024-01-04", 100)]),
        ]);

        let result = reconcile(local, Some(&snapshot));
        let mut ids: Vec<i64> = result.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sorted_by_date_descending() {
        let local = vec![tx(1, "2024-01-01", -50)];
        let snapshot = snapshot_with(&[(
            "misc",
            vec![tx(2, "2024-06-01", -20), tx(3, "2023-12-01", -30)],
        )]);

        let result = reconcile(local, Some(&snapshot));
        let ids: Vec<i64> = result.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_equal_dates_keep_union_order() {
        // Stability law: local entry precedes remote entries on date ties,
        // remote entries stay in category order
        let local = vec![tx(1, "2024-01-01", -50)];
        let snapshot = snapshot_with(&[
            ("a", vec![tx(2, "2024-01-01", -20)]),
            ("b", vec![tx(3, "2024-01-01", -30)]),
        ]);

        let result = reconcile(local, Some(&snapshot));
        let ids: Vec<i64> = result.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let local = vec![tx(1, "2024-01-01", -50), tx(5, "2024-05-05", 5)];
        let snapshot = snapshot_with(&[
            ("food", vec![tx(2, "2024-02-01", -20)]),
            ("salary", vec![tx(1, "2024-01-01", -50)]),
        ]);

        let once = reconcile(local, Some(&snapshot));
        let twice = reconcile(once.clone(), Some(&snapshot));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_duplicate_id_across_categories_not_duplicated() {
        // Worked scenario: id 1 appears locally and under "salary"
        let local = vec![tx(1, "2024-01-01", -50)];
        let snapshot = snapshot_with(&[
            ("food", vec![tx(2, "2024-02-01", -20)]),
            ("salary", vec![tx(1, "2024-01-01", -50)]),
        ]);

        let result = reconcile(local, Some(&snapshot));
        let ids: Vec<i64> = result.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_refresh_persists_merge_and_reports_stats() {
        let store = Arc::new(MemoryStore::new());
        store.seed(
            TRANSACTIONS_KEY,
            &serde_json::to_string(&[tx(1, "2024-01-01", -50)]).unwrap(),
        );
        let snapshot = snapshot_with(&[
            ("food", vec![tx(2, "2024-02-01", -20)]),
            ("salary", vec![tx(1, "2024-01-01", -50)]),
        ]);
        let remote = Arc::new(FixedRemote::new(Some(snapshot)));

        let service = SyncService::new(store.clone(), remote);
        let result = service.refresh().await;

        assert!(result.fetched);
        assert_eq!(result.stats.discovered, 2);
        assert_eq!(result.stats.new, 1);
        assert_eq!(result.stats.skipped, 1);

        let persisted = service.transactions().await;
        let ids: Vec<i64> = persisted.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_refresh_with_dead_remote_keeps_cache_untouched() {
        let store = Arc::new(MemoryStore::new());
        let cached = serde_json::to_string(&[tx(1, "2024-01-01", -50)]).unwrap();
        store.seed(TRANSACTIONS_KEY, &cached);
        let remote = Arc::new(FixedRemote::unreachable());

        let service = SyncService::new(store.clone(), remote);
        let result = service.refresh().await;

        assert!(!result.fetched);
        assert_eq!(result.transactions.len(), 1);
        assert_eq!(store.get(TRANSACTIONS_KEY).await.as_deref(), Some(&*cached));
    }

    #[tokio::test]
    async fn test_corrupt_cached_list_treated_as_empty() {
        let store = Arc::new(MemoryStore::new());
        store.seed(TRANSACTIONS_KEY, "{\"not\": \"a list\"}");
        let remote = Arc::new(FixedRemote::unreachable());

        let service = SyncService::new(store, remote);
        assert!(service.transactions().await.is_empty());
    }
}
