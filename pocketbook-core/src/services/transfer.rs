//! Transfer service - locally originated transfers

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use tracing::debug;

use crate::domain::{next_id, Transaction, TransferDraft};
use crate::ports::CacheStore;

use super::sync::TRANSACTIONS_KEY;

/// Creates transfer transactions without remote involvement
pub struct TransferService {
    store: Arc<dyn CacheStore>,
}

impl TransferService {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store }
    }

    /// Append a transfer to the cached transaction list
    ///
    /// Assigns a generated id and the current instant, prepends the record
    /// (no re-sort, the new record is newest), persists, and returns the
    /// updated list. The record is visible immediately; the next refresh
    /// cycle's dedup keeps it.
    pub async fn append_transfer(&self, draft: TransferDraft) -> Vec<Transaction> {
        let transaction = Transaction {
            id: next_id(),
            card_id: draft.card_id,
            amount: draft.amount,
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            description: draft.description,
            category: draft.category,
            status: draft.status,
        };
        debug!(id = transaction.id, "appending local transfer");

        let existing: Vec<Transaction> =
            super::read_list(self.store.as_ref(), TRANSACTIONS_KEY).await;

        let mut updated = Vec::with_capacity(existing.len() + 1);
        updated.push(transaction);
        updated.extend(existing);

        super::write_list(self.store.as_ref(), TRANSACTIONS_KEY, &updated).await;
        updated
    }
}
