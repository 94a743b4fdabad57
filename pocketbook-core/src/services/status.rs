//! Status service - cache summary

use std::sync::Arc;

use serde::Serialize;

use crate::domain::{Card, Transaction};
use crate::ports::CacheStore;

use super::onboarding::ONBOARDING_KEY;
use super::sync::TRANSACTIONS_KEY;
use super::wallet::CARDS_KEY;

/// Read-only summary of what the cache currently holds
pub struct StatusService {
    store: Arc<dyn CacheStore>,
}

impl StatusService {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store }
    }

    pub async fn summary(&self) -> StatusSummary {
        let transactions: Vec<Transaction> =
            super::read_list(self.store.as_ref(), TRANSACTIONS_KEY).await;
        let cards: Vec<Card> = super::read_list(self.store.as_ref(), CARDS_KEY).await;

        // The persisted list is sorted newest-first, but don't rely on it
        let latest_transaction = transactions
            .iter()
            .max_by_key(|t| t.occurred_at())
            .map(|t| t.date.clone());

        let has_seen_onboarding =
            matches!(self.store.get(ONBOARDING_KEY).await.as_deref(), Some("true"));

        StatusSummary {
            transactions: transactions.len(),
            cards: cards.len(),
            latest_transaction,
            has_seen_onboarding,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusSummary {
    pub transactions: usize,
    pub cards: usize,
    pub latest_transaction: Option<String>,
    pub has_seen_onboarding: bool,
}
