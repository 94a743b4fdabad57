//! Remote snapshot document

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Card, Transaction};

/// The single document returned by the remote source
///
/// Transactions arrive grouped by category name. The grouping is irrelevant
/// to identity; reconciliation flattens all lists into one sequence. A
/// `BTreeMap` pins the cross-category flatten order (lexicographic by
/// category), which the wire format leaves unspecified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub user: Profile,
    #[serde(default)]
    pub transactions: BTreeMap<String, Vec<Transaction>>,
}

impl Snapshot {
    /// Iterate every transaction across all categories
    ///
    /// Order within a category is preserved; categories come in key order.
    pub fn flattened(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.values().flatten()
    }

    /// Total number of transactions across all categories
    pub fn transaction_count(&self) -> usize {
        self.transactions.values().map(Vec::len).sum()
    }
}

/// The user record carried in the snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}
