//! Wallet service - cached payment cards

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{next_id, Card, CardDraft};
use crate::ports::{CacheStore, RemoteSource};

/// Cache key holding the card list
pub const CARDS_KEY: &str = "@financial_app_cards";

/// Card cache with one-time remote seed
pub struct WalletService {
    store: Arc<dyn CacheStore>,
    remote: Arc<dyn RemoteSource>,
}

impl WalletService {
    pub fn new(store: Arc<dyn CacheStore>, remote: Arc<dyn RemoteSource>) -> Self {
        Self { store, remote }
    }

    /// Load the wallet's cards
    ///
    /// Returns the persisted list when present. On first call (or when the
    /// persisted value is unreadable) the remote snapshot seeds the cache.
    /// This is a one-time seed, not a refreshing cache: once persisted, cards
    /// are never re-fetched, so remote-side card changes won't show up here
    /// without a cache clear.
    pub async fn load_cards(&self) -> Vec<Card> {
        if let Some(raw) = self.store.get(CARDS_KEY).await {
            match serde_json::from_str(&raw) {
                Ok(cards) => return cards,
                Err(e) => {
                    warn!(error = %e, "cached cards unreadable, reseeding from remote");
                }
            }
        }

        match self.remote.fetch_snapshot().await {
            Some(snapshot) => {
                let cards = snapshot.user.cards;
                super::write_list(self.store.as_ref(), CARDS_KEY, &cards).await;
                debug!(count = cards.len(), "seeded card cache from remote");
                cards
            }
            None => Vec::new(),
        }
    }

    /// Add a locally created card to the wallet
    ///
    /// The first card in an empty wallet becomes the default. Works on the
    /// cached list only; no remote involvement.
    pub async fn add_card(&self, draft: CardDraft) -> Vec<Card> {
        let mut cards: Vec<Card> = super::read_list(self.store.as_ref(), CARDS_KEY).await;

        let card = Card {
            id: next_id(),
            card_name: draft.card_name,
            card_number: draft.card_number,
            expiry_date: draft.expiry_date,
            cvv: draft.cvv,
            card_type: "visa".to_string(),
            is_default: cards.is_empty(),
        };
        cards.push(card);

        super::write_list(self.store.as_ref(), CARDS_KEY, &cards).await;
        cards
    }
}
