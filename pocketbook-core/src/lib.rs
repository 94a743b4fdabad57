//! Pocketbook Core - offline-first wallet cache and reconciliation
//!
//! This crate implements the core logic following hexagonal architecture:
//!
//! - **domain**: Core entities (Card, Transaction, Snapshot)
//! - **ports**: Trait definitions for external dependencies (RemoteSource, CacheStore)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (jsonbin HTTP client, file-backed store)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::file_store::FileStore;
use adapters::jsonbin::JsonBinClient;
use config::Config;
use ports::{CacheStore, RemoteSource};
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result as CoreResult};
pub use domain::{Card, CardDraft, Profile, Snapshot, Transaction, TransferDraft};

/// Main context for Pocketbook operations
///
/// This is the primary entry point. It holds the cache store, the remote
/// snapshot source, configuration, and all services.
pub struct PocketbookContext {
    pub config: Config,
    pub store: Arc<FileStore>,
    pub sync_service: SyncService,
    pub transfer_service: TransferService,
    pub wallet_service: WalletService,
    pub onboarding_service: OnboardingService,
    pub status_service: StatusService,
}

impl PocketbookContext {
    /// Create a new Pocketbook context rooted at the given app directory
    pub fn new(pocketbook_dir: &Path) -> Result<Self> {
        let config = Config::load(pocketbook_dir)?;

        let store = Arc::new(FileStore::new(pocketbook_dir));
        let cache: Arc<dyn CacheStore> = store.clone();

        let remote: Arc<dyn RemoteSource> =
            Arc::new(JsonBinClient::new(&config.api_url, &config.master_key)?);

        let sync_service = SyncService::new(Arc::clone(&cache), Arc::clone(&remote));
        let transfer_service = TransferService::new(Arc::clone(&cache));
        let wallet_service = WalletService::new(Arc::clone(&cache), Arc::clone(&remote));
        let onboarding_service =
            OnboardingService::new(Arc::clone(&cache), config.always_show_onboarding);
        let status_service = StatusService::new(Arc::clone(&cache));

        Ok(Self {
            config,
            store,
            sync_service,
            transfer_service,
            wallet_service,
            onboarding_service,
            status_service,
        })
    }
}
