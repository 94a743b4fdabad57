//! Onboarding service - first-run flag

use std::sync::Arc;

use crate::ports::CacheStore;

/// Cache key holding the onboarding-seen flag ("true" once seen)
pub const ONBOARDING_KEY: &str = "@has_seen_onboarding";

/// Tracks whether the user has been through onboarding
///
/// `always_show` comes from the `alwaysShowOnboarding` config option and
/// forces the onboarding flow regardless of the persisted flag (a
/// development aid, off by default).
pub struct OnboardingService {
    store: Arc<dyn CacheStore>,
    always_show: bool,
}

impl OnboardingService {
    pub fn new(store: Arc<dyn CacheStore>, always_show: bool) -> Self {
        Self { store, always_show }
    }

    /// Whether the persisted flag says onboarding was completed
    ///
    /// A read failure reads as "not seen" - showing onboarding again is the
    /// safe direction.
    pub async fn has_seen(&self) -> bool {
        matches!(self.store.get(ONBOARDING_KEY).await.as_deref(), Some("true"))
    }

    /// Whether the onboarding flow should be shown
    pub async fn should_show(&self) -> bool {
        self.always_show || !self.has_seen().await
    }

    /// Record that onboarding was completed
    pub async fn mark_seen(&self) {
        self.store.set(ONBOARDING_KEY, "true").await;
    }

    /// Forget that onboarding was completed
    pub async fn reset(&self) {
        self.store.set(ONBOARDING_KEY, "false").await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStore;

    #[tokio::test]
    async fn test_fresh_install_shows_onboarding() {
        let store = Arc::new(MemoryStore::new());
        let service = OnboardingService::new(store, false);
        assert!(service.should_show().await);
        assert!(!service.has_seen().await);
    }

    #[tokio::test]
    async fn test_mark_seen_hides_onboarding() {
        let store = Arc::new(MemoryStore::new());
        let service = OnboardingService::new(store, false);

        service.mark_seen().await;
        assert!(service.has_seen().await);
        assert!(!service.should_show().await);
    }

    #[tokio::test]
    async fn test_always_show_overrides_seen_flag() {
        let store = Arc::new(MemoryStore::new());
        let service = OnboardingService::new(store, true);

        service.mark_seen().await;
        assert!(service.has_seen().await);
        assert!(service.should_show().await);
    }

    #[tokio::test]
    async fn test_reset_shows_onboarding_again() {
        let store = Arc::new(MemoryStore::new());
        let service = OnboardingService::new(store, false);

        service.mark_seen().await;
        service.reset().await;
        assert!(service.should_show().await);
    }
}
