//! Cached navigation provider.

use crate::navigation::NavigationItem;
use crate::services::{DeliveryClient, NavigationProvider};
use crate::CoreResult;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

struct CachedNavigation {
    fetched_at: Instant,
    navigation: Arc<NavigationItem>,
}

/// Builds the navigation tree from the delivery API and keeps it for a fixed time-to-live.
///
/// Callers arriving while a refresh is in flight wait for it instead of issuing their own
/// request. A failed refresh keeps whatever entry was cached before.
pub struct CachedNavigationProvider {
    client: Arc<dyn DeliveryClient>,
    root_codename: String,
    depth: u32,
    ttl: Duration,
    cache: RwLock<Option<CachedNavigation>>,
}

impl CachedNavigationProvider {
    pub fn new(
        client: Arc<dyn DeliveryClient>,
        root_codename: impl Into<String>,
        depth: u32,
        ttl: Duration,
    ) -> Self {
        Self {
            client,
            root_codename: root_codename.into(),
            depth,
            ttl,
            cache: RwLock::new(None),
        }
    }

    /// Drop the cached tree so the next request rebuilds it.
    pub async fn invalidate(&self) {
        *self.cache.write().await = None;
        tracing::info!(root = %self.root_codename, "navigation cache invalidated");
    }

    fn fresh(&self, entry: &Option<CachedNavigation>) -> Option<Arc<NavigationItem>> {
        entry
            .as_ref()
            .filter(|cached| cached.fetched_at.elapsed() < self.ttl)
            .map(|cached| Arc::clone(&cached.navigation))
    }

    async fn fetch(&self) -> CoreResult<NavigationItem> {
        let response = self.client.get_item(&self.root_codename, self.depth).await?;
        let navigation = NavigationItem::build(&response, self.depth)?;
        tracing::info!(
            root = %self.root_codename,
            items = navigation.iter().count(),
            "navigation rebuilt"
        );
        Ok(navigation)
    }
}

#[async_trait]
impl NavigationProvider for CachedNavigationProvider {
    async fn get_or_create_cached_navigation(&self) -> CoreResult<Arc<NavigationItem>> {
        if let Some(navigation) = self.fresh(&*self.cache.read().await) {
            return Ok(navigation);
        }

        let mut cache = self.cache.write().await;
        // Another caller may have refreshed while we waited for the lock.
        if let Some(navigation) = self.fresh(&cache) {
            return Ok(navigation);
        }

        let navigation = Arc::new(self.fetch().await?);
        *cache = Some(CachedNavigation {
            fetched_at: Instant::now(),
            navigation: Arc::clone(&navigation),
        });
        Ok(navigation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentItem, ItemResponse};
    use crate::navigation::tests::site;
    use crate::CoreError;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingClient {
        calls: AtomicUsize,
        fail: AtomicBool,
    }

    #[async_trait]
    impl DeliveryClient for CountingClient {
        async fn get_item(&self, codename: &str, _depth: u32) -> CoreResult<ItemResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            if self.fail.load(Ordering::SeqCst) {
                return Err(CoreError::InvalidInput(format!("{codename} unavailable")));
            }
            Ok(site())
        }

        async fn get_items_by_codenames(&self, _codenames: &[String]) -> CoreResult<Vec<ContentItem>> {
            Ok(Vec::new())
        }
    }

    fn provider(client: Arc<CountingClient>, ttl: Duration) -> CachedNavigationProvider {
        CachedNavigationProvider::new(client, "root", 6, ttl)
    }

    #[tokio::test]
    async fn cached_tree_is_reused_within_ttl() {
        let client = Arc::new(CountingClient::default());
        let provider = provider(client.clone(), Duration::from_secs(60));

        let first = provider.get_or_create_cached_navigation().await.unwrap();
        let second = provider.get_or_create_cached_navigation().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
        assert_eq!(first.find_by_path(&["about", "team"]).unwrap().codename, "team");
    }

    #[tokio::test]
    async fn expired_tree_is_rebuilt() {
        let client = Arc::new(CountingClient::default());
        let provider = provider(client.clone(), Duration::ZERO);

        provider.get_or_create_cached_navigation().await.unwrap();
        provider.get_or_create_cached_navigation().await.unwrap();

        assert_eq!(client.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn concurrent_callers_share_one_refresh() {
        let client = Arc::new(CountingClient::default());
        let provider = Arc::new(provider(client.clone(), Duration::from_secs(60)));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let provider = Arc::clone(&provider);
                tokio::spawn(async move { provider.get_or_create_cached_navigation().await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn invalidate_forces_rebuild() {
        let client = Arc::new(CountingClient::default());
        let provider = provider(client.clone(), Duration::from_secs(60));

        provider.get_or_create_cached_navigation().await.unwrap();
        provider.invalidate().await;
        provider.get_or_create_cached_navigation().await.unwrap();

        assert_eq!(client.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failed_refresh_propagates_and_is_not_cached() {
        let client = Arc::new(CountingClient::default());
        client.fail.store(true, Ordering::SeqCst);
        let provider = provider(client.clone(), Duration::from_secs(60));

        let err = provider.get_or_create_cached_navigation().await.unwrap_err();
        assert!(err.to_string().contains("root unavailable"));

        client.fail.store(false, Ordering::SeqCst);
        provider.get_or_create_cached_navigation().await.unwrap();
        assert_eq!(client.calls.load(Ordering::SeqCst), 2);
    }
}
