//! Collaborator interfaces.
//!
//! The request handler only sees these traits; concrete implementations live in this crate
//! (navigation, resolver) and in `navmenu-delivery` (HTTP client).

use crate::content::{ContentItem, ItemResponse};
use crate::navigation::NavigationItem;
use crate::resolver::ResolverResults;
use crate::CoreResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Read access to the content delivery API.
#[async_trait]
pub trait DeliveryClient: Send + Sync + 'static {
    /// Fetch one item with its linked items resolved `depth` levels deep.
    async fn get_item(&self, codename: &str, depth: u32) -> CoreResult<ItemResponse>;

    /// Fetch every item whose codename is in `codenames`. Unknown codenames are simply absent
    /// from the result.
    async fn get_items_by_codenames(&self, codenames: &[String]) -> CoreResult<Vec<ContentItem>>;
}

/// Supplies the site navigation tree.
#[async_trait]
pub trait NavigationProvider: Send + Sync + 'static {
    async fn get_or_create_cached_navigation(&self) -> CoreResult<Arc<NavigationItem>>;
}

/// Maps a relative URL path onto content or a redirect.
#[async_trait]
pub trait ContentResolver: Send + Sync + 'static {
    /// Returns `Ok(None)` when the path cannot name any navigation item.
    async fn resolve_relative_url_path(&self, url_path: &str)
        -> CoreResult<Option<ResolverResults>>;
}
