//! URL path resolution against the navigation tree.

use crate::navigation::NavigationItem;
use crate::services::{ContentResolver, NavigationProvider};
use crate::CoreResult;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

/// Outcome of resolving a relative URL path.
///
/// When `found` is set, either `content_item_codenames` is non-empty (render) or `redirect_url`
/// holds a site-relative path (local redirect). When `found` is clear, `redirect_url` may hold an
/// absolute URL (external redirect).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ResolverResults {
    pub found: bool,
    pub redirect_url: Option<String>,
    pub content_item_codenames: Vec<String>,
    pub view_name: Option<String>,
}

impl ResolverResults {
    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn content(codenames: Vec<String>, view_name: Option<String>) -> Self {
        Self {
            found: true,
            content_item_codenames: codenames,
            view_name,
            ..Self::default()
        }
    }

    pub fn local_redirect(path: impl Into<String>) -> Self {
        Self {
            found: true,
            redirect_url: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn external_redirect(url: impl Into<String>) -> Self {
        Self {
            found: false,
            redirect_url: Some(url.into()),
            ..Self::default()
        }
    }
}

/// Resolves paths by walking the navigation tree one URL slug per segment.
pub struct NavigationContentResolver {
    navigation: Arc<dyn NavigationProvider>,
}

impl NavigationContentResolver {
    pub fn new(navigation: Arc<dyn NavigationProvider>) -> Self {
        Self { navigation }
    }
}

fn is_slug_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Split a relative URL path into slug segments. `None` if any segment cannot be a slug.
pub fn split_url_path(url_path: &str) -> Option<Vec<&str>> {
    let trimmed = url_path.trim_matches('/');
    if trimmed.is_empty() {
        return Some(Vec::new());
    }
    let segments: Vec<&str> = trimmed.split('/').collect();
    segments
        .iter()
        .all(|s| is_slug_segment(s))
        .then_some(segments)
}

fn results_for(item: &NavigationItem, tree: &NavigationItem) -> ResolverResults {
    if let Some(url) = &item.redirect_to_url {
        return ResolverResults::external_redirect(url.clone());
    }

    if let Some(target) = &item.redirect_to_item {
        return match tree.find_by_codename(target) {
            // The site root has an empty path; redirect to "/" rather than to nothing.
            Some(target) if target.url_path.is_empty() => ResolverResults::local_redirect("/"),
            Some(target) => ResolverResults::local_redirect(target.url_path.clone()),
            None => {
                tracing::warn!(
                    item = %item.codename,
                    target = %target,
                    "redirect target is not part of the navigation"
                );
                ResolverResults {
                    found: true,
                    ..ResolverResults::default()
                }
            }
        };
    }

    ResolverResults::content(item.content_items.clone(), item.view_name.clone())
}

#[async_trait]
impl ContentResolver for NavigationContentResolver {
    async fn resolve_relative_url_path(
        &self,
        url_path: &str,
    ) -> CoreResult<Option<ResolverResults>> {
        let Some(segments) = split_url_path(url_path) else {
            tracing::debug!(url_path, "path is not made of URL slugs");
            return Ok(None);
        };

        let tree = self.navigation.get_or_create_cached_navigation().await?;
        let results = match tree.find_by_path(&segments) {
            Some(item) => results_for(item, &tree),
            None => ResolverResults::not_found(),
        };
        Ok(Some(results))
    }
}
