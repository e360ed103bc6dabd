//! Runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into services. Request handling
//! never reads process-wide environment variables.

use crate::constants::{
    DEFAULT_CONTENT_DEPTH, DEFAULT_NAVIGATION_CACHE_SECONDS, DEFAULT_NAVIGATION_DEPTH,
    DEFAULT_ROOT_NAVIGATION_CODENAME, DEFAULT_VIEWS_DIR, DELIVERY_ENDPOINT, PREVIEW_ENDPOINT,
};
use crate::{CoreError, CoreResult};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    project_id: String,
    preview_api_key: Option<String>,
    delivery_endpoint: String,
    navigation_root_codename: String,
    navigation_depth: u32,
    navigation_cache_ttl: Duration,
    content_depth: u32,
    views_dir: PathBuf,
}

impl AppConfig {
    /// Create a new `AppConfig` with defaults for everything but the project id.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidConfig` if `project_id` is empty.
    pub fn new(project_id: impl Into<String>) -> CoreResult<Self> {
        let project_id = project_id.into().trim().to_string();
        if project_id.is_empty() {
            return Err(CoreError::InvalidConfig {
                name: "KONTENT_PROJECT_ID",
                reason: "cannot be empty".into(),
            });
        }

        Ok(Self {
            project_id,
            preview_api_key: None,
            delivery_endpoint: DELIVERY_ENDPOINT.into(),
            navigation_root_codename: DEFAULT_ROOT_NAVIGATION_CODENAME.into(),
            navigation_depth: DEFAULT_NAVIGATION_DEPTH,
            navigation_cache_ttl: Duration::from_secs(DEFAULT_NAVIGATION_CACHE_SECONDS),
            content_depth: DEFAULT_CONTENT_DEPTH,
            views_dir: PathBuf::from(DEFAULT_VIEWS_DIR),
        })
    }

    /// Use the preview API. Switches the endpoint unless one was set explicitly afterwards.
    pub fn with_preview_api_key(mut self, key: Option<String>) -> Self {
        let key = key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty());
        if key.is_some() {
            self.delivery_endpoint = PREVIEW_ENDPOINT.into();
        }
        self.preview_api_key = key;
        self
    }

    pub fn with_delivery_endpoint(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.delivery_endpoint = endpoint.trim().trim_end_matches('/').to_string();
        }
        self
    }

    pub fn with_navigation_root_codename(mut self, codename: Option<String>) -> Self {
        if let Some(codename) = codename.filter(|c| !c.trim().is_empty()) {
            self.navigation_root_codename = codename.trim().to_string();
        }
        self
    }

    pub fn with_navigation_depth(mut self, depth: u32) -> Self {
        self.navigation_depth = depth;
        self
    }

    pub fn with_navigation_cache_ttl(mut self, ttl: Duration) -> Self {
        self.navigation_cache_ttl = ttl;
        self
    }

    pub fn with_content_depth(mut self, depth: u32) -> Self {
        self.content_depth = depth;
        self
    }

    pub fn with_views_dir(mut self, dir: PathBuf) -> Self {
        self.views_dir = dir;
        self
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn preview_api_key(&self) -> Option<&str> {
        self.preview_api_key.as_deref()
    }

    /// Base URL for delivery requests, including the project id.
    pub fn project_url(&self) -> String {
        format!("{}/{}", self.delivery_endpoint, self.project_id)
    }

    pub fn navigation_root_codename(&self) -> &str {
        &self.navigation_root_codename
    }

    pub fn navigation_depth(&self) -> u32 {
        self.navigation_depth
    }

    pub fn navigation_cache_ttl(&self) -> Duration {
        self.navigation_cache_ttl
    }

    pub fn content_depth(&self) -> u32 {
        self.content_depth
    }

    pub fn views_dir(&self) -> &Path {
        &self.views_dir
    }
}

/// Parse an optional numeric setting, falling back to `default` when absent or blank.
///
/// # Errors
/// Returns `CoreError::InvalidConfig` if the value is present but not a valid `u64`.
pub fn parse_u64_setting(name: &'static str, value: Option<String>, default: u64) -> CoreResult<u64> {
    match value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        None => Ok(default),
        Some(v) => v.parse::<u64>().map_err(|e| CoreError::InvalidConfig {
            name,
            reason: format!("'{v}': {e}"),
        }),
    }
}
