//! # Navmenu Delivery
//!
//! HTTP client for the headless CMS delivery API.
//!
//! Implements [`navmenu_core::DeliveryClient`] so the navigation provider and the request handler
//! can fetch content without knowing about HTTP.

#![warn(rust_2018_idioms)]

use async_trait::async_trait;
use navmenu_core::{
    AppConfig, ContentItem, CoreError, CoreResult, DeliveryClient, ItemResponse, ItemsResponse,
};
use reqwest::{header, Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("delivery request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("delivery API returned {status} for {url}")]
    Status { status: StatusCode, url: String },
    #[error("failed to decode delivery response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type DeliveryResult<T> = std::result::Result<T, DeliveryError>;

/// Delivery API client bound to one project.
#[derive(Clone, Debug)]
pub struct HttpDeliveryClient {
    http: Client,
    project_url: String,
    api_key: Option<String>,
    content_depth: u32,
}

impl HttpDeliveryClient {
    /// Create a client for the project described by `cfg`.
    ///
    /// # Errors
    /// Returns `DeliveryError::ClientBuild` if the TLS backend cannot be initialised.
    pub fn new(cfg: &AppConfig) -> DeliveryResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("navmenu/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(DeliveryError::ClientBuild)?;

        Ok(Self {
            http,
            project_url: cfg.project_url(),
            api_key: cfg.preview_api_key().map(str::to_string),
            content_depth: cfg.content_depth(),
        })
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let request = self.http.get(format!("{}/{}", self.project_url, path));
        match &self.api_key {
            Some(key) => request.header(header::AUTHORIZATION, format!("Bearer {key}")),
            None => request,
        }
    }

    fn item_request(&self, codename: &str, depth: u32) -> RequestBuilder {
        self.get(&format!("items/{codename}"))
            .query(&[("depth", depth.to_string())])
    }

    fn items_request(&self, codenames: &[String]) -> RequestBuilder {
        self.get("items").query(&[
            ("system.codename[in]", codenames.join(",")),
            ("depth", self.content_depth.to_string()),
        ])
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> DeliveryResult<T> {
        let response = request.send().await?;
        let url = response.url().to_string();
        let status = response.status();
        tracing::debug!(%url, %status, "delivery response");

        if !status.is_success() {
            return Err(DeliveryError::Status { status, url });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| DeliveryError::Decode { url, source })
    }

    /// Fetch one item with linked items resolved `depth` levels deep.
    pub async fn item(&self, codename: &str, depth: u32) -> DeliveryResult<ItemResponse> {
        self.send(self.item_request(codename, depth)).await
    }

    /// Fetch the items with the given codenames. No request is made for an empty list.
    pub async fn items_by_codenames(&self, codenames: &[String]) -> DeliveryResult<Vec<ContentItem>> {
        if codenames.is_empty() {
            return Ok(Vec::new());
        }
        let response: ItemsResponse = self.send(self.items_request(codenames)).await?;
        Ok(response.items)
    }
}

#[async_trait]
impl DeliveryClient for HttpDeliveryClient {
    async fn get_item(&self, codename: &str, depth: u32) -> CoreResult<ItemResponse> {
        self.item(codename, depth).await.map_err(CoreError::delivery)
    }

    async fn get_items_by_codenames(&self, codenames: &[String]) -> CoreResult<Vec<ContentItem>> {
        self.items_by_codenames(codenames)
            .await
            .map_err(CoreError::delivery)
    }
}
