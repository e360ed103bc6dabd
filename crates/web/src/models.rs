use navmenu_core::{ContentItem, NavigationItem};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// Everything a page view gets to render: the site menu and the page's own content items.
#[derive(Clone, Debug, Serialize)]
pub struct PageViewModel {
    pub navigation: Arc<NavigationItem>,
    pub body: Vec<ContentItem>,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}
