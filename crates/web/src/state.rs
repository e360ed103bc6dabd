use navmenu_core::{ContentResolver, DeliveryClient, NavigationProvider};
use std::sync::Arc;

use crate::views::ViewEngine;

/// Application state shared by all request handlers.
///
/// Holds the collaborators the static content handler delegates to, behind trait objects so
/// tests can substitute fakes.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<dyn ContentResolver>,
    pub navigation: Arc<dyn NavigationProvider>,
    pub delivery: Arc<dyn DeliveryClient>,
    pub views: Arc<ViewEngine>,
}
