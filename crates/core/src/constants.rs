//! Constants shared across the workspace.

/// Public delivery API endpoint.
pub const DELIVERY_ENDPOINT: &str = "https://deliver.kontent.ai";

/// Preview delivery API endpoint, used when a preview key is configured.
pub const PREVIEW_ENDPOINT: &str = "https://preview-deliver.kontent.ai";

pub const DEFAULT_ROOT_NAVIGATION_CODENAME: &str = "root_navigation_item";
pub const DEFAULT_NAVIGATION_DEPTH: u32 = 6;
pub const DEFAULT_NAVIGATION_CACHE_SECONDS: u64 = 600;
pub const DEFAULT_CONTENT_DEPTH: u32 = 1;
pub const DEFAULT_VIEWS_DIR: &str = "views";

/// View rendered when the resolver does not name one.
pub const DEFAULT_VIEW: &str = "Default";

/// Content type codename of navigation items.
pub const NAVIGATION_ITEM_TYPE: &str = "navigation_item";

// Navigation item element codenames.
pub const TITLE_ELEMENT: &str = "title";
pub const URL_SLUG_ELEMENT: &str = "url_slug";
pub const REDIRECT_TO_URL_ELEMENT: &str = "redirect_to_url";
pub const REDIRECT_TO_ITEM_ELEMENT: &str = "redirect_to_item";
pub const CONTENT_ITEMS_ELEMENT: &str = "content_items";
pub const CHILD_NAVIGATION_ITEMS_ELEMENT: &str = "child_navigation_items";
pub const VIEW_NAME_ELEMENT: &str = "view_name";
