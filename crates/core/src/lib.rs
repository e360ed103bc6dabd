//! # Navmenu Core
//!
//! Domain logic for the navigation menu site:
//! - content items as delivered by the headless CMS
//! - the navigation tree built from linked navigation items, and its cache
//! - resolution of relative URL paths to content or redirects
//!
//! **No HTTP concerns**: routing, views and responses belong in `navmenu-web`; the delivery API
//! client lives in `navmenu-delivery`.

pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod navigation;
pub mod provider;
pub mod resolver;
pub mod services;

pub use config::AppConfig;
pub use content::{ContentItem, ContentItemSystem, Element, ItemResponse, ItemsResponse};
pub use error::{BoxError, CoreError, CoreResult};
pub use navigation::NavigationItem;
pub use provider::CachedNavigationProvider;
pub use resolver::{NavigationContentResolver, ResolverResults};
pub use services::{ContentResolver, DeliveryClient, NavigationProvider};
