//! # Navmenu Web
//!
//! HTTP surface for the navigation menu site.
//!
//! Handles:
//! - the catch-all static content route with axum
//! - HTML views with minijinja
//! - OpenAPI/Swagger documentation, CORS and request tracing
//!
//! Uses `navmenu-core` for resolution and navigation; the delivery client is injected.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod handlers;
pub mod models;
pub mod state;
pub mod views;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::AppError;
pub use models::{HealthRes, PageViewModel};
pub use state::AppState;
pub use views::{ViewEngine, ViewError};

#[derive(OpenApi)]
#[openapi(
    paths(handlers::health, handlers::static_content),
    components(schemas(HealthRes))
)]
pub struct ApiDoc;

/// Build the application router.
///
/// Every GET not matched by a named route falls through to the static content handler, so page
/// paths of any depth (including `/`) resolve there.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(get(handlers::static_content))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
