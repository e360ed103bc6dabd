use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use navmenu_core::CoreError;

use crate::views::ViewError;

/// Failures that escape a handler. They all become a plain 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    View(#[from] ViewError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {:?}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
    }
}
