use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Json, Response},
};
use navmenu_core::{constants::DEFAULT_VIEW, ResolverResults};
use percent_encoding::percent_decode_str;

use crate::error::AppError;
use crate::models::{HealthRes, PageViewModel};
use crate::state::AppState;

const RESOLVE_ERROR_MESSAGE: &str =
    "There was an error while resolving the URL. Check if your URL was correct and try again. Details:";

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
pub async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Navmenu is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/{url_path}",
    params(
        ("url_path" = String, Path, description = "Relative URL path of a navigation item, may contain slashes")
    ),
    responses(
        (status = 200, description = "Rendered page", body = String, content_type = "text/html"),
        (status = 301, description = "Permanent redirect to another page or an external URL"),
        (status = 404, description = "No page at this path"),
        (status = 500, description = "URL could not be resolved")
    )
)]
/// Static content page
///
/// Serves every path not claimed by another route: resolves it to content or a redirect and
/// renders the page with the site navigation.
#[axum::debug_handler]
pub async fn static_content(State(state): State<AppState>, uri: Uri) -> Result<Response, AppError> {
    index(&state, &relative_url_path(uri.path())).await
}

/// Decoded request path without its leading slash. The site root is `""`.
fn relative_url_path(path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    percent_decode_str(path).decode_utf8_lossy().into_owned()
}

/// Resolve `url_path` and answer with a rendered page, a permanent redirect or 404.
///
/// # Errors
/// Resolver failures are answered directly with a 500 carrying the error message. Navigation,
/// content and rendering failures are returned as `AppError`.
pub async fn index(state: &AppState, url_path: &str) -> Result<Response, AppError> {
    let results = match state.resolver.resolve_relative_url_path(url_path).await {
        Ok(results) => results,
        Err(e) => {
            return Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("{RESOLVE_ERROR_MESSAGE} {e}"),
            )
                .into_response());
        }
    };

    let response = match results {
        Some(ResolverResults {
            found: true,
            content_item_codenames,
            view_name,
            ..
        }) if !content_item_codenames.is_empty() => {
            render_view(state, &content_item_codenames, view_name).await?
        }
        Some(ResolverResults {
            found: true,
            redirect_url: Some(url),
            ..
        }) if !url.is_empty() => {
            permanent_redirect(&format!("/{}", url.trim_start_matches('/')))
        }
        Some(ResolverResults {
            found: false,
            redirect_url: Some(url),
            ..
        }) if !url.is_empty() => permanent_redirect(&url),
        _ => StatusCode::NOT_FOUND.into_response(),
    };
    Ok(response)
}

async fn render_view(
    state: &AppState,
    codenames: &[String],
    view_name: Option<String>,
) -> Result<Response, AppError> {
    // Page body is a separate request from the navigation, with its own linked-item depth.
    let (navigation, body) = tokio::try_join!(
        state.navigation.get_or_create_cached_navigation(),
        state.delivery.get_items_by_codenames(codenames),
    )?;

    let view = view_name
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_VIEW.to_string());
    let html = state.views.render(&view, &PageViewModel { navigation, body })?;
    Ok(Html(html).into_response())
}

fn permanent_redirect(location: &str) -> Response {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}
