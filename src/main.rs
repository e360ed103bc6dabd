use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use navmenu_core::{
    config::parse_u64_setting,
    constants::{
        DEFAULT_CONTENT_DEPTH, DEFAULT_NAVIGATION_CACHE_SECONDS, DEFAULT_NAVIGATION_DEPTH,
    },
    AppConfig, CachedNavigationProvider, DeliveryClient, NavigationContentResolver,
    NavigationProvider,
};
use navmenu_delivery::HttpDeliveryClient;
use navmenu_web::{AppState, ViewEngine};

/// Main entry point for the navigation menu site
///
/// Resolves configuration once, wires the delivery client, cached navigation and URL resolver
/// into the web router, and serves until interrupted.
///
/// # Environment Variables
/// - `NAVMENU_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `KONTENT_PROJECT_ID`: Project whose content is delivered (required)
/// - `KONTENT_PREVIEW_API_KEY`: Preview API key; switches to the preview endpoint
/// - `KONTENT_DELIVERY_ENDPOINT`: Delivery endpoint override
/// - `NAVIGATION_ROOT_CODENAME`: Codename of the root navigation item (default: "root_navigation_item")
/// - `NAVIGATION_DEPTH`: Levels of navigation below the root (default: 6)
/// - `NAVIGATION_CACHE_SECONDS`: How long the navigation tree is cached (default: 600)
/// - `CONTENT_DEPTH`: Linked-item depth for page content (default: 1)
/// - `NAVMENU_VIEWS_DIR`: Directory holding the HTML views (default: "views")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - a configuration value is missing or invalid,
/// - the views directory does not exist, or
/// - the server address cannot be bound.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("navmenu=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = load_config()?;
    let addr = std::env::var("NAVMENU_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("++ Starting navmenu on {}", addr);
    tracing::info!(
        project = %cfg.project_id(),
        preview = cfg.preview_api_key().is_some(),
        root = %cfg.navigation_root_codename(),
        "delivery configured"
    );

    let delivery: Arc<dyn DeliveryClient> = Arc::new(HttpDeliveryClient::new(&cfg)?);
    let navigation: Arc<dyn NavigationProvider> = Arc::new(CachedNavigationProvider::new(
        delivery.clone(),
        cfg.navigation_root_codename(),
        cfg.navigation_depth(),
        cfg.navigation_cache_ttl(),
    ));
    let resolver = Arc::new(NavigationContentResolver::new(navigation.clone()));
    let views = Arc::new(ViewEngine::from_dir(cfg.views_dir())?);

    let app = navmenu_web::router(AppState {
        resolver,
        navigation,
        delivery,
        views,
    });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- navmenu stopped");
    Ok(())
}

fn load_config() -> anyhow::Result<AppConfig> {
    let env = |name: &str| std::env::var(name).ok();

    let project_id = env("KONTENT_PROJECT_ID")
        .ok_or_else(|| anyhow::anyhow!("KONTENT_PROJECT_ID must be set"))?;
    let navigation_depth = parse_u64_setting(
        "NAVIGATION_DEPTH",
        env("NAVIGATION_DEPTH"),
        DEFAULT_NAVIGATION_DEPTH.into(),
    )?;
    let cache_seconds = parse_u64_setting(
        "NAVIGATION_CACHE_SECONDS",
        env("NAVIGATION_CACHE_SECONDS"),
        DEFAULT_NAVIGATION_CACHE_SECONDS,
    )?;
    let content_depth = parse_u64_setting(
        "CONTENT_DEPTH",
        env("CONTENT_DEPTH"),
        DEFAULT_CONTENT_DEPTH.into(),
    )?;

    let mut cfg = AppConfig::new(project_id)?
        .with_preview_api_key(env("KONTENT_PREVIEW_API_KEY"))
        .with_delivery_endpoint(env("KONTENT_DELIVERY_ENDPOINT"))
        .with_navigation_root_codename(env("NAVIGATION_ROOT_CODENAME"))
        .with_navigation_depth(u32::try_from(navigation_depth)?)
        .with_navigation_cache_ttl(Duration::from_secs(cache_seconds))
        .with_content_depth(u32::try_from(content_depth)?);

    if let Some(dir) = env("NAVMENU_VIEWS_DIR").filter(|d| !d.trim().is_empty()) {
        cfg = cfg.with_views_dir(PathBuf::from(dir));
    }

    Ok(cfg)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
