//! # Bakery Node
//!
//! HTTP server answering menu availability queries.

use axum::{routing::get, Router};
use bakery_core::{HoursTable, Menu};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod state;

use config::NodeConfig;
use state::AppState;

/// Run the bakery server until the process is stopped.
pub async fn run_server(config: NodeConfig) -> anyhow::Result<()> {
    info!("🥐 Bakery Node starting...");

    // The hours table is informational only; handlers never read it.
    match HoursTable::load(&config.hours_path) {
        Ok(hours) => info!(
            "📅 Loaded hours for {} days from {} (open {:?})",
            hours.len(),
            config.hours_path.display(),
            hours.open_days()
        ),
        Err(e) => warn!("Hours table unavailable: {}", e),
    }

    let menu = Menu::bakery();
    info!("🍞 Menu: {}", menu.selection());

    let app = create_router(AppState::new(menu));

    let addr = config.bind_addr();
    info!("🌐 Listening on http://{}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the API router.
fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(api::root::root))
        .route("/health", get(api::health::health_check))
        .route(
            "/check",
            get(api::check::check_item).post(api::check::submit_query),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let config = NodeConfig::from_env()?;
    run_server(config).await
}
