use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use station_server::config::ServerConfig;
use station_server::stations::{RefreshOutcome, StationRegistry};
use station_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("station_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env();

    let inventory = config
        .inventory
        .build()
        .expect("Failed to create inventory source");

    // Fail fast if the inventory source is unavailable
    let registry = StationRegistry::load(inventory, &config.cache)
        .await
        .expect("Failed to load station snapshot");

    let state = AppState::new(registry);

    // Spawn background task to refresh the snapshot
    let registry = Arc::clone(&state.registry);
    let refresh_interval = config.refresh_interval;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(refresh_interval);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            match registry.refresh().await {
                Ok(RefreshOutcome::Replaced { version, stations }) => {
                    info!(version, stations, "refreshed station snapshot")
                }
                Ok(RefreshOutcome::Superseded) => info!("scheduled refresh superseded"),
                Err(e) => warn!(error = %e, "failed to refresh station snapshot"),
            }
        }
    });

    let app = create_router(state);

    let addr = config.bind_addr;
    info!("Station server listening on http://{addr}");
    info!("  GET  /health            - Health check");
    info!("  GET  /api/stations      - Filtered, sorted, paginated stations");
    info!("  GET  /api/stations/:id  - One station");
    info!("  GET  /api/zones         - Zone summaries");
    info!("  GET  /api/overview      - Fleet overview");
    info!("  GET  /api/alerts        - Priority alerts");
    info!("  GET  /api/rebalancing   - Rebalancing candidates");
    info!("  POST /api/refresh       - Refresh the snapshot now");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
