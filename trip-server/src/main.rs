use tracing::info;
use tracing_subscriber::EnvFilter;

use trip_server::config::AppConfig;
use trip_server::locations::Locations;
use trip_server::web::{AppState, RESULTS_ROUTE, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    let locations = Locations::load(&config.locations_path).expect("Failed to load locations");
    info!(
        count = locations.len(),
        path = %config.locations_path.display(),
        "loaded locations"
    );

    let state = AppState::new(locations, config.validation);
    let app = create_router(state, &config.static_dir);

    let addr = config.bind_addr;
    info!("Trip search listening on http://{addr}");
    info!("Endpoints:");
    info!("  GET  /                     - Search form");
    info!("  POST {RESULTS_ROUTE}               - Submit a search");
    info!("  GET  {RESULTS_ROUTE}               - Search results");
    info!("  GET  /api/locations/search - Location lookup");
    info!("  GET  /health               - Health check");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
