use std::net::SocketAddr;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tube_server::planner::{JourneyQuery, QueryConfig};
use tube_server::stations::{StationCache, StationResolver};
use tube_server::tfl::{TflClient, TflConfig};
use tube_server::web::{AppState, create_router};

/// Address to listen on when `BIND_ADDR` is not set.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tube_server=info,tower_http=info")),
        )
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // TfL serves anonymous requests, just at a lower rate limit
    let mut tfl_config = TflConfig::new();
    match std::env::var("TFL_APP_KEY") {
        Ok(key) => tfl_config = tfl_config.with_app_key(key),
        Err(_) => warn!("TFL_APP_KEY not set, using anonymous TfL access"),
    }
    if let Ok(url) = std::env::var("TFL_BASE_URL") {
        tfl_config = tfl_config.with_base_url(url);
    }

    let tfl = TflClient::new(tfl_config)?;

    // One cache for the life of the process, shared by every request
    let resolver = StationResolver::new(tfl.clone(), StationCache::new());
    let query = JourneyQuery::new(resolver, tfl, QueryConfig::default());

    let app = create_router(AppState::new(query));

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()?;

    info!("Tube Journey Planner listening on http://{addr}");
    info!("  GET /health");
    info!("  GET /api/journeys?from=<station>&to=<station>");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
