use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use weather_search::{server, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Missing API key stops the process here, before anything is bound
    let config = Config::from_env()?;

    info!("Starting Weather Search");
    info!("Tavily URL: {}", config.tavily_api_url);
    info!("Static files: {}", config.static_dir.display());

    let bind_addr = config.bind_addr;
    let state = Arc::new(AppState::new(config)?);
    let app = server::build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Weather Search listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
