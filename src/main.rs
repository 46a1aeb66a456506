//! Main entry point for the sceneforge gateway

use sceneforge::{api, catalog, config::Settings, upstream::InferenceClient, AppState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = Settings::load()?;
    settings.validate()?;
    catalog::validate()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    if settings.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }

    info!("Starting sceneforge gateway");
    info!(
        "Loaded configuration: server={}:{} model={}",
        settings.server.host, settings.server.port, settings.upstream.model
    );

    // Build the upstream client and application state
    let upstream = InferenceClient::new(&settings.upstream)?;
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let state = Arc::new(AppState { settings, upstream });

    // Build the router
    let app = api::routes::create_router(state).await;

    info!("Server listening on {}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
