//! ShelfWatch desktop binary.

use shelfwatch::services::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    use tracing_subscriber::prelude::*;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer().with_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive(tracing::Level::INFO.into()),
            ),
        )
        .init();

    // Initialize application state
    let state = AppState::new().await?;
    tracing::info!("Application state initialized successfully");

    state.start_background_services();

    // The table UI drives the services from here; a headless run keeps the
    // expiry monitor alive until interrupted.
    tokio::signal::ctrl_c().await?;

    state.shutdown().await;
    Ok(())
}
