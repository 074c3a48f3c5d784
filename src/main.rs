//! Bargain engine server binary.

use bargain_engine::api::rest::{AppState, create_router};
use bargain_engine::application::services::NegotiationService;
use bargain_engine::config::ServerConfig;
use bargain_engine::infrastructure::persistence::InMemoryListingStore;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real deployments set the environment directly.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // A malformed BARGAIN_* variable should stop the boot, not silently
    // fall back to defaults.
    let config = ServerConfig::from_env()?;

    let store = Arc::new(InMemoryListingStore::new());
    let service = NegotiationService::with_config(store, config.negotiation());
    let router = create_router(Arc::new(AppState::new(service)));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "bargain engine listening");
    axum::serve(listener, router).await?;
    Ok(())
}
