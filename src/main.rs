//! Contact book server - main entry point.

use anyhow::Result;
use contact_book::repositories::{ContactRepository, JsonContactRepository};
use contact_book::server::{run_server, AppState};
use contact_book::Config;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging; LOG_LEVEL from the environment wins over config
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(data_path = %config.data_path, "starting contact book server");

    // Open the contact store
    let repository = match JsonContactRepository::open(&config.data_path).await {
        Ok(repo) => repo,
        Err(e) => {
            error!("Failed to open contact file {}: {}", config.data_path, e);
            return Err(e.into());
        }
    };
    info!(count = repository.len().await, "contacts loaded");

    let store = Arc::new(repository) as Arc<dyn ContactRepository>;
    let state = Arc::new(AppState::new(store));

    run_server(state, config.bind_addr).await?;

    info!("contact book server shutdown complete");
    Ok(())
}
