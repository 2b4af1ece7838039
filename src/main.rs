mod bot;
mod config;
mod data;
mod error;
mod model;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let store = startup::build_store(&config).await?;
    startup::seed_triggers(store.as_ref()).await?;

    // Start health endpoint in a separate task
    let health_port = config.health_port;
    tokio::spawn(async move {
        if let Err(e) = router::serve_health(health_port).await {
            tracing::error!("Health endpoint error: {}", e);
        }
    });

    tracing::info!("Starting lockbot");

    bot::start::start_bot(config, store).await
}
