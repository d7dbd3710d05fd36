use crate::config::AppConfig;
use crate::router::respond;
use crate::state::AppState;
use anyhow::{Context, Result};
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod domain;
mod errors;
mod listings;
mod media;
mod responses;
mod router;
mod search;
mod state;
mod templates;
mod upstream;

#[cfg(test)]
mod tests;

fn main() -> Result<()> {
    // 1️⃣ Logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,realty_site=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2️⃣ Configuration and shared state
    let config = AppConfig::from_env().context("Failed to load configuration")?;
    if config.api_token.is_none() {
        tracing::warn!("TREB_API_TOKEN is not set; upstream calls will fail");
    }

    let addr = config.bind_addr;
    let workers = config.max_workers;
    let state = AppState::new(config).context("Failed to build upstream client")?;

    // 3️⃣ Serve requests, passing the state into the closure
    tracing::info!(%addr, workers, mock = state.config.use_mock_data, "starting server");

    Server::bind(&addr)
        .max_workers(workers)
        .serve(move |req, _info| respond(req, &state))
        .context("Server ended with error")?;

    tracing::info!("server shut down cleanly");
    Ok(())
}
