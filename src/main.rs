mod config;
mod error;
mod handlers;
mod models;
mod negotiation;
mod otel;
mod params;
mod routes;
mod state;
mod store;
mod telemetry;

use anyhow::Context;
use tokio::net::TcpListener;

use crate::{config::Config, state::AppState, store::CustomerStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let providers = telemetry::init_telemetry(&config)?;

    let meter = opentelemetry::global::meter("customer-service");
    let app = routes::create_router(AppState::new(CustomerStore::new(), &meter));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    if let Some(providers) = providers {
        tracing::info!("Flushing telemetry");
        providers.shutdown();
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for CTRL+C");
        return std::future::pending().await;
    }
    tracing::info!("Shutdown signal received");
}
