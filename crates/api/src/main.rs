//! Tempo - personal activity tracking service
//!
//! Main entry point: loads configuration, wires the application context,
//! starts the background reminder scheduler, and serves the HTTP API until
//! interrupted.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tempo_api::{router, AppContext};
use tempo_infra::{ReminderScheduler, ReminderSchedulerConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging FIRST so .env loading is visible
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(err) => info!(%err, "No .env file loaded"),
    }

    let config = tempo_infra::config::load().context("failed to load configuration")?;
    info!(
        data_dir = %config.storage.data_dir,
        tick_secs = config.scheduler.tick_seconds,
        "Tempo starting"
    );

    let scheduler_config = ReminderSchedulerConfig {
        // A zero interval would make the timer spin; clamp to one second.
        tick: Duration::from_secs(config.scheduler.tick_seconds.max(1)),
        ..ReminderSchedulerConfig::default()
    };
    let scheduler_enabled = config.scheduler.enabled;

    let ctx = Arc::new(AppContext::new(config));

    let mut scheduler = ReminderScheduler::new(ctx.reminders.clone(), scheduler_config);
    if scheduler_enabled {
        scheduler.start().await.context("failed to start reminder scheduler")?;
    } else {
        warn!("reminder scheduler disabled by configuration");
    }

    let addr = format!("{}:{}", ctx.config.server.host, ctx.config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "Tempo listening");

    axum::serve(listener, router(ctx))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    if scheduler.is_running() {
        scheduler.stop().await.context("failed to stop reminder scheduler")?;
    }
    info!("Tempo stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "failed to listen for shutdown signal");
    }
    info!("shutdown signal received");
}
