//! Server startup and lifecycle.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{ServiceExt, extract::Request};
use sqlx::postgres::PgPoolOptions;
use tokio::{net::TcpListener, sync::mpsc};

use crate::application::services::{AnalyticsService, LinkService};
use crate::config::Config;
use crate::domain::click_worker::run_click_worker;
use crate::domain::repositories::{AnalyticsRepository, LinkRepository};
use crate::infrastructure::persistence::{PgAnalyticsRepository, PgLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::ip_hasher::IpHasher;

/// Connects to the database, runs migrations, spawns the click worker and
/// serves HTTP until shutdown.
///
/// # Errors
///
/// Fails when the database is unreachable, migrations fail, or the listen
/// address cannot be bound.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout_secs))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to the database")?;
    let pool = Arc::new(pool);

    sqlx::migrate!("./migrations")
        .run(pool.as_ref())
        .await
        .context("Failed to run database migrations")?;

    let link_repository: Arc<dyn LinkRepository> = Arc::new(PgLinkRepository::new(pool.clone()));
    let analytics_repository: Arc<dyn AnalyticsRepository> =
        Arc::new(PgAnalyticsRepository::new(pool.clone()));

    let (click_sender, click_receiver) = mpsc::channel(config.click_queue_capacity);
    tokio::spawn(run_click_worker(click_receiver, analytics_repository.clone()));

    let state = AppState {
        link_service: Arc::new(LinkService::new(link_repository)),
        analytics_service: Arc::new(AnalyticsService::new(analytics_repository)),
        ip_hasher: Arc::new(IpHasher::new(config.ip_hash_salt)),
        click_sender,
        base_url: config.base_url,
    };

    let app = app_router(state);

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;

    tracing::info!(addr = %config.listen_addr, "listening");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install shutdown signal handler");
        return;
    }
    tracing::info!("shutdown signal received");
}
