//! Server binary. `numerical-method-api migrate` creates the tables and exits.

use numerical_method_api::config::DEFAULT_LOG_FILTER;
use numerical_method_api::{
    apply_migrations, build_router, ensure_database_exists, AppConfig, AppState, PgRecordStore, Registry,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();

    let config = AppConfig::from_env()?;
    let registry = Registry::builtin()?;

    if std::env::args().skip(1).any(|arg| arg == "migrate") {
        ensure_database_exists(&config.database_url).await?;
        let store = PgRecordStore::connect(&config.database_url, config.max_connections).await?;
        apply_migrations(store.pool(), &registry).await?;
        tracing::info!(tables = registry.len(), "migration successful");
        return Ok(());
    }

    let store = PgRecordStore::connect(&config.database_url, config.max_connections).await?;
    tracing::info!("database connected");
    let state = AppState::new(Arc::new(store), registry);
    let app = build_router(state, config.body_limit);

    let listener = TcpListener::bind(config.bind_addr()?).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
