//! Composition root: pool, schema bootstrap, router, listener.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::migration::bootstrap_schema;
use crate::routes::app_router;
use crate::state::AppState;
use crate::store::{create_pool, MySqlStore, QueryExecutor};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Build state from configuration. Tables are created before the state is handed out.
pub async fn create_app_state(config: &AppConfig) -> Result<AppState, AppError> {
    tracing::info!(
        database = %config.database.describe(),
        max_connections = config.database.max_connections,
        acquire_timeout_secs = config.database.acquire_timeout.as_secs(),
        "configuring store pool"
    );
    let pool = create_pool(&config.database)?;
    let store: Arc<dyn QueryExecutor> = Arc::new(MySqlStore::new(pool));
    bootstrap_schema(store.as_ref(), config.schema_bootstrap).await?;
    Ok(AppState::new(store))
}

/// Serve until Ctrl-C or SIGTERM.
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let state = create_app_state(&config).await?;
    let app = app_router(state, &config.cors);

    let listener = TcpListener::bind(config.server.address()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
