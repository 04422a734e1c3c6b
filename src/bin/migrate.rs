//! One-shot schema setup: creates the tables if they are missing, then exits.

use std::process::ExitCode;
use wedding_rsvp::{create_pool, ensure_tables, telemetry, validate, AppConfig, MySqlStore};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::from_env().and_then(|c| validate(&c).map(|()| c)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let _ = telemetry::try_init(config.log_format);

    let pool = match create_pool(&config.database) {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(error = %e, "invalid database settings");
            return ExitCode::FAILURE;
        }
    };
    let store = MySqlStore::new(pool);
    let result = ensure_tables(&store).await;
    store.pool().close().await;

    match result {
        Ok(()) => {
            tracing::info!(database = %config.database.describe(), "migration completed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "migration failed");
            ExitCode::FAILURE
        }
    }
}
