//! Connectivity check: opens a single connection with the configured settings and runs `SELECT 1`.

use sqlx::mysql::MySqlConnection;
use sqlx::{Connection, Executor};
use std::process::ExitCode;
use wedding_rsvp::{telemetry, AppConfig, AppError};

async fn check(config: &AppConfig) -> Result<(), AppError> {
    let options = config.database.connect_options()?;
    let mut conn = MySqlConnection::connect_with(&options).await?;
    conn.execute("SELECT 1").await?;
    conn.close().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let _ = telemetry::try_init(config.log_format);

    let target = config.database.describe();
    match check(&config).await {
        Ok(()) => {
            tracing::info!(database = %target, "connected to database");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(database = %target, error = %e, "connection failed");
            ExitCode::FAILURE
        }
    }
}
