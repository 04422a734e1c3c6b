//! Sanity checks on loaded settings, run once before the pool is built.

use crate::config::AppConfig;
use crate::error::ConfigError;
use axum::http::HeaderValue;

/// Reject settings that would produce a server that cannot work.
pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::InvalidValue {
            var: "PORT",
            reason: "must be non-zero".into(),
        });
    }
    if config.database.max_connections == 0 {
        return Err(ConfigError::InvalidValue {
            var: "DB_MAX_CONNECTIONS",
            reason: "pool needs at least one connection".into(),
        });
    }
    if config.database.acquire_timeout.is_zero() {
        return Err(ConfigError::InvalidValue {
            var: "DB_ACQUIRE_TIMEOUT_SECS",
            reason: "must be at least one second".into(),
        });
    }
    for origin in &config.cors.allowed_origins {
        if origin == "*" || HeaderValue::from_str(origin).is_err() {
            return Err(ConfigError::InvalidValue {
                var: "CORS_ALLOWED_ORIGINS",
                reason: format!("not a valid origin: {}", origin),
            });
        }
    }
    Ok(())
}
