//! Tracing subscriber setup.

use crate::config::LogFormat;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str =
    "wedding_rsvp=info,migrate=info,check_connection=info,tower_http=info";

#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("tracing subscriber already initialized: {0}")]
    AlreadyInitialized(String),
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Safe to call more than once; later calls return an error.
pub fn try_init(format: LogFormat) -> Result<(), TracingError> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());
    let result = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|e| TracingError::AlreadyInitialized(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_reports_error() {
        let _ = try_init(LogFormat::Pretty);
        assert!(try_init(LogFormat::Json).is_err());
    }
}
