//! Load settings from the process environment (after merging `.env`).

use crate::config::types::*;
use crate::error::ConfigError;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    3306
}

fn default_db_user() -> String {
    "root".to_string()
}

fn default_db_name() -> String {
    "wedding_invitation".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout_secs() -> u64 {
    30
}

impl AppConfig {
    /// Read configuration from environment variables. A `.env` file in the working
    /// directory is merged first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let server = ServerSettings {
            host: get("HOST").unwrap_or_else(default_host),
            port: parse_or(&get, "PORT", default_port)?,
        };

        let database = DatabaseSettings {
            url: get("DATABASE_URL"),
            host: get("DB_HOST").unwrap_or_else(default_db_host),
            port: parse_or(&get, "DB_PORT", default_db_port)?,
            user: get("DB_USER").unwrap_or_else(default_db_user),
            password: lookup("DB_PASS").unwrap_or_default(),
            name: get("DB_NAME").unwrap_or_else(default_db_name),
            ssl: parse_bool(&get, "DB_SSL")?,
            max_connections: parse_or(&get, "DB_MAX_CONNECTIONS", default_max_connections)?,
            acquire_timeout: Duration::from_secs(parse_or(
                &get,
                "DB_ACQUIRE_TIMEOUT_SECS",
                default_acquire_timeout_secs,
            )?),
        };

        let cors = CorsSettings {
            allowed_origins: get("CORS_ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(str::trim)
                        .filter(|o| !o.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
        };

        Ok(AppConfig {
            server,
            database,
            schema_bootstrap: parse_or(&get, "SCHEMA_BOOTSTRAP", SchemaBootstrap::default)?,
            cors,
            log_format: parse_or(&get, "LOG_FORMAT", LogFormat::default)?,
        })
    }
}

fn parse_or<G, T, D>(get: &G, var: &'static str, default: D) -> Result<T, ConfigError>
where
    G: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
    D: FnOnce() -> T,
{
    match get(var) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            var,
            reason: e.to_string(),
        }),
        None => Ok(default()),
    }
}

fn parse_bool<G>(get: &G, var: &'static str) -> Result<bool, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    match get(var).map(|v| v.trim().to_lowercase()) {
        None => Ok(false),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidValue {
                var,
                reason: format!("expected a boolean, got '{}'", v),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = load(&[]).unwrap();
        assert_eq!(config.server.address(), "0.0.0.0:5000");
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.database.user, "root");
        assert_eq!(config.database.password, "");
        assert_eq!(config.database.name, "wedding_invitation");
        assert!(!config.database.ssl);
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.database.acquire_timeout, Duration::from_secs(30));
        assert_eq!(config.schema_bootstrap, SchemaBootstrap::Strict);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.cors.allowed_origins.is_empty());
        assert!(config.database.url.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("PORT", "8080"),
            ("DB_HOST", "railway.internal"),
            ("DB_PORT", "41234"),
            ("DB_PASS", "secret"),
            ("DB_SSL", "true"),
            ("DB_MAX_CONNECTIONS", "4"),
            ("DB_ACQUIRE_TIMEOUT_SECS", "5"),
            ("SCHEMA_BOOTSTRAP", "lenient"),
            ("LOG_FORMAT", "json"),
            ("CORS_ALLOWED_ORIGINS", "http://localhost:5173, https://wedding.example ,"),
        ])
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.host, "railway.internal");
        assert_eq!(config.database.port, 41234);
        assert_eq!(config.database.password, "secret");
        assert!(config.database.ssl);
        assert_eq!(config.database.max_connections, 4);
        assert_eq!(config.database.acquire_timeout, Duration::from_secs(5));
        assert_eq!(config.schema_bootstrap, SchemaBootstrap::Lenient);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(
            config.cors.allowed_origins,
            vec!["http://localhost:5173".to_string(), "https://wedding.example".to_string()]
        );
    }

    #[test]
    fn unparsable_value_is_an_error() {
        let err = load(&[("PORT", "fifty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: "PORT", .. }));
        let err = load(&[("DB_SSL", "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: "DB_SSL", .. }));
        let err = load(&[("SCHEMA_BOOTSTRAP", "yolo")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: "SCHEMA_BOOTSTRAP", .. }));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = load(&[("PORT", "  "), ("DB_NAME", "")]).unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.name, "wedding_invitation");
    }
}
