//! Typed process settings, populated by
//! [`AppConfig::from_env`](crate::config::AppConfig::from_env).

use crate::error::ConfigError;
use sqlx::mysql::{MySqlConnectOptions, MySqlSslMode};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub schema_bootstrap: SchemaBootstrap,
    pub cors: CorsSettings,
    pub log_format: LogFormat,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Store connection and pool settings.
#[derive(Clone)]
pub struct DatabaseSettings {
    /// Full `mysql://` URL. Takes precedence over the individual parts.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub ssl: bool,
    pub max_connections: u32,
    /// Upper bound on how long a request waits for a pooled connection.
    pub acquire_timeout: Duration,
}

impl DatabaseSettings {
    pub fn connect_options(&self) -> Result<MySqlConnectOptions, ConfigError> {
        let opts = match &self.url {
            Some(url) => MySqlConnectOptions::from_str(url).map_err(|e| ConfigError::InvalidValue {
                var: "DATABASE_URL",
                reason: e.to_string(),
            })?,
            None => MySqlConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.user)
                .password(&self.password)
                .database(&self.name),
        };
        Ok(if self.ssl {
            opts.ssl_mode(MySqlSslMode::Required)
        } else {
            opts
        })
    }

    /// Host and database name for log lines; never includes credentials.
    pub fn describe(&self) -> String {
        match &self.url {
            Some(_) => "DATABASE_URL".to_string(),
            None => format!("{}:{}/{}", self.host, self.port, self.name),
        }
    }
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("ssl", &self.ssl)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

/// What to do when creating the tables at startup fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SchemaBootstrap {
    /// Abort startup.
    #[default]
    Strict,
    /// Log and keep serving.
    Lenient,
}

impl FromStr for SchemaBootstrap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(SchemaBootstrap::Strict),
            "lenient" => Ok(SchemaBootstrap::Lenient),
            other => Err(format!("expected strict or lenient, got '{}'", other)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsSettings {
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("expected pretty or json, got '{}'", other)),
        }
    }
}
