//! Wedding RSVP backend: guest registry and comment book over MySQL, served with axum.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod server;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::{validate, AppConfig};
pub use error::{AppError, ConfigError};
pub use migration::{bootstrap_schema, ensure_tables};
pub use models::{Comment, Guest, GuestStatus};
pub use routes::app_router;
pub use server::{create_app_state, run};
pub use state::AppState;
pub use store::{create_pool, ExecResult, MySqlStore, QueryExecutor, Row};
