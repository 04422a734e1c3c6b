//! Query execution bridge: every statement the handlers issue goes through [`QueryExecutor`].
//! [`MySqlStore`] is the production implementation over a bounded `sqlx` pool.

use crate::config::DatabaseSettings;
use crate::error::ConfigError;
use crate::sql::BindValue;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::mysql::{MySqlArguments, MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::query::Query;
use sqlx::{Column, Executor, MySql, Row as _, TypeInfo};

/// One result row, keyed by column name.
pub type Row = serde_json::Map<String, Value>;

/// Outcome of a write statement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecResult {
    pub last_insert_id: u64,
    pub rows_affected: u64,
}

#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Run a read statement and return every row.
    async fn fetch_all(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, sqlx::Error>;

    /// Run a write statement.
    async fn execute(&self, sql: &str, params: &[Value]) -> Result<ExecResult, sqlx::Error>;

    /// Round-trip to the store without touching any table.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// Session setting applied to every pooled connection so the RSVP status ENUM rejects
/// unknown values instead of silently storing ''.
const STRICT_SQL_MODE: &str =
    "SET SESSION sql_mode = CONCAT(@@SESSION.sql_mode, ',STRICT_ALL_TABLES')";

/// Build the pool. Connections are opened lazily, so the process can start while the
/// store is still unreachable; callers waiting longer than `acquire_timeout` for a
/// connection get `sqlx::Error::PoolTimedOut`.
pub fn create_pool(settings: &DatabaseSettings) -> Result<MySqlPool, ConfigError> {
    let options = settings.connect_options()?;
    let pool = MySqlPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                conn.execute(STRICT_SQL_MODE).await?;
                Ok(())
            })
        })
        .connect_lazy_with(options);
    Ok(pool)
}

#[derive(Clone, Debug)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        MySqlStore { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    fn bind_all<'q>(sql: &'q str, params: &[Value]) -> Query<'q, MySql, MySqlArguments> {
        let mut query = sqlx::query(sql);
        for p in params {
            query = query.bind(BindValue::from_json(p));
        }
        query
    }
}

#[async_trait]
impl QueryExecutor for MySqlStore {
    async fn fetch_all(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, sqlx::Error> {
        tracing::debug!(sql = %sql, params = ?params, "query");
        let rows = Self::bind_all(sql, params).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(row_to_json).collect())
    }

    async fn execute(&self, sql: &str, params: &[Value]) -> Result<ExecResult, sqlx::Error> {
        tracing::debug!(sql = %sql, params = ?params, "execute");
        let done = Self::bind_all(sql, params).execute(&self.pool).await?;
        Ok(ExecResult {
            last_insert_id: done.last_insert_id(),
            rows_affected: done.rows_affected(),
        })
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

fn row_to_json(row: &MySqlRow) -> Row {
    let mut map = serde_json::Map::new();
    for col in row.columns() {
        let v = cell_to_value(row, col.ordinal(), col.type_info().name());
        map.insert(col.name().to_string(), v);
    }
    map
}

fn cell_to_value(row: &MySqlRow, idx: usize, type_name: &str) -> Value {
    if type_name == "BOOLEAN" {
        if let Ok(Some(b)) = row.try_get::<Option<bool>, _>(idx) {
            return Value::Bool(b);
        }
    }
    if let Ok(v) = row.try_get::<Option<i64>, _>(idx) {
        return v.map(|n| Value::Number(n.into())).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<u64>, _>(idx) {
        return v.map(|n| Value::Number(n.into())).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<f64>, _>(idx) {
        return v
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(idx) {
        return v.map(|d| Value::String(d.to_rfc3339())).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<chrono::NaiveDateTime>, _>(idx) {
        return v
            .map(|d| Value::String(d.and_utc().to_rfc3339()))
            .unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<String>, _>(idx) {
        return v.map(Value::String).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<serde_json::Value>, _>(idx) {
        return v.unwrap_or(Value::Null);
    }
    Value::Null
}
