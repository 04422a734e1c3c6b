//! Idempotent schema bootstrap for the `guests` and `comments` tables.

use crate::config::SchemaBootstrap;
use crate::store::QueryExecutor;
use sqlx::mysql::MySqlDatabaseError;

const CREATE_GUESTS: &str = r#"
CREATE TABLE IF NOT EXISTS `guests` (
    `id` INT AUTO_INCREMENT PRIMARY KEY,
    `name` VARCHAR(255) NOT NULL,
    `email` VARCHAR(255),
    `phone` VARCHAR(50),
    `status` ENUM('pending', 'confirmed', 'declined') NOT NULL DEFAULT 'pending',
    `created_at` TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    `updated_at` TIMESTAMP DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP
)
"#;

const CREATE_COMMENTS: &str = r#"
CREATE TABLE IF NOT EXISTS `comments` (
    `id` INT AUTO_INCREMENT PRIMARY KEY,
    `name` VARCHAR(255) NOT NULL,
    `message` TEXT NOT NULL,
    `is_present` BOOLEAN DEFAULT false,
    `created_at` TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Older deployments created `guests` without `updated_at`.
const ADD_GUESTS_UPDATED_AT: &str = "ALTER TABLE `guests` ADD COLUMN `updated_at` TIMESTAMP \
     DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP";

/// MySQL error number for "Duplicate column name".
const ER_DUP_FIELDNAME: u16 = 1060;

fn is_duplicate_column(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db) => db
            .try_downcast_ref::<MySqlDatabaseError>()
            .is_some_and(|m| m.number() == ER_DUP_FIELDNAME),
        _ => false,
    }
}

/// Create both tables if absent. Safe to run on every start.
pub async fn ensure_tables(store: &dyn QueryExecutor) -> Result<(), sqlx::Error> {
    store.execute(CREATE_GUESTS, &[]).await?;
    tracing::info!("ensured guests table exists");

    match store.execute(ADD_GUESTS_UPDATED_AT, &[]).await {
        Ok(_) => tracing::info!("added guests.updated_at"),
        Err(e) if is_duplicate_column(&e) => {}
        Err(e) => return Err(e),
    }

    store.execute(CREATE_COMMENTS, &[]).await?;
    tracing::info!("ensured comments table exists");
    Ok(())
}

/// Run [`ensure_tables`] under the configured failure policy.
pub async fn bootstrap_schema(
    store: &dyn QueryExecutor,
    policy: SchemaBootstrap,
) -> Result<(), sqlx::Error> {
    match ensure_tables(store).await {
        Ok(()) => Ok(()),
        Err(e) => match policy {
            SchemaBootstrap::Strict => {
                tracing::error!(error = %e, "table creation failed");
                Err(e)
            }
            SchemaBootstrap::Lenient => {
                tracing::warn!(
                    error = %e,
                    "table creation failed; continuing because SCHEMA_BOOTSTRAP=lenient"
                );
                Ok(())
            }
        },
    }
}
