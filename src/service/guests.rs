//! Guest registry: list, read, create, partial update, delete.

use super::validation::ValidGuest;
use crate::error::AppError;
use crate::models::{Guest, GuestPatch, GuestStatus};
use crate::sql::{delete, insert, select_by_id, select_list, update, GUESTS};
use crate::store::{QueryExecutor, Row};
use serde_json::Value;

pub struct GuestService;

impl GuestService {
    /// All guests, newest first.
    pub async fn list(store: &dyn QueryExecutor) -> Result<Vec<Guest>, AppError> {
        let q = select_list(&GUESTS);
        let rows = store.fetch_all(&q.sql, &q.params).await?;
        rows.into_iter().map(to_guest).collect()
    }

    /// First guest matching `id`, if any.
    pub async fn read(store: &dyn QueryExecutor, id: &str) -> Result<Option<Guest>, AppError> {
        let q = select_by_id(&GUESTS, id);
        let rows = store.fetch_all(&q.sql, &q.params).await?;
        rows.into_iter().next().map(to_guest).transpose()
    }

    /// Insert one guest. Status is left to the column default, which is always pending.
    pub async fn create(store: &dyn QueryExecutor, guest: ValidGuest) -> Result<Guest, AppError> {
        let q = insert(
            &GUESTS,
            &[
                ("name", Value::String(guest.name.clone())),
                ("email", guest.email.clone().map(Value::String).unwrap_or(Value::Null)),
                ("phone", guest.phone.clone().map(Value::String).unwrap_or(Value::Null)),
            ],
        );
        let done = store.execute(&q.sql, &q.params).await?;
        let created = Guest {
            id: done.last_insert_id,
            name: guest.name,
            email: guest.email,
            phone: guest.phone,
            status: GuestStatus::Pending,
            created_at: None,
            updated_at: None,
        };
        tracing::info!(id = created.id, status = created.status.as_str(), "guest created");
        Ok(created)
    }

    /// Apply a validated patch. Returns the number of rows the store reports as affected.
    pub async fn update(
        store: &dyn QueryExecutor,
        id: &str,
        patch: &GuestPatch,
    ) -> Result<u64, AppError> {
        let q = update(&GUESTS, &patch.assignments(), id)
            .ok_or_else(|| AppError::validation(super::validation::NO_FIELDS))?;
        let done = store.execute(&q.sql, &q.params).await?;
        tracing::debug!(id = %id, rows = done.rows_affected, "guest updated");
        Ok(done.rows_affected)
    }

    /// Delete by id. Zero when no such guest exists.
    pub async fn delete(store: &dyn QueryExecutor, id: &str) -> Result<u64, AppError> {
        let q = delete(&GUESTS, id);
        let done = store.execute(&q.sql, &q.params).await?;
        Ok(done.rows_affected)
    }
}

fn to_guest(row: Row) -> Result<Guest, AppError> {
    Ok(serde_json::from_value(Value::Object(row))?)
}
