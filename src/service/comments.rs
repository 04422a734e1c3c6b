//! Comment book: list, append, delete. Comments are never edited.

use super::validation::ValidComment;
use crate::error::AppError;
use crate::models::Comment;
use crate::sql::{delete, insert, select_list, COMMENTS};
use crate::store::{QueryExecutor, Row};
use serde_json::Value;

pub struct CommentService;

impl CommentService {
    pub async fn list(store: &dyn QueryExecutor) -> Result<Vec<Comment>, AppError> {
        let q = select_list(&COMMENTS);
        let rows = store.fetch_all(&q.sql, &q.params).await?;
        rows.into_iter().map(to_comment).collect()
    }

    pub async fn create(
        store: &dyn QueryExecutor,
        comment: ValidComment,
    ) -> Result<Comment, AppError> {
        let q = insert(
            &COMMENTS,
            &[
                ("name", Value::String(comment.name.clone())),
                ("message", Value::String(comment.message.clone())),
                ("is_present", Value::Bool(comment.is_present)),
            ],
        );
        let done = store.execute(&q.sql, &q.params).await?;
        tracing::info!(id = done.last_insert_id, "comment created");
        Ok(Comment {
            id: done.last_insert_id,
            name: comment.name,
            message: comment.message,
            is_present: comment.is_present,
            created_at: None,
        })
    }

    /// Delete by id. Zero when no such comment exists.
    pub async fn delete(store: &dyn QueryExecutor, id: &str) -> Result<u64, AppError> {
        let q = delete(&COMMENTS, id);
        let done = store.execute(&q.sql, &q.params).await?;
        Ok(done.rows_affected)
    }
}

fn to_comment(row: Row) -> Result<Comment, AppError> {
    Ok(serde_json::from_value(Value::Object(row))?)
}
