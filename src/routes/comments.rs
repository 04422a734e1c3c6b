//! Comment book routes.

use crate::handlers::comments::{create, delete as delete_handler, list};
use crate::state::AppState;
use axum::{routing::delete, routing::get, Router};

pub fn comment_routes(state: AppState) -> Router {
    Router::new()
        .route("/comments", get(list).post(create))
        .route("/comments/:id", delete(delete_handler))
        .with_state(state)
}
