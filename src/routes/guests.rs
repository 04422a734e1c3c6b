//! Guest registry routes.

use crate::handlers::guests::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn guest_routes(state: AppState) -> Router {
    Router::new()
        .route("/guests", get(list).post(create))
        .route("/guests/:id", get(read).patch(update).delete(delete_handler))
        .with_state(state)
}
