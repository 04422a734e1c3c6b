//! Route tables and the middleware stack around them.

mod comments;
mod common;
mod guests;

pub use comments::comment_routes;
pub use common::common_routes;
pub use guests::guest_routes;

use crate::config::CorsSettings;
use crate::state::AppState;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Request bodies larger than this are refused.
pub const BODY_LIMIT_BYTES: usize = 100 * 1024;

fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);
    if settings.allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }
    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();
    layer.allow_origin(AllowOrigin::list(origins)).allow_credentials(true)
}

/// Every route the service exposes, wrapped in tracing, CORS and a body size limit.
pub fn app_router(state: AppState, cors: &CorsSettings) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(guest_routes(state.clone()))
        .merge(comment_routes(state))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}
