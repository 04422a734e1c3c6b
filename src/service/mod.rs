//! Guest and comment operations over a [`QueryExecutor`](crate::store::QueryExecutor).

mod comments;
mod guests;
mod validation;
pub use comments::CommentService;
pub use guests::GuestService;
pub use validation::{truthy, RequestValidator};
