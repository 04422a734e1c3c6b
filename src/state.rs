//! Shared application state for all routes.

use crate::store::QueryExecutor;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Owned by the composition root for the life of the process.
    pub store: Arc<dyn QueryExecutor>,
}

impl AppState {
    pub fn new(store: Arc<dyn QueryExecutor>) -> Self {
        AppState { store }
    }

    pub fn store(&self) -> &dyn QueryExecutor {
        self.store.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").field("store", &"QueryExecutor").finish()
    }
}
