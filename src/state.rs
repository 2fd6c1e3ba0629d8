//! Shared application state for all routes.

use crate::store::Storage;
use std::sync::Arc;

/// Cheap to clone; holds the injected storage handle and nothing request-scoped.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}
