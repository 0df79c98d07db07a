//! Shared application state.
//!
//! DESIGN
//! ======
//! The corpus is loaded once at start-up and never changes, so handlers
//! share it behind an `Arc` without locking.

use std::sync::Arc;

use cookbook::DocSet;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone, Default)]
pub struct AppState {
    pub docs: Arc<DocSet>,
}

impl AppState {
    #[must_use]
    pub fn new(docs: DocSet) -> Self {
        Self { docs: Arc::new(docs) }
    }
}
