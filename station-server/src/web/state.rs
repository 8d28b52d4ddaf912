//! Application state for the web layer.

use std::sync::Arc;

use crate::stations::{Inventory, StationRegistry};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Station registry serving the current snapshot
    pub registry: Arc<StationRegistry<Inventory>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(registry: StationRegistry<Inventory>) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}
