//! Shared state for request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use breachdepth_sim::Simulator;
use breachdepth_store::InMemoryStore;

#[derive(Clone)]
pub struct AppState {
    /// The single entity store behind every endpoint.
    pub store: Arc<RwLock<InMemoryStore>>,
    /// Carries only size limits; each call builds fresh engine state.
    pub simulator: Simulator,
}

impl AppState {
    pub fn new(store: InMemoryStore, simulator: Simulator) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            simulator,
        }
    }
}
