//! Route configuration for the HTTP API.

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::handlers::*;
use crate::state::AppState;

/// Create the full router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        // Network modelling
        .route("/node", post(add_node_handler))
        .route("/edge", post(add_edge_handler))
        .route("/cred", post(add_credential_handler))
        .route("/graph", get(graph_handler))
        .route("/clear", delete(clear_handler))
        // Simulation
        .route("/simulate", post(simulate_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
