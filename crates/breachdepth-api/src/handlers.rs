//! HTTP handlers for the breachdepth API.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use breachdepth_core::{Credential, Edge, GraphData, HackerProfile, Node, SimulationResult};

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Body returned by every successful write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusMessage {
    pub status: String,
    pub message: String,
}

impl StatusMessage {
    fn success(message: String) -> Json<Self> {
        Json(Self {
            status: "success".to_string(),
            message,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    /// Route to one-line description.
    pub endpoints: BTreeMap<String, String>,
}

pub async fn root_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Attack Depth Simulator API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: [
            ("POST /node", "Add a node to the network"),
            ("POST /edge", "Add an edge between nodes"),
            ("POST /cred", "Add a credential"),
            ("POST /simulate", "Run attack simulation"),
            ("GET /graph", "Get complete graph data"),
            ("DELETE /clear", "Clear all data"),
            ("GET /health", "Service health check"),
        ]
        .iter()
        .map(|(route, about)| (route.to_string(), about.to_string()))
        .collect(),
    })
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

pub async fn add_node_handler(
    State(state): State<AppState>,
    Json(node): Json<Node>,
) -> Result<Json<StatusMessage>> {
    let id = node.id.clone();
    state.store.write().await.add_node(node)?;
    Ok(StatusMessage::success(format!("Node '{id}' added successfully")))
}

pub async fn add_edge_handler(
    State(state): State<AppState>,
    Json(edge): Json<Edge>,
) -> Result<Json<StatusMessage>> {
    let message = format!(
        "Edge from '{}' to '{}' added successfully",
        edge.source, edge.target
    );
    state.store.write().await.add_edge(edge)?;
    Ok(StatusMessage::success(message))
}

pub async fn add_credential_handler(
    State(state): State<AppState>,
    Json(credential): Json<Credential>,
) -> Result<Json<StatusMessage>> {
    let id = credential.id.clone();
    state.store.write().await.add_credential(credential)?;
    Ok(StatusMessage::success(format!(
        "Credential '{id}' added successfully"
    )))
}

/// Run one simulation against the current store contents.
///
/// The engine runs on the blocking pool while holding a read guard, so
/// writes wait for it and other reads proceed.
pub async fn simulate_handler(
    State(state): State<AppState>,
    Json(profile): Json<HackerProfile>,
) -> Result<Json<SimulationResult>> {
    let store = state.store.clone().read_owned().await;
    store.check_profile(&profile)?;

    let simulator = state.simulator.clone();
    let result = tokio::task::spawn_blocking(move || simulator.simulate(&*store, &profile))
        .await
        .map_err(|e| ApiError::Internal(format!("Simulation task failed: {e}")))??;

    Ok(Json(result))
}

pub async fn graph_handler(State(state): State<AppState>) -> Json<GraphData> {
    Json(state.store.read().await.snapshot())
}

pub async fn clear_handler(State(state): State<AppState>) -> Json<StatusMessage> {
    state.store.write().await.clear();
    StatusMessage::success("All data cleared successfully".to_string())
}
