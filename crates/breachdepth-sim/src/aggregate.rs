//! Projection of the engine's terminal state into a `SimulationResult`.

use breachdepth_core::SimulationResult;

use crate::engine::EngineState;
use crate::graph::AttackGraph;

/// Fold a finished run into the public result shape.
///
/// `reachable_nodes` and `attack_paths` share compromise order.
pub fn aggregate(state: EngineState, graph: &AttackGraph) -> SimulationResult {
    let reachable_nodes = state
        .compromised
        .iter()
        .map(|&idx| graph.node_ids[idx].clone())
        .collect();

    SimulationResult {
        reachable_nodes,
        attack_paths: state.attack_paths,
        total_depth: state.total_depth,
        credentials_obtained: state.available_credentials,
    }
}

/// Summary figures for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultStats {
    pub reachable: usize,
    pub total_nodes: usize,
    pub credentials_obtained: usize,
    pub credentials_harvested: usize,
    pub total_depth: usize,
}

impl ResultStats {
    pub fn from_result(result: &SimulationResult, graph: &AttackGraph) -> Self {
        Self {
            reachable: result.reachable_nodes.len(),
            total_nodes: graph.node_count(),
            credentials_obtained: result.credentials_obtained.len(),
            credentials_harvested: result
                .attack_paths
                .iter()
                .map(|p| p.credentials_harvested.len())
                .sum(),
            total_depth: result.total_depth,
        }
    }
}
