//! Input and report types for the one-shot CLI.

use serde::{Deserialize, Serialize};

use breachdepth_core::{GraphData, HackerProfile};

/// A self-contained simulation input: the network plus the attacker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub graph: GraphData,
    pub profile: HackerProfile,
}

/// Entity counts reported after a scenario loads cleanly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScenarioSummary {
    pub nodes: usize,
    pub edges: usize,
    pub credentials: usize,
    pub starting_credentials: usize,
}
