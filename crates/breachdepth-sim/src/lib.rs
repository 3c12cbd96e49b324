//! breachdepth-sim: lateral-movement attack simulation.
//!
//! Builds a directed graph from the repository, then runs a worklist
//! exploration that grows the attacker's credential set and compromised
//! node set together until neither can grow. Every run is independent:
//! the `Simulator` only carries size limits, never run state.

pub mod aggregate;
pub mod engine;
pub mod error;
pub mod graph;
pub mod privilege;
pub mod types;

pub use error::SimulateError;
pub use types::{Scenario, ScenarioSummary};

use std::time::Instant;

use breachdepth_core::{HackerProfile, SimulationConfig, SimulationResult};
use breachdepth_store::{InMemoryStore, Repository, StoreError};
use uuid::Uuid;

use crate::aggregate::ResultStats;
use crate::graph::AttackGraph;

/// Entry point for running attack simulations against a repository.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    limits: SimulationConfig,
}

impl Simulator {
    /// Create a simulator with default size limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom size limits.
    pub fn with_limits(mut self, limits: SimulationConfig) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> &SimulationConfig {
        &self.limits
    }

    /// Simulate `profile` against the current contents of `repo`.
    ///
    /// Starting credentials are not checked for existence here; unknown ids
    /// are carried in `credentials_obtained` but open nothing.
    pub fn simulate<R>(&self, repo: &R, profile: &HackerProfile) -> error::Result<SimulationResult>
    where
        R: Repository + ?Sized,
    {
        self.check_limits(repo)?;

        let span = tracing::info_span!(
            "simulation",
            run_id = %Uuid::new_v4(),
            attacker = %profile.name,
        );
        let _enter = span.enter();
        let start = Instant::now();

        let graph = AttackGraph::from_records(repo.get_all_nodes(), repo.get_all_edges());
        tracing::debug!(
            nodes = graph.node_count(),
            arcs = graph.arc_count(),
            starting_credentials = profile.starting_credentials.len(),
            "Built attack graph"
        );

        let state = engine::run_attack(repo, &graph, &profile.starting_credentials);
        tracing::debug!(attempts = state.attempts, "Worklist drained");
        let result = aggregate::aggregate(state, &graph);

        let stats = ResultStats::from_result(&result, &graph);
        tracing::info!(
            reachable = stats.reachable,
            total_nodes = stats.total_nodes,
            total_depth = stats.total_depth,
            credentials_obtained = stats.credentials_obtained,
            credentials_harvested = stats.credentials_harvested,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Simulation complete"
        );

        Ok(result)
    }

    fn check_limits<R>(&self, repo: &R) -> error::Result<()>
    where
        R: Repository + ?Sized,
    {
        let nodes = repo.get_all_nodes().len();
        if nodes > self.limits.max_nodes {
            return Err(SimulateError::TooManyNodes {
                nodes,
                max: self.limits.max_nodes,
            });
        }

        let credentials = repo.get_all_credentials().len();
        if credentials > self.limits.max_credentials {
            return Err(SimulateError::TooManyCredentials {
                credentials,
                max: self.limits.max_credentials,
            });
        }

        Ok(())
    }
}

/// Load a scenario into a fresh store through the repository's validation.
///
/// Fails on the first invalid entity or missing starting credential.
pub fn load_scenario(scenario: Scenario) -> Result<(InMemoryStore, HackerProfile), StoreError> {
    let mut store = InMemoryStore::new();
    store.load(scenario.graph)?;
    store.check_profile(&scenario.profile)?;
    Ok((store, scenario.profile))
}

/// Entity counts for a loaded scenario.
pub fn summarize(store: &InMemoryStore, profile: &HackerProfile) -> ScenarioSummary {
    ScenarioSummary {
        nodes: store.node_count(),
        edges: store.edge_count(),
        credentials: store.credential_count(),
        starting_credentials: profile.starting_credentials.len(),
    }
}
