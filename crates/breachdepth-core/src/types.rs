//! Core domain types for breachdepth.
//!
//! These types describe the network under test and the outcome of an attack
//! simulation. Field names follow the JSON wire format used by the HTTP API.

use serde::{Deserialize, Serialize};

// ── Privilege ─────────────────────────────────────────────────────

/// Access tier granted by a credential on a node.
///
/// Tiers are totally ordered: `None < User < Admin < Root`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PrivilegeLevel {
    #[default]
    None,
    User,
    Admin,
    Root,
}

impl PrivilegeLevel {
    /// Numeric rank used for every privilege comparison.
    pub fn rank(self) -> u8 {
        match self {
            Self::None => 0,
            Self::User => 1,
            Self::Admin => 2,
            Self::Root => 3,
        }
    }
}

impl std::fmt::Display for PrivilegeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::User => "user",
            Self::Admin => "admin",
            Self::Root => "root",
        };
        f.write_str(s)
    }
}

// ── Network Entities ──────────────────────────────────────────────

/// A machine in the network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    /// Free-form label, e.g. "webserver" or "database".
    pub role: String,
    /// Informational only; the engine never reads it.
    #[serde(default)]
    pub services: Vec<String>,
    /// Credential ids an attacker finds here once the node is compromised.
    #[serde(default)]
    pub credentials_stored: Vec<String>,
}

/// A network connection between two nodes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Edge {
    pub source: String,
    pub target: String,
    #[serde(default = "default_bidirectional")]
    pub bidirectional: bool,
}

fn default_bidirectional() -> bool {
    true
}

/// An access token valid on a fixed set of nodes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credential {
    pub id: String,
    pub privilege_level: PrivilegeLevel,
    pub valid_on_nodes: Vec<String>,
}

impl Credential {
    /// Whether presenting this credential grants access to `node_id`.
    pub fn is_valid_on(&self, node_id: &str) -> bool {
        self.valid_on_nodes.iter().any(|n| n == node_id)
    }
}

/// The attacker: a name plus the credentials they start with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HackerProfile {
    pub name: String,
    pub starting_credentials: Vec<String>,
}

/// Full repository snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphData {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub credentials: Vec<Credential>,
}

// ── Simulation Output ─────────────────────────────────────────────

/// Audit record for one node, written at the moment of its first compromise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttackPath {
    pub node_id: String,
    /// Best tier achieved from the credentials that granted access.
    pub privilege: PrivilegeLevel,
    pub credentials_used: Vec<String>,
    pub credentials_harvested: Vec<String>,
}

/// Outcome of one attack simulation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimulationResult {
    /// Compromised node ids, in compromise order.
    pub reachable_nodes: Vec<String>,
    /// One entry per compromised node, in compromise order.
    pub attack_paths: Vec<AttackPath>,
    /// Deepest hop count at which a node was compromised.
    pub total_depth: usize,
    /// Starting plus harvested credential ids, in acquisition order.
    pub credentials_obtained: Vec<String>,
}

impl SimulationResult {
    /// Look up the attack path recorded for a node.
    pub fn path_for(&self, node_id: &str) -> Option<&AttackPath> {
        self.attack_paths.iter().find(|p| p.node_id == node_id)
    }
}
