//! Repository contract and the in-memory store behind it.

use std::collections::HashMap;

use breachdepth_core::{Credential, Edge, Node};

/// Which kind of entity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Node,
    SourceNode,
    TargetNode,
    Credential,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Node => "Node",
            Self::SourceNode => "Source node",
            Self::TargetNode => "Target node",
            Self::Credential => "Credential",
        };
        f.write_str(s)
    }
}

/// Errors from repository operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: EntityKind, id: String },

    #[error("{kind} with ID '{id}' already exists")]
    Conflict { kind: EntityKind, id: String },
}

impl StoreError {
    pub(crate) fn not_found(kind: EntityKind, id: &str) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub(crate) fn conflict(kind: EntityKind, id: &str) -> Self {
        Self::Conflict {
            kind,
            id: id.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Read-only view of the network consumed by the simulation engine.
///
/// Lookups return `None` for unknown ids; callers decide whether that is
/// an error.
pub trait Repository {
    fn get_node(&self, id: &str) -> Option<&Node>;

    fn get_credential(&self, id: &str) -> Option<&Credential>;

    /// All nodes in insertion order.
    fn get_all_nodes(&self) -> &[Node];

    /// All edges in insertion order.
    fn get_all_edges(&self) -> &[Edge];

    /// All credentials in insertion order.
    fn get_all_credentials(&self) -> &[Credential];
}

/// In-memory repository keyed by entity id.
///
/// Entities are kept in insertion order with a side index from id to
/// position, so listing is stable and lookups are O(1).
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    pub(crate) nodes: Vec<Node>,
    pub(crate) node_index: HashMap<String, usize>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) credentials: Vec<Credential>,
    pub(crate) credential_index: HashMap<String, usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Repository for InMemoryStore {
    fn get_node(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|&i| &self.nodes[i])
    }

    fn get_credential(&self, id: &str) -> Option<&Credential> {
        self.credential_index.get(id).map(|&i| &self.credentials[i])
    }

    fn get_all_nodes(&self) -> &[Node] {
        &self.nodes
    }

    fn get_all_edges(&self) -> &[Edge] {
        &self.edges
    }

    fn get_all_credentials(&self) -> &[Credential] {
        &self.credentials
    }
}
