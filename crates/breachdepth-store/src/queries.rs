//! Read operations on the in-memory store.

use breachdepth_core::{GraphData, HackerProfile};

use crate::store::{EntityKind, InMemoryStore, Repository, Result, StoreError};

impl InMemoryStore {
    // ── Counts ───────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn credential_count(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty() && self.credentials.is_empty()
    }

    // ── Existence Checks ─────────────────────────────────────────

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn contains_credential(&self, id: &str) -> bool {
        self.credential_index.contains_key(id)
    }

    /// Ensure every starting credential of an attacker exists.
    ///
    /// Reports the first missing id in profile order.
    pub fn check_profile(&self, profile: &HackerProfile) -> Result<()> {
        match profile
            .starting_credentials
            .iter()
            .find(|id| !self.contains_credential(id))
        {
            Some(missing) => Err(StoreError::not_found(EntityKind::Credential, missing)),
            None => Ok(()),
        }
    }

    // ── Snapshot ─────────────────────────────────────────────────

    /// Copy of every stored entity, in insertion order.
    pub fn snapshot(&self) -> GraphData {
        GraphData {
            nodes: self.get_all_nodes().to_vec(),
            edges: self.get_all_edges().to_vec(),
            credentials: self.get_all_credentials().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breachdepth_core::{Credential, Node, PrivilegeLevel};

    fn make_node(id: &str) -> Node {
        Node {
            id: id.to_string(),
            role: "host".to_string(),
            services: vec![],
            credentials_stored: vec![],
        }
    }

    fn seeded_store() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        store.add_node(make_node("a")).unwrap();
        store
            .add_credential(Credential {
                id: "c0".to_string(),
                privilege_level: PrivilegeLevel::User,
                valid_on_nodes: vec!["a".to_string()],
            })
            .unwrap();
        store
    }

    #[test]
    fn test_check_profile_accepts_known_credentials() {
        let store = seeded_store();
        let profile = HackerProfile {
            name: "eve".to_string(),
            starting_credentials: vec!["c0".to_string()],
        };
        assert!(store.check_profile(&profile).is_ok());
    }

    #[test]
    fn test_check_profile_reports_first_missing() {
        let store = seeded_store();
        let profile = HackerProfile {
            name: "eve".to_string(),
            starting_credentials: vec!["c0".to_string(), "ghost".to_string(), "x".to_string()],
        };
        let err = store.check_profile(&profile).unwrap_err();
        assert_eq!(err, StoreError::not_found(EntityKind::Credential, "ghost"));
    }

    #[test]
    fn test_empty_profile_is_valid() {
        let store = InMemoryStore::new();
        let profile = HackerProfile {
            name: "nobody".to_string(),
            starting_credentials: vec![],
        };
        assert!(store.check_profile(&profile).is_ok());
    }

    #[test]
    fn test_snapshot_preserves_order() {
        let mut store = seeded_store();
        store.add_node(make_node("b")).unwrap();
        store.add_node(make_node("0")).unwrap();

        let snapshot = store.snapshot();
        let ids: Vec<&str> = snapshot.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "0"]);
        assert_eq!(snapshot.credentials.len(), 1);
        assert!(snapshot.edges.is_empty());
    }

    #[test]
    fn test_counts() {
        let store = seeded_store();
        assert_eq!(store.node_count(), 1);
        assert_eq!(store.edge_count(), 0);
        assert_eq!(store.credential_count(), 1);
        assert!(!store.is_empty());
        assert!(InMemoryStore::new().is_empty());
    }
}
