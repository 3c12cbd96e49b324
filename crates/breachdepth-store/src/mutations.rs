//! Write operations on the in-memory store.
//!
//! Every write validates references first and leaves the store untouched
//! when it fails.

use breachdepth_core::{Credential, Edge, GraphData, Node};

use crate::store::{EntityKind, InMemoryStore, Result, StoreError};

impl InMemoryStore {
    /// Insert a node. Fails if the id is taken.
    pub fn add_node(&mut self, node: Node) -> Result<()> {
        if self.contains_node(&node.id) {
            return Err(StoreError::conflict(EntityKind::Node, &node.id));
        }

        self.node_index.insert(node.id.clone(), self.nodes.len());
        tracing::debug!(node_id = %node.id, role = %node.role, "Node added");
        self.nodes.push(node);
        Ok(())
    }

    /// Insert an edge. Both endpoints must exist; the source is checked first.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        if !self.contains_node(&edge.source) {
            return Err(StoreError::not_found(EntityKind::SourceNode, &edge.source));
        }
        if !self.contains_node(&edge.target) {
            return Err(StoreError::not_found(EntityKind::TargetNode, &edge.target));
        }

        tracing::debug!(
            source = %edge.source,
            target = %edge.target,
            bidirectional = edge.bidirectional,
            "Edge added"
        );
        self.edges.push(edge);
        Ok(())
    }

    /// Insert a credential. Fails if the id is taken or any node it is
    /// valid on does not exist.
    pub fn add_credential(&mut self, credential: Credential) -> Result<()> {
        if self.contains_credential(&credential.id) {
            return Err(StoreError::conflict(EntityKind::Credential, &credential.id));
        }
        if let Some(missing) = credential
            .valid_on_nodes
            .iter()
            .find(|id| !self.contains_node(id))
        {
            return Err(StoreError::not_found(EntityKind::Node, missing));
        }

        self.credential_index
            .insert(credential.id.clone(), self.credentials.len());
        tracing::debug!(
            credential_id = %credential.id,
            privilege = %credential.privilege_level,
            "Credential added"
        );
        self.credentials.push(credential);
        Ok(())
    }

    /// Remove every stored entity.
    pub fn clear(&mut self) {
        let (nodes, edges, credentials) = (self.nodes.len(), self.edges.len(), self.credentials.len());
        self.nodes.clear();
        self.node_index.clear();
        self.edges.clear();
        self.credentials.clear();
        self.credential_index.clear();
        tracing::info!(nodes, edges, credentials, "Store cleared");
    }

    /// Bulk insert a network through the same validation as single writes.
    ///
    /// Nodes go first, then credentials, then edges. Stops at the first
    /// rejected entity; entities inserted before it remain.
    pub fn load(&mut self, data: GraphData) -> Result<()> {
        for node in data.nodes {
            self.add_node(node)?;
        }
        for credential in data.credentials {
            self.add_credential(credential)?;
        }
        for edge in data.edges {
            self.add_edge(edge)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Repository;
    use breachdepth_core::PrivilegeLevel;

    fn make_node(id: &str, stored: &[&str]) -> Node {
        Node {
            id: id.to_string(),
            role: "host".to_string(),
            services: vec!["ssh".to_string()],
            credentials_stored: stored.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn make_edge(source: &str, target: &str, bidirectional: bool) -> Edge {
        Edge {
            source: source.to_string(),
            target: target.to_string(),
            bidirectional,
        }
    }

    fn make_cred(id: &str, level: PrivilegeLevel, valid_on: &[&str]) -> Credential {
        Credential {
            id: id.to_string(),
            privilege_level: level,
            valid_on_nodes: valid_on.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_add_node_and_lookup() {
        let mut store = InMemoryStore::new();
        store.add_node(make_node("web-1", &["db-creds"])).unwrap();

        let node = store.get_node("web-1").unwrap();
        assert_eq!(node.credentials_stored, vec!["db-creds".to_string()]);
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let mut store = InMemoryStore::new();
        store.add_node(make_node("web-1", &[])).unwrap();

        let err = store.add_node(make_node("web-1", &["x"])).unwrap_err();
        assert_eq!(err, StoreError::conflict(EntityKind::Node, "web-1"));
        // First write wins.
        assert!(store.get_node("web-1").unwrap().credentials_stored.is_empty());
        assert_eq!(store.node_count(), 1);
    }

    #[test]
    fn test_node_may_reference_unknown_credentials() {
        let mut store = InMemoryStore::new();
        assert!(store.add_node(make_node("web-1", &["not-yet-defined"])).is_ok());
    }

    #[test]
    fn test_edge_requires_source_then_target() {
        let mut store = InMemoryStore::new();
        store.add_node(make_node("a", &[])).unwrap();

        let err = store.add_edge(make_edge("x", "y", true)).unwrap_err();
        assert_eq!(err, StoreError::not_found(EntityKind::SourceNode, "x"));

        let err = store.add_edge(make_edge("a", "y", true)).unwrap_err();
        assert_eq!(err, StoreError::not_found(EntityKind::TargetNode, "y"));
        assert_eq!(store.edge_count(), 0);

        store.add_node(make_node("y", &[])).unwrap();
        store.add_edge(make_edge("a", "y", false)).unwrap();
        assert_eq!(store.get_all_edges(), &[make_edge("a", "y", false)]);
    }

    #[test]
    fn test_duplicate_edges_are_kept() {
        let mut store = InMemoryStore::new();
        store.add_node(make_node("a", &[])).unwrap();
        store.add_node(make_node("b", &[])).unwrap();
        store.add_edge(make_edge("a", "b", true)).unwrap();
        store.add_edge(make_edge("a", "b", true)).unwrap();
        assert_eq!(store.edge_count(), 2);
    }

    #[test]
    fn test_credential_conflict_checked_before_nodes() {
        let mut store = InMemoryStore::new();
        store.add_node(make_node("a", &[])).unwrap();
        store
            .add_credential(make_cred("c0", PrivilegeLevel::User, &["a"]))
            .unwrap();

        let err = store
            .add_credential(make_cred("c0", PrivilegeLevel::Root, &["missing"]))
            .unwrap_err();
        assert_eq!(err, StoreError::conflict(EntityKind::Credential, "c0"));
    }

    #[test]
    fn test_credential_requires_valid_nodes() {
        let mut store = InMemoryStore::new();
        store.add_node(make_node("a", &[])).unwrap();

        let err = store
            .add_credential(make_cred("c0", PrivilegeLevel::User, &["a", "b", "c"]))
            .unwrap_err();
        assert_eq!(err, StoreError::not_found(EntityKind::Node, "b"));
        assert!(store.get_credential("c0").is_none());
    }

    #[test]
    fn test_clear_wipes_everything() {
        let mut store = InMemoryStore::new();
        store.add_node(make_node("a", &[])).unwrap();
        store.add_node(make_node("b", &[])).unwrap();
        store.add_edge(make_edge("a", "b", true)).unwrap();
        store
            .add_credential(make_cred("c0", PrivilegeLevel::User, &["a"]))
            .unwrap();

        store.clear();
        assert!(store.is_empty());
        assert!(store.get_node("a").is_none());
        assert!(store.get_credential("c0").is_none());

        // Ids are free again after a clear.
        assert!(store.add_node(make_node("a", &[])).is_ok());
    }

    #[test]
    fn test_load_orders_nodes_credentials_edges() {
        let data = GraphData {
            nodes: vec![make_node("a", &["c1"]), make_node("b", &[])],
            edges: vec![make_edge("a", "b", true)],
            credentials: vec![
                make_cred("c0", PrivilegeLevel::User, &["a"]),
                make_cred("c1", PrivilegeLevel::Admin, &["b"]),
            ],
        };

        let mut store = InMemoryStore::new();
        store.load(data.clone()).unwrap();
        assert_eq!(store.snapshot(), data);
    }

    #[test]
    fn test_load_stops_at_first_error() {
        let data = GraphData {
            nodes: vec![make_node("a", &[])],
            edges: vec![make_edge("a", "ghost", true)],
            credentials: vec![make_cred("c0", PrivilegeLevel::User, &["a"])],
        };

        let mut store = InMemoryStore::new();
        let err = store.load(data).unwrap_err();
        assert_eq!(err, StoreError::not_found(EntityKind::TargetNode, "ghost"));
        assert_eq!(store.node_count(), 1);
        assert_eq!(store.credential_count(), 1);
        assert_eq!(store.edge_count(), 0);
    }
}
