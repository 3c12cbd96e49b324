//! Built-in demo network.
//!
//! A web tier in front of a database, an admin workstation, a backup
//! server and a mail server. Starting from `leaked-password` an attacker
//! reaches everything except the mail server.

use breachdepth_core::{Credential, Edge, GraphData, HackerProfile, Node, PrivilegeLevel};
use breachdepth_store::{InMemoryStore, StoreError};

fn node(id: &str, role: &str, services: &[&str], stored: &[&str]) -> Node {
    Node {
        id: id.to_string(),
        role: role.to_string(),
        services: services.iter().map(|s| s.to_string()).collect(),
        credentials_stored: stored.iter().map(|s| s.to_string()).collect(),
    }
}

fn link(source: &str, target: &str) -> Edge {
    Edge {
        source: source.to_string(),
        target: target.to_string(),
        bidirectional: true,
    }
}

fn credential(id: &str, level: PrivilegeLevel, valid_on: &[&str]) -> Credential {
    Credential {
        id: id.to_string(),
        privilege_level: level,
        valid_on_nodes: valid_on.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn demo_network() -> GraphData {
    GraphData {
        nodes: vec![
            node(
                "web-server-1",
                "webserver",
                &["http", "ssh"],
                &["db-creds", "backup-key"],
            ),
            node("web-server-2", "webserver", &["http", "ssh"], &[]),
            node("database", "database", &["mysql", "ssh"], &["admin-key"]),
            node(
                "admin-workstation",
                "workstation",
                &["rdp", "ssh"],
                &["root-access"],
            ),
            node("backup-server", "backup", &["ftp", "ssh"], &[]),
            node("mail-server", "mail", &["smtp", "imap", "ssh"], &[]),
        ],
        edges: vec![
            link("web-server-1", "database"),
            link("web-server-2", "database"),
            link("database", "admin-workstation"),
            link("admin-workstation", "backup-server"),
            link("backup-server", "mail-server"),
            link("web-server-1", "web-server-2"),
        ],
        credentials: vec![
            credential("leaked-password", PrivilegeLevel::User, &["web-server-1"]),
            credential("db-creds", PrivilegeLevel::Admin, &["database"]),
            credential("backup-key", PrivilegeLevel::User, &["backup-server"]),
            credential(
                "admin-key",
                PrivilegeLevel::Admin,
                &["admin-workstation", "web-server-2"],
            ),
            credential(
                "root-access",
                PrivilegeLevel::Root,
                &["admin-workstation", "database", "backup-server"],
            ),
        ],
    }
}

pub fn demo_profile() -> HackerProfile {
    HackerProfile {
        name: "BlackHat001".to_string(),
        starting_credentials: vec!["leaked-password".to_string()],
    }
}

/// Load the demo network into `store` through the usual validation.
pub fn seed(store: &mut InMemoryStore) -> Result<(), StoreError> {
    store.load(demo_network())?;
    tracing::info!(
        nodes = store.node_count(),
        edges = store.edge_count(),
        credentials = store.credential_count(),
        "Demo network loaded"
    );
    Ok(())
}
