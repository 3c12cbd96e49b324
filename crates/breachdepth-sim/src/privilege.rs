//! Access assessment: which available credentials open a node, and the best
//! privilege tier they grant.

use breachdepth_core::PrivilegeLevel;
use breachdepth_store::Repository;

/// Credentials that currently grant access to one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Access {
    /// Granting credential ids, in the attacker's acquisition order.
    pub credentials: Vec<String>,
    /// Highest tier among `credentials`; `None` when nothing grants access.
    pub privilege: PrivilegeLevel,
}

impl Access {
    pub fn is_denied(&self) -> bool {
        self.credentials.is_empty()
    }
}

/// Highest-ranked tier in `levels`, starting from `None`.
///
/// On equal rank the first one seen is kept.
pub fn best_privilege<I>(levels: I) -> PrivilegeLevel
where
    I: IntoIterator<Item = PrivilegeLevel>,
{
    levels
        .into_iter()
        .fold(PrivilegeLevel::None, |best, level| {
            if level.rank() > best.rank() {
                level
            } else {
                best
            }
        })
}

/// Scan `available` for credentials valid on `node_id`.
///
/// Ids the repository cannot resolve grant nothing.
pub fn assess_access<R>(repo: &R, node_id: &str, available: &[String]) -> Access
where
    R: Repository + ?Sized,
{
    let mut credentials = Vec::new();
    let mut levels = Vec::new();

    for cred_id in available {
        if let Some(cred) = repo.get_credential(cred_id) {
            if cred.is_valid_on(node_id) {
                credentials.push(cred_id.clone());
                levels.push(cred.privilege_level);
            }
        }
    }

    Access {
        credentials,
        privilege: best_privilege(levels),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breachdepth_core::{Credential, Node};
    use breachdepth_store::InMemoryStore;

    fn store_with(creds: Vec<(&str, PrivilegeLevel, Vec<&str>)>) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        for id in ["a", "b"] {
            store
                .add_node(Node {
                    id: id.to_string(),
                    role: "host".to_string(),
                    services: vec![],
                    credentials_stored: vec![],
                })
                .unwrap();
        }
        for (id, level, valid_on) in creds {
            store
                .add_credential(Credential {
                    id: id.to_string(),
                    privilege_level: level,
                    valid_on_nodes: valid_on.iter().map(|s| s.to_string()).collect(),
                })
                .unwrap();
        }
        store
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_best_privilege_empty_is_none() {
        assert_eq!(best_privilege(Vec::<PrivilegeLevel>::new()), PrivilegeLevel::None);
    }

    #[test]
    fn test_best_privilege_picks_max_rank() {
        let levels = vec![PrivilegeLevel::User, PrivilegeLevel::Root, PrivilegeLevel::Admin];
        assert_eq!(best_privilege(levels), PrivilegeLevel::Root);
    }

    #[test]
    fn test_assess_collects_all_valid_credentials() {
        let store = store_with(vec![
            ("u", PrivilegeLevel::User, vec!["a"]),
            ("adm", PrivilegeLevel::Admin, vec!["a", "b"]),
            ("other", PrivilegeLevel::Root, vec!["b"]),
        ]);

        let access = assess_access(&store, "a", &ids(&["u", "adm", "other"]));
        assert_eq!(access.credentials, ids(&["u", "adm"]));
        assert_eq!(access.privilege, PrivilegeLevel::Admin);
        assert!(!access.is_denied());
    }

    #[test]
    fn test_assess_only_considers_available() {
        let store = store_with(vec![
            ("u", PrivilegeLevel::User, vec!["a"]),
            ("root", PrivilegeLevel::Root, vec!["a"]),
        ]);

        let access = assess_access(&store, "a", &ids(&["u"]));
        assert_eq!(access.credentials, ids(&["u"]));
        assert_eq!(access.privilege, PrivilegeLevel::User);
    }

    #[test]
    fn test_assess_unknown_credential_grants_nothing() {
        let store = store_with(vec![]);
        let access = assess_access(&store, "a", &ids(&["ghost"]));
        assert!(access.is_denied());
        assert_eq!(access.privilege, PrivilegeLevel::None);
    }

    #[test]
    fn test_none_tier_credential_still_grants_access() {
        let store = store_with(vec![("guest", PrivilegeLevel::None, vec!["b"])]);
        let access = assess_access(&store, "b", &ids(&["guest"]));
        assert_eq!(access.credentials, ids(&["guest"]));
        assert_eq!(access.privilege, PrivilegeLevel::None);
    }
}
