//! Worklist-driven lateral movement engine.
//!
//! Starting from the attacker's credentials, explores the graph breadth-first.
//! A node is compromised the first time any available credential is valid on
//! it; compromise harvests the credentials stored there, which can in turn
//! open nodes that were unreachable before. Both the credential set and the
//! compromised set only grow, so the exploration reaches a fixpoint.

use std::collections::{HashMap, HashSet, VecDeque};

use breachdepth_core::AttackPath;
use breachdepth_store::Repository;

use crate::graph::AttackGraph;
use crate::privilege::{self, Access};

/// A pending access attempt.
#[derive(Debug, Clone)]
struct WorkItem {
    node: usize,
    depth: usize,
    /// Credentials that caused this attempt to be queued.
    triggers: Vec<String>,
}

/// Terminal state of one run, before projection into a `SimulationResult`.
#[derive(Debug, Clone, Default)]
pub struct EngineState {
    /// Node indices in the order they were compromised.
    pub compromised: Vec<usize>,
    pub attack_paths: Vec<AttackPath>,
    pub total_depth: usize,
    /// Credential ids in acquisition order, starting credentials first.
    pub available_credentials: Vec<String>,
    /// Work items dequeued, including those skipped or denied.
    pub attempts: usize,
}

/// Mutable state owned by exactly one simulation run.
struct AttackRun<'a, R: Repository + ?Sized> {
    repo: &'a R,
    graph: &'a AttackGraph,
    available: Vec<String>,
    available_set: HashSet<String>,
    is_compromised: Vec<bool>,
    compromised: Vec<usize>,
    /// Node index → credential ids already used to access it.
    visited_with: HashMap<usize, HashSet<String>>,
    worklist: VecDeque<WorkItem>,
    attack_paths: Vec<AttackPath>,
    total_depth: usize,
    attempts: usize,
}

/// Run the attack from `starting_credentials` to its fixpoint.
///
/// Unknown credential or node ids are treated as granting nothing; the run
/// itself never fails.
pub fn run_attack<R>(repo: &R, graph: &AttackGraph, starting_credentials: &[String]) -> EngineState
where
    R: Repository + ?Sized,
{
    let mut run = AttackRun::new(repo, graph, starting_credentials);
    run.seed();

    while let Some(item) = run.worklist.pop_front() {
        run.attempts += 1;
        run.process(item);
    }

    run.finish()
}

impl<'a, R: Repository + ?Sized> AttackRun<'a, R> {
    fn new(repo: &'a R, graph: &'a AttackGraph, starting_credentials: &[String]) -> Self {
        let mut available = Vec::with_capacity(starting_credentials.len());
        let mut available_set = HashSet::with_capacity(starting_credentials.len());
        for cred_id in starting_credentials {
            if available_set.insert(cred_id.clone()) {
                available.push(cred_id.clone());
            }
        }

        Self {
            repo,
            graph,
            available,
            available_set,
            is_compromised: vec![false; graph.node_count()],
            compromised: Vec::new(),
            visited_with: HashMap::new(),
            worklist: VecDeque::new(),
            attack_paths: Vec::new(),
            total_depth: 0,
            attempts: 0,
        }
    }

    /// Queue every node a starting credential is valid on, at depth 0.
    fn seed(&mut self) {
        let repo = self.repo;
        let graph = self.graph;

        for cred_id in &self.available {
            let Some(cred) = repo.get_credential(cred_id) else {
                tracing::debug!(credential_id = %cred_id, "Unknown starting credential skipped");
                continue;
            };
            for node_id in &cred.valid_on_nodes {
                if let Some(node) = graph.index_of(node_id) {
                    self.worklist.push_back(WorkItem {
                        node,
                        depth: 0,
                        triggers: vec![cred_id.clone()],
                    });
                }
            }
        }
    }

    fn process(&mut self, item: WorkItem) {
        let graph = self.graph;
        let node_id = graph.node_ids[item.node].as_str();

        if let Some(seen) = self.visited_with.get(&item.node) {
            if item.triggers.iter().all(|c| seen.contains(c)) {
                return;
            }
        }

        // Access is judged on everything held now, not only on the triggers.
        let access = privilege::assess_access(self.repo, node_id, &self.available);
        if access.is_denied() {
            tracing::trace!(node_id, depth = item.depth, "No valid credential, attempt dropped");
            return;
        }

        self.visited_with
            .entry(item.node)
            .or_default()
            .extend(access.credentials.iter().cloned());

        if self.is_compromised[item.node] {
            return;
        }
        self.compromise(item.node, item.depth, &access);

        // Neighbors are queued once, from the first compromise, so each arc
        // contributes at most one work item.
        for &neighbor in graph.neighbors(item.node) {
            if !self.is_compromised[neighbor] {
                self.worklist.push_back(WorkItem {
                    node: neighbor,
                    depth: item.depth + 1,
                    triggers: access.credentials.clone(),
                });
            }
        }
    }

    /// First successful access: record the node and harvest what it stores.
    fn compromise(&mut self, node: usize, depth: usize, access: &Access) {
        let repo = self.repo;
        let graph = self.graph;
        let node_id = &graph.node_ids[node];

        self.is_compromised[node] = true;
        self.compromised.push(node);
        self.total_depth = self.total_depth.max(depth);

        let mut harvested = Vec::new();
        if let Some(record) = repo.get_node(node_id) {
            for cred_id in &record.credentials_stored {
                if self.available_set.insert(cred_id.clone()) {
                    self.available.push(cred_id.clone());
                    harvested.push(cred_id.clone());
                }
            }
        }

        tracing::debug!(
            node_id = %node_id,
            depth,
            privilege = %access.privilege,
            harvested = harvested.len(),
            "Node compromised"
        );

        self.attack_paths.push(AttackPath {
            node_id: node_id.clone(),
            privilege: access.privilege,
            credentials_used: access.credentials.clone(),
            credentials_harvested: harvested,
        });
    }

    fn finish(self) -> EngineState {
        EngineState {
            compromised: self.compromised,
            attack_paths: self.attack_paths,
            total_depth: self.total_depth,
            available_credentials: self.available,
            attempts: self.attempts,
        }
    }
}
