//! In-memory directed graph for attack simulation.
//!
//! Converts stored `Node` and `Edge` records into a compact adjacency list
//! keyed by dense node index. Bidirectional edges become two arcs.

use std::collections::HashMap;

use breachdepth_core::{Edge, Node};

/// Directed reachability graph rebuilt for every simulation.
#[derive(Debug, Clone, Default)]
pub struct AttackGraph {
    /// Node ids, indexed by dense index (0..N-1).
    pub node_ids: Vec<String>,
    /// `adjacency[i]` = distinct neighbor indices reachable from node `i`,
    /// in arc insertion order.
    pub adjacency: Vec<Vec<usize>>,
    /// Map from node id → dense index.
    pub node_index: HashMap<String, usize>,
}

impl AttackGraph {
    /// Build from repository records.
    ///
    /// Every node becomes a vertex, including isolated ones. Edges that
    /// reference unknown nodes are ignored; parallel arcs collapse into one.
    pub fn from_records(nodes: &[Node], edges: &[Edge]) -> Self {
        let mut node_index = HashMap::with_capacity(nodes.len());
        let mut node_ids = Vec::with_capacity(nodes.len());

        for node in nodes {
            if node_index.contains_key(&node.id) {
                continue;
            }
            node_index.insert(node.id.clone(), node_ids.len());
            node_ids.push(node.id.clone());
        }

        let mut adjacency = vec![Vec::new(); node_ids.len()];

        for edge in edges {
            if let (Some(&src_idx), Some(&tgt_idx)) =
                (node_index.get(&edge.source), node_index.get(&edge.target))
            {
                add_arc(&mut adjacency, src_idx, tgt_idx);
                if edge.bidirectional {
                    add_arc(&mut adjacency, tgt_idx, src_idx);
                }
            }
        }

        Self {
            node_ids,
            adjacency,
            node_index,
        }
    }

    /// Dense index of a node id, if the node is part of the graph.
    pub fn index_of(&self, node_id: &str) -> Option<usize> {
        self.node_index.get(node_id).copied()
    }

    /// Outgoing neighbors of node `index`.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.adjacency[index]
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    /// Number of directed arcs in the graph.
    pub fn arc_count(&self) -> usize {
        self.adjacency.iter().map(|arcs| arcs.len()).sum()
    }
}

fn add_arc(adjacency: &mut [Vec<usize>], from: usize, to: usize) {
    if !adjacency[from].contains(&to) {
        adjacency[from].push(to);
    }
}
