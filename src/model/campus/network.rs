//! Outdoor campus graph: buildings and intersections joined by path edges

use hashbrown::HashMap;
use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use serde::Serialize;

use super::components::{CampusEdge, CampusNode, NodeKind};

/// Summary of the campus graph reported to consumers
#[derive(Debug, Clone, Serialize)]
pub struct GraphInfo {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub buildings_count: usize,
    pub intersections_count: usize,
    pub is_connected: bool,
}

/// Weighted undirected graph over the campus records
///
/// Rebuilt in full from the record set on every mutation; query code only
/// ever sees a complete snapshot.
#[derive(Debug, Clone, Default)]
pub struct CampusGraph {
    pub graph: UnGraph<CampusNode, CampusEdge>,
    node_indices: HashMap<String, NodeIndex>,
}

impl CampusGraph {
    pub(crate) fn add_node(&mut self, node: CampusNode) -> NodeIndex {
        if let Some(&index) = self.node_indices.get(&node.id) {
            return index;
        }
        let id = node.id.clone();
        let index = self.graph.add_node(node);
        self.node_indices.insert(id, index);
        index
    }

    /// Add an edge between two existing nodes; returns false when either
    /// endpoint is missing (dangling path records are tolerated, not errors)
    pub(crate) fn add_edge(&mut self, a: &str, b: &str, weight: f64) -> bool {
        match (self.node_index(a), self.node_index(b)) {
            (Some(ia), Some(ib)) => {
                self.graph.add_edge(ia, ib, CampusEdge { weight });
                true
            }
            _ => false,
        }
    }

    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.node_indices.get(id).copied()
    }

    pub fn node(&self, id: &str) -> Option<&CampusNode> {
        self.node_index(id).and_then(|i| self.graph.node_weight(i))
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_indices.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The edge joining two nodes, if one exists
    pub fn edge_between(&self, a: NodeIndex, b: NodeIndex) -> Option<&CampusEdge> {
        self.graph
            .find_edge(a, b)
            .and_then(|e| self.graph.edge_weight(e))
    }

    /// All building nodes, in insertion order
    pub fn buildings(&self) -> impl Iterator<Item = &CampusNode> {
        self.graph.node_weights().filter(|node| node.is_building())
    }

    pub fn info(&self) -> GraphInfo {
        let buildings_count = self.buildings().count();
        GraphInfo {
            total_nodes: self.node_count(),
            total_edges: self.edge_count(),
            buildings_count,
            intersections_count: self.node_count() - buildings_count,
            is_connected: self.node_count() == 0 || connected_components(&self.graph) == 1,
        }
    }
}
