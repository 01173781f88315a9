//! Derived per-building interior graph

use geo::Coord;
use hashbrown::HashMap;
use petgraph::graph::{NodeIndex, UnGraph};
use serde::Serialize;

use super::config::RoomKind;

/// How two interior nodes are linked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionKind {
    Hallway,
    Stairs,
    Elevator,
}

impl ConnectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hallway => "hallway",
            Self::Stairs => "stairs",
            Self::Elevator => "elevator",
        }
    }
}

/// Interior graph node: a room, or one floor-instance of a vertical connection
#[derive(Debug, Clone)]
pub struct InteriorNode {
    /// Fully qualified id, unique across buildings and floors
    pub id: String,
    pub name: String,
    pub kind: RoomKind,
    pub floor: String,
    pub level: i32,
    /// Floor-local planar position
    pub location: Coord<f64>,
    /// True for stairs/elevator floor-instances materialized from a
    /// vertical connection
    pub vertical: bool,
}

/// Interior graph edge: hallway segment or one vertical hop
#[derive(Debug, Clone)]
pub struct InteriorEdge {
    pub weight: f64,
    pub kind: ConnectionKind,
}

/// Weighted undirected graph over one building's rooms and vertical
/// connections, built lazily from the interior configuration and cached
#[derive(Debug, Clone, Default)]
pub struct InteriorGraph {
    pub graph: UnGraph<InteriorNode, InteriorEdge>,
    node_indices: HashMap<String, NodeIndex>,
}

impl InteriorGraph {
    pub(crate) fn add_node(&mut self, node: InteriorNode) -> NodeIndex {
        if let Some(&index) = self.node_indices.get(&node.id) {
            return index;
        }
        let id = node.id.clone();
        let index = self.graph.add_node(node);
        self.node_indices.insert(id, index);
        index
    }

    pub(crate) fn add_edge(&mut self, a: NodeIndex, b: NodeIndex, edge: InteriorEdge) {
        self.graph.add_edge(a, b, edge);
    }

    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.node_indices.get(id).copied()
    }

    pub fn node(&self, id: &str) -> Option<&InteriorNode> {
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
    pub fn edge_between(&self, a: NodeIndex, b: NodeIndex) -> Option<&InteriorEdge> {
        self.graph
            .find_edge(a, b)
            .and_then(|e| self.graph.edge_weight(e))
    }
}
