//! Outdoor campus network model

pub mod components;
pub mod network;

pub use components::{CampusEdge, CampusNode, NodeKind};
pub use network::{CampusGraph, GraphInfo};
