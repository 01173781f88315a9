//! Data model for campus navigation
//!
//! Contains the outdoor campus network, the per-building interior model,
//! and the shared `Navigator` state that ties both to the record store.

pub mod campus;
pub mod interior;
pub mod navigator;

pub use campus::{CampusEdge, CampusGraph, CampusNode, GraphInfo, NodeKind};
pub use interior::{ConnectionKind, InteriorConfig, InteriorGraph, RoomKind};
pub use navigator::{BuildingSummary, Navigator, RoomInfo};
