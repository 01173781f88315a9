//! Configuration documents, persistence, and graph construction

mod builder;
mod config;
mod de;
mod store;

pub use builder::{build_campus_graph, build_interior_graph};
pub use config::{BuildingRecord, CampusConfig, MapSettings};
pub use de::EdgeSpec;
pub use store::ConfigStore;
