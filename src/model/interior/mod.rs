//! Building interior model: configuration documents and the derived
//! per-building navigation graph

pub mod config;
pub mod graph;

pub use config::{
    Floor, FloorPlan, InteriorConfig, Room, RoomKind, RoomStyle, VerticalConnection,
    VerticalConnections,
};
pub use graph::{ConnectionKind, InteriorEdge, InteriorGraph, InteriorNode};

/// Fully qualified room id: `{building}_{floor}_{room}`
///
/// Guarantees node-id uniqueness across buildings and floors.
pub fn qualified_room_id(building: &str, floor: &str, room: &str) -> String {
    format!("{building}_{floor}_{room}")
}

/// Fully qualified id of one floor-instance of a vertical connection:
/// `{building}_{floor}_{stairs|elevator}_{id}`
pub fn qualified_vertical_id(
    building: &str,
    floor: &str,
    kind: ConnectionKind,
    connection_id: &str,
) -> String {
    format!("{building}_{floor}_{}_{connection_id}", kind.as_str())
}
