//! Building interior configuration documents
//!
//! One document per building, keyed by building id in the interior store:
//! floors with rooms, intra-floor connections and entrances, vertical
//! connections chaining floors, and a room-type palette carried for
//! renderers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::qualified_room_id;
use crate::loading::EdgeSpec;

/// Room category; drives rendering and marks vertical-connection nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    Classroom,
    Office,
    Lab,
    Entrance,
    Stairs,
    Elevator,
    Restroom,
    #[default]
    Common,
}

impl RoomKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classroom => "classroom",
            Self::Office => "office",
            Self::Lab => "lab",
            Self::Entrance => "entrance",
            Self::Stairs => "stairs",
            Self::Elevator => "elevator",
            Self::Restroom => "restroom",
            Self::Common => "common",
        }
    }
}

/// A room on a floor, positioned in floor-local planar coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: RoomKind,
    #[serde(default)]
    pub coordinates: (f64, f64),
}

/// Floor-plan canvas size; used by renderers only, never by pathfinding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorPlan {
    pub width: f64,
    pub height: f64,
    pub scale_meters_per_unit: f64,
}

impl Default for FloorPlan {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
            scale_meters_per_unit: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Floor {
    pub name: String,
    /// Integer level used for ordering floors in listings
    pub level: i32,
    #[serde(default)]
    pub rooms: BTreeMap<String, Room>,
    /// Intra-floor connections; omitted distances default to the hallway length
    #[serde(default)]
    pub connections: Vec<EdgeSpec>,
    /// Room ids acting as building ingress points for composite routing
    #[serde(default)]
    pub entrances: Vec<String>,
    #[serde(default)]
    pub floor_plan: FloorPlan,
}

/// A stairwell or elevator shaft touching a set of floors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerticalConnection {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Floor ids in traversal order. Only consecutive entries are linked, so
    /// the list must be authored in physical floor order.
    pub floors: Vec<String>,
    #[serde(default)]
    pub location: (f64, f64),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerticalConnections {
    #[serde(default)]
    pub stairs: Vec<VerticalConnection>,
    #[serde(default)]
    pub elevators: Vec<VerticalConnection>,
}

/// Render hints for a room category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomStyle {
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteriorConfig {
    pub building_id: String,
    pub building_name: String,
    #[serde(default)]
    pub floors: BTreeMap<String, Floor>,
    #[serde(default)]
    pub vertical_connections: VerticalConnections,
    #[serde(default)]
    pub room_types: BTreeMap<String, RoomStyle>,
}

impl InteriorConfig {
    /// Default interior for a building with no stored document: one ground
    /// floor with a `main_entrance` ingress and the standard palette
    pub fn default_for(building_id: &str, building_name: &str) -> Self {
        let ground = Floor {
            name: "Ground Floor".to_string(),
            level: 0,
            rooms: BTreeMap::new(),
            connections: Vec::new(),
            entrances: vec!["main_entrance".to_string()],
            floor_plan: FloorPlan::default(),
        };

        Self {
            building_id: building_id.to_string(),
            building_name: building_name.to_string(),
            floors: BTreeMap::from([("ground".to_string(), ground)]),
            vertical_connections: VerticalConnections::default(),
            room_types: Self::default_palette(),
        }
    }

    pub fn default_palette() -> BTreeMap<String, RoomStyle> {
        [
            ("classroom", "chalkboard-teacher", "blue"),
            ("office", "briefcase", "green"),
            ("lab", "flask", "purple"),
            ("entrance", "door-open", "orange"),
            ("stairs", "stairs", "gray"),
            ("elevator", "elevator", "gray"),
            ("restroom", "restroom", "lightblue"),
            ("common", "users", "yellow"),
        ]
        .into_iter()
        .map(|(kind, icon, color)| {
            (
                kind.to_string(),
                RoomStyle {
                    icon: icon.to_string(),
                    color: color.to_string(),
                },
            )
        })
        .collect()
    }

    /// Fully qualified ids of all configured entrance rooms
    pub fn entrance_rooms(&self) -> Vec<String> {
        self.floors
            .iter()
            .flat_map(|(floor_id, floor)| {
                floor
                    .entrances
                    .iter()
                    .map(|entrance| qualified_room_id(&self.building_id, floor_id, entrance))
            })
            .collect()
    }

    /// Resolve a room reference to its fully qualified id
    ///
    /// Accepts an already-qualified composite id, a bare room id, or a room
    /// display name; matching is case-insensitive and the first hit in floor
    /// order wins.
    pub fn resolve_room(&self, query: &str) -> Option<String> {
        for (floor_id, floor) in &self.floors {
            for (room_id, room) in &floor.rooms {
                let qualified = qualified_room_id(&self.building_id, floor_id, room_id);
                if room_id.eq_ignore_ascii_case(query)
                    || room.name.eq_ignore_ascii_case(query)
                    || qualified.eq_ignore_ascii_case(query)
                {
                    return Some(qualified);
                }
            }
        }
        None
    }

    pub fn room_count(&self) -> usize {
        self.floors.values().map(|floor| floor.rooms.len()).sum()
    }
}
