//! Campus network components - building and intersection nodes, path edges

use geo::Point;
use serde::Serialize;

/// Kind of a campus node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Building,
    Intersection,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Building => "building",
            Self::Intersection => "intersection",
        }
    }
}

/// Campus graph node
#[derive(Debug, Clone)]
pub struct CampusNode {
    /// Record id of the building or intersection
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    /// Geographic position (x = longitude, y = latitude)
    pub geometry: Point<f64>,
    /// Free-text description, buildings only
    pub description: Option<String>,
    /// Category tag, buildings only
    pub category: Option<String>,
}

impl CampusNode {
    pub fn is_building(&self) -> bool {
        self.kind == NodeKind::Building
    }

    /// Position as a `(latitude, longitude)` pair for result payloads
    pub fn lat_lon(&self) -> (f64, f64) {
        (self.geometry.y(), self.geometry.x())
    }
}

/// Campus graph edge (walking path segment)
#[derive(Debug, Clone)]
pub struct CampusEdge {
    /// Path length in meters
    pub weight: f64,
}
