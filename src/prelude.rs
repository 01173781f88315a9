// Re-export of key components
pub use crate::Error;
pub use crate::editing::Mutation;
pub use crate::geometry::{CampusBounds, haversine_distance, walk_time_minutes};
pub use crate::loading::{CampusConfig, ConfigStore, build_campus_graph, build_interior_graph};
pub use crate::model::{CampusGraph, GraphInfo, InteriorConfig, InteriorGraph, Navigator};
pub use crate::routing::{
    CompositeRouteResult, Destination, DistanceMatrix, Route, RouteResult, interior_route,
    outdoor_route, shortest_path,
};

// Fixed traversal costs
pub use crate::{DEFAULT_HALLWAY_DISTANCE, ELEVATOR_COST, STAIRS_COST, WALKING_SPEED};
