//! Shortest-path queries and route composition over both graph tiers

pub mod composite;
pub mod destinations;
pub mod dijkstra;
pub mod route;
mod to_geojson;

pub use composite::{CompositeRouteResult, campus_to_room_route};
pub use destinations::{Destination, DistanceMatrix, destinations_from, distance_matrix};
pub use dijkstra::{EdgeCost, shortest_path, shortest_path_weights};
pub use route::{Route, RouteResult, RouteStep, interior_route, outdoor_route};
