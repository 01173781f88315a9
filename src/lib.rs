//! Campus navigation engine
//!
//! Shortest-path routing across a campus modeled as two graph tiers: an
//! outdoor graph of buildings and intersections connected by walking paths,
//! and per-building interior graphs of rooms linked by hallways, stairs and
//! elevators. The engine keeps both tiers consistent while the underlying
//! records are edited at runtime, and composes results from both tiers into
//! a single multi-segment route ("from building A to room R in building B").
//!
//! The crate is the routing core only: HTTP serving, authentication and map
//! rendering are external consumers of the plain-data results it produces.

pub mod editing;
pub mod error;
pub mod geometry;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use model::{CampusGraph, GraphInfo, InteriorGraph, Navigator};
pub use routing::{CompositeRouteResult, Route, RouteResult};

/// Average walking speed in meters per second (5 km/h)
pub const WALKING_SPEED: f64 = 1.39;

/// Fixed cost of one stairs hop between adjacent floors
pub const STAIRS_COST: f64 = 15.0;

/// Fixed cost of one elevator hop between adjacent floors
pub const ELEVATOR_COST: f64 = 5.0;

/// Intra-floor connection weight when the configuration omits a distance
pub const DEFAULT_HALLWAY_DISTANCE: f64 = 10.0;

/// Mean Earth radius in meters, as used by the haversine formula
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
