//! Composite routing across both tiers: outdoor leg to a building, then an
//! interior leg to a room inside it

use serde::Serialize;

use crate::model::campus::CampusGraph;
use crate::model::interior::{InteriorConfig, InteriorGraph};

use super::route::{RouteResult, interior_route, outdoor_route, round1};

/// Result of a campus-to-room query; both legs are retained for inspection
#[derive(Debug, Clone, Serialize)]
pub struct CompositeRouteResult {
    pub success: bool,
    pub outdoor: RouteResult,
    /// Absent when the outdoor leg failed and the interior leg was never
    /// attempted
    pub interior: Option<RouteResult>,
    /// Sum of both legs; a failed leg contributes zero
    pub total_distance: f64,
    pub total_walk_time: u32,
}

/// Route from a start building to a specific room in the end building
///
/// The interior leg enters through whichever configured entrance yields the
/// shortest interior distance to the target room; ties keep the first
/// entrance in enumeration order. When no entrances are configured, the
/// literal `main_entrance` room is tried instead.
pub fn campus_to_room_route(
    campus: &CampusGraph,
    interior: &InteriorGraph,
    interior_config: &InteriorConfig,
    start_building: &str,
    end_building: &str,
    end_room: &str,
) -> CompositeRouteResult {
    let outdoor = outdoor_route(campus, start_building, end_building);
    if !outdoor.is_found() {
        return CompositeRouteResult {
            success: false,
            outdoor,
            interior: None,
            total_distance: 0.0,
            total_walk_time: 0,
        };
    }

    let interior_leg = best_interior_leg(interior, interior_config, end_room);

    let success = interior_leg.is_found();
    let total_distance = round1(
        outdoor.distance().unwrap_or(0.0) + interior_leg.distance().unwrap_or(0.0),
    );
    let total_walk_time = outdoor.walk_time() + interior_leg.walk_time();

    CompositeRouteResult {
        success,
        outdoor,
        interior: Some(interior_leg),
        total_distance,
        total_walk_time,
    }
}

/// Shortest interior route from any entrance to the requested room
fn best_interior_leg(
    graph: &InteriorGraph,
    config: &InteriorConfig,
    end_room: &str,
) -> RouteResult {
    let Some(target) = config.resolve_room(end_room) else {
        return RouteResult::not_found(&config.building_id, end_room);
    };

    let mut entrances = config.entrance_rooms();
    if entrances.is_empty() {
        match config.resolve_room("main_entrance") {
            Some(fallback) => entrances.push(fallback),
            None => return RouteResult::not_found(&config.building_id, end_room),
        }
    }

    let mut best: Option<RouteResult> = None;
    for entrance in &entrances {
        let candidate = interior_route(graph, entrance, &target);
        let better = match (&best, &candidate) {
            (None, _) => true,
            (Some(current), candidate) => match (current.distance(), candidate.distance()) {
                (None, Some(_)) => true,
                (Some(best_distance), Some(distance)) => distance < best_distance,
                _ => false,
            },
        };
        if better {
            best = Some(candidate);
        }
    }

    best.unwrap_or_else(|| RouteResult::not_found(&config.building_id, end_room))
}
