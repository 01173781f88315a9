//! Route composition: raw node paths into structured results
//!
//! Everything here is plain serializable data for API and rendering
//! consumers; failures are values carrying a user-facing message, never
//! errors propagating past this boundary.

use serde::Serialize;

use crate::geometry::walk_time_minutes;
use crate::model::campus::CampusGraph;
use crate::model::interior::{ConnectionKind, InteriorGraph};

use super::dijkstra::shortest_path;

/// Round to one decimal place for result payloads
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// One node of a composed route with its per-step metadata
#[derive(Debug, Clone, Serialize)]
pub struct RouteStep {
    pub node_id: String,
    pub name: String,
    /// Node kind: building/intersection outdoors, room category indoors
    pub kind: &'static str,
    /// 1-based position in the route
    pub step: usize,
    /// Distance to the following step, absent on the last one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_to_next: Option<f64>,
    /// How the following step is reached; interior routes only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<ConnectionKind>,
}

/// A successfully composed route
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    pub nodes: Vec<String>,
    /// `(latitude, longitude)` outdoors, floor-local `(x, y)` indoors
    pub coordinates: Vec<(f64, f64)>,
    pub steps: Vec<RouteStep>,
    /// Total length rounded to one decimal
    pub total_distance: f64,
    pub walk_time_minutes: u32,
}

/// Outcome of a route query
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteResult {
    Found(Route),
    NotFound { message: String },
}

impl RouteResult {
    pub(crate) fn not_found(start: &str, end: &str) -> Self {
        Self::NotFound {
            message: format!("No route found between {start} and {end}"),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn route(&self) -> Option<&Route> {
        match self {
            Self::Found(route) => Some(route),
            Self::NotFound { .. } => None,
        }
    }

    /// Total distance, absent on failure
    pub fn distance(&self) -> Option<f64> {
        self.route().map(|route| route.total_distance)
    }

    /// Walk time in minutes; a failed leg contributes zero
    pub fn walk_time(&self) -> u32 {
        self.route().map_or(0, |route| route.walk_time_minutes)
    }
}

/// Shortest route between two outdoor nodes (buildings or intersections)
pub fn outdoor_route(graph: &CampusGraph, start: &str, end: &str) -> RouteResult {
    let (Some(source), Some(target)) = (graph.node_index(start), graph.node_index(end)) else {
        return RouteResult::not_found(start, end);
    };

    let Some((path, total)) = shortest_path(&graph.graph, source, target) else {
        return RouteResult::not_found(start, end);
    };

    let mut nodes = Vec::with_capacity(path.len());
    let mut coordinates = Vec::with_capacity(path.len());
    let mut steps = Vec::with_capacity(path.len());

    for (i, &index) in path.iter().enumerate() {
        let node = &graph.graph[index];
        let distance_to_next = path.get(i + 1).and_then(|&next| {
            graph
                .edge_between(index, next)
                .map(|edge| round1(edge.weight))
        });

        nodes.push(node.id.clone());
        coordinates.push(node.lat_lon());
        steps.push(RouteStep {
            node_id: node.id.clone(),
            name: node.name.clone(),
            kind: node.kind.as_str(),
            step: i + 1,
            distance_to_next,
            connection: None,
        });
    }

    RouteResult::Found(Route {
        nodes,
        coordinates,
        steps,
        total_distance: round1(total),
        walk_time_minutes: walk_time_minutes(total),
    })
}

/// Shortest route between two fully-qualified interior nodes
pub fn interior_route(graph: &InteriorGraph, start: &str, end: &str) -> RouteResult {
    let (Some(source), Some(target)) = (graph.node_index(start), graph.node_index(end)) else {
        return RouteResult::not_found(start, end);
    };

    let Some((path, total)) = shortest_path(&graph.graph, source, target) else {
        return RouteResult::not_found(start, end);
    };

    let mut nodes = Vec::with_capacity(path.len());
    let mut coordinates = Vec::with_capacity(path.len());
    let mut steps = Vec::with_capacity(path.len());

    for (i, &index) in path.iter().enumerate() {
        let node = &graph.graph[index];
        let next_edge = path.get(i + 1).and_then(|&next| graph.edge_between(index, next));

        nodes.push(node.id.clone());
        coordinates.push((node.location.x, node.location.y));
        steps.push(RouteStep {
            node_id: node.id.clone(),
            name: node.name.clone(),
            kind: node.kind.as_str(),
            step: i + 1,
            distance_to_next: next_edge.map(|edge| round1(edge.weight)),
            connection: next_edge.map(|edge| edge.kind),
        });
    }

    RouteResult::Found(Route {
        nodes,
        coordinates,
        steps,
        total_distance: round1(total),
        walk_time_minutes: walk_time_minutes(total),
    })
}
