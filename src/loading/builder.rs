//! Builds graph snapshots from configuration documents
//!
//! Both builders are pure: the same document always yields the same graph,
//! which is what makes full rebuild-and-swap a safe mutation strategy.

use geo::{Coord, Point};
use itertools::Itertools;
use log::{debug, info};

use crate::geometry::haversine_distance;
use crate::model::campus::{CampusGraph, CampusNode, NodeKind};
use crate::model::interior::{
    ConnectionKind, InteriorConfig, InteriorEdge, InteriorGraph, InteriorNode, RoomKind,
    VerticalConnection, qualified_room_id, qualified_vertical_id,
};
use crate::{DEFAULT_HALLWAY_DISTANCE, ELEVATOR_COST, STAIRS_COST};

use super::config::CampusConfig;

/// Build the outdoor campus graph from the current record set
///
/// Path entries referencing unknown nodes are skipped silently; an omitted
/// distance is derived from the endpoint coordinates.
pub fn build_campus_graph(config: &CampusConfig) -> CampusGraph {
    let mut graph = CampusGraph::default();

    for (id, building) in &config.buildings {
        let (lat, lon) = building.coordinates;
        graph.add_node(CampusNode {
            id: id.clone(),
            name: building.name.clone(),
            kind: NodeKind::Building,
            geometry: Point::new(lon, lat),
            description: Some(building.description.clone()),
            category: Some(building.category.clone()),
        });
    }

    for (id, &(lat, lon)) in &config.intersections {
        graph.add_node(CampusNode {
            id: id.clone(),
            name: id.clone(),
            kind: NodeKind::Intersection,
            geometry: Point::new(lon, lat),
            description: None,
            category: None,
        });
    }

    for path in &config.campus_paths {
        let weight = match path.distance {
            Some(distance) => distance,
            None => match (
                config.node_coordinates(&path.from),
                config.node_coordinates(&path.to),
            ) {
                (Some(a), Some(b)) => haversine_distance(a, b),
                _ => {
                    debug!(
                        "Skipping path with unknown endpoint: {} - {}",
                        path.from, path.to
                    );
                    continue;
                }
            },
        };

        if !graph.add_edge(&path.from, &path.to, weight) {
            debug!(
                "Skipping path with unknown endpoint: {} - {}",
                path.from, path.to
            );
        }
    }

    info!(
        "Campus graph built: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    graph
}

/// Build one building's interior graph from its configuration document
///
/// A config with zero floors yields a valid empty graph.
pub fn build_interior_graph(config: &InteriorConfig) -> InteriorGraph {
    let mut graph = InteriorGraph::default();
    let building = &config.building_id;

    for (floor_id, floor) in &config.floors {
        for (room_id, room) in &floor.rooms {
            graph.add_node(InteriorNode {
                id: qualified_room_id(building, floor_id, room_id),
                name: room.name.clone(),
                kind: room.kind,
                floor: floor_id.clone(),
                level: floor.level,
                location: Coord {
                    x: room.coordinates.0,
                    y: room.coordinates.1,
                },
                vertical: false,
            });
        }

        for link in &floor.connections {
            let a = qualified_room_id(building, floor_id, &link.from);
            let b = qualified_room_id(building, floor_id, &link.to);
            let (Some(ia), Some(ib)) = (graph.node_index(&a), graph.node_index(&b)) else {
                debug!(
                    "Skipping connection with unknown room on {building}/{floor_id}: {} - {}",
                    link.from, link.to
                );
                continue;
            };
            graph.add_edge(
                ia,
                ib,
                InteriorEdge {
                    weight: link.distance.unwrap_or(DEFAULT_HALLWAY_DISTANCE),
                    kind: ConnectionKind::Hallway,
                },
            );
        }
    }

    for stairs in &config.vertical_connections.stairs {
        chain_vertical_connection(&mut graph, config, stairs, ConnectionKind::Stairs);
    }
    for elevator in &config.vertical_connections.elevators {
        chain_vertical_connection(&mut graph, config, elevator, ConnectionKind::Elevator);
    }

    info!(
        "Interior graph built for {building}: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    graph
}

/// Materialize one node per listed floor and link consecutive entries
///
/// The configured floor list order determines chain adjacency; floors are
/// deliberately not sorted by level here.
fn chain_vertical_connection(
    graph: &mut InteriorGraph,
    config: &InteriorConfig,
    connection: &VerticalConnection,
    kind: ConnectionKind,
) {
    let (room_kind, weight) = match kind {
        ConnectionKind::Stairs => (RoomKind::Stairs, STAIRS_COST),
        ConnectionKind::Elevator => (RoomKind::Elevator, ELEVATOR_COST),
        ConnectionKind::Hallway => unreachable!("hallways are not vertical connections"),
    };

    let display_name = if connection.name.is_empty() {
        format!("{} {}", capitalize(kind.as_str()), connection.id)
    } else {
        connection.name.clone()
    };

    let nodes: Vec<_> = connection
        .floors
        .iter()
        .map(|floor_id| {
            let level = config.floors.get(floor_id).map_or(0, |floor| floor.level);
            graph.add_node(InteriorNode {
                id: qualified_vertical_id(&config.building_id, floor_id, kind, &connection.id),
                name: format!("{display_name} (Floor {floor_id})"),
                kind: room_kind,
                floor: floor_id.clone(),
                level,
                location: Coord {
                    x: connection.location.0,
                    y: connection.location.1,
                },
                vertical: true,
            })
        })
        .collect();

    for (a, b) in nodes.into_iter().tuple_windows() {
        graph.add_edge(a, b, InteriorEdge { weight, kind });
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::EdgeSpec;
    use crate::model::interior::{Floor, Room, VerticalConnections};
    use std::collections::BTreeMap;

    fn room(name: &str) -> Room {
        Room {
            name: name.to_string(),
            kind: RoomKind::Common,
            coordinates: (0.0, 0.0),
        }
    }

    fn two_floor_config() -> InteriorConfig {
        let mut config = InteriorConfig::default_for("Library", "Main Library");
        config.floors.clear();

        let mut floor0_rooms = BTreeMap::new();
        floor0_rooms.insert("lobby".to_string(), room("Lobby"));
        let mut floor1_rooms = BTreeMap::new();
        floor1_rooms.insert("study".to_string(), room("Study Hall"));

        config.floors.insert(
            "floor0".to_string(),
            Floor {
                name: "Floor 0".to_string(),
                level: 0,
                rooms: floor0_rooms,
                connections: vec![EdgeSpec::new("lobby", "stairs_anchor", None)],
                entrances: vec!["lobby".to_string()],
                floor_plan: Default::default(),
            },
        );
        config.floors.insert(
            "floor1".to_string(),
            Floor {
                name: "Floor 1".to_string(),
                level: 1,
                rooms: floor1_rooms,
                connections: Vec::new(),
                entrances: Vec::new(),
                floor_plan: Default::default(),
            },
        );
        config.vertical_connections = VerticalConnections {
            stairs: vec![VerticalConnection {
                id: "1".to_string(),
                name: String::new(),
                floors: vec!["floor0".to_string(), "floor1".to_string()],
                location: (10.0, 10.0),
            }],
            elevators: Vec::new(),
        };
        config
    }

    #[test]
    fn campus_build_skips_dangling_paths() {
        let mut config = CampusConfig::default_campus();
        config
            .campus_paths
            .push(EdgeSpec::new("Main_Library", "Demolished_Hall", None));
        let graph = build_campus_graph(&config);
        // Node count is untouched and the dangling edge is dropped
        assert_eq!(graph.node_count(), 16);
        assert_eq!(graph.edge_count(), 18);
    }

    #[test]
    fn campus_build_prefers_explicit_distances() {
        let mut config = CampusConfig::default_campus();
        config.campus_paths.clear();
        config
            .campus_paths
            .push(EdgeSpec::new("Main_Library", "intersection_1", Some(77.0)));
        let graph = build_campus_graph(&config);
        let a = graph.node_index("Main_Library").unwrap();
        let b = graph.node_index("intersection_1").unwrap();
        assert_eq!(graph.edge_between(a, b).unwrap().weight, 77.0);
    }

    #[test]
    fn campus_build_derives_haversine_distances() {
        let mut config = CampusConfig::default_campus();
        config.campus_paths.clear();
        config
            .campus_paths
            .push(EdgeSpec::new("Main_Library", "intersection_1", None));
        let graph = build_campus_graph(&config);
        let a = graph.node_index("Main_Library").unwrap();
        let b = graph.node_index("intersection_1").unwrap();
        let expected = haversine_distance(
            config.node_coordinates("Main_Library").unwrap(),
            config.node_coordinates("intersection_1").unwrap(),
        );
        let weight = graph.edge_between(a, b).unwrap().weight;
        assert!((weight - expected).abs() < 1e-9);
        assert!(weight > 0.0);
    }

    #[test]
    fn interior_build_materializes_vertical_chain() {
        let graph = build_interior_graph(&two_floor_config());
        // 2 rooms + 2 stair floor-instances
        assert_eq!(graph.node_count(), 4);
        let lower = graph.node_index("Library_floor0_stairs_1").unwrap();
        let upper = graph.node_index("Library_floor1_stairs_1").unwrap();
        let edge = graph.edge_between(lower, upper).unwrap();
        assert_eq!(edge.weight, STAIRS_COST);
        assert_eq!(edge.kind, ConnectionKind::Stairs);
    }

    #[test]
    fn interior_build_skips_connections_to_missing_rooms() {
        let graph = build_interior_graph(&two_floor_config());
        // lobby - stairs_anchor references a room that does not exist
        let lobby = graph.node_index("Library_floor0_lobby").unwrap();
        assert_eq!(graph.graph.edges(lobby).count(), 0);
    }

    #[test]
    fn interior_build_is_idempotent() {
        let config = two_floor_config();
        let first = build_interior_graph(&config);
        let second = build_interior_graph(&config);
        assert_eq!(first.node_count(), second.node_count());
        assert_eq!(first.edge_count(), second.edge_count());
        for node in first.graph.node_weights() {
            assert!(second.has_node(&node.id));
        }
    }

    #[test]
    fn zero_floor_config_yields_empty_graph() {
        let mut config = InteriorConfig::default_for("Gym", "Recreation Center");
        config.floors.clear();
        let graph = build_interior_graph(&config);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }
}
