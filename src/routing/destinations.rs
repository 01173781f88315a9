//! Reachable-destination listing and the campus distance matrix

use rayon::prelude::*;
use serde::Serialize;

use crate::geometry::walk_time_minutes;
use crate::model::campus::CampusGraph;

use super::dijkstra::shortest_path_weights;
use super::route::round1;

/// A building reachable from some start point
#[derive(Debug, Clone, Serialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub distance: f64,
    pub walk_time: u32,
    pub coordinates: (f64, f64),
    pub description: String,
}

/// Every other building reachable from `start`, nearest first
///
/// One one-to-many Dijkstra pass covers all destinations; unreachable
/// buildings are simply omitted.
pub fn destinations_from(graph: &CampusGraph, start: &str) -> Vec<Destination> {
    let Some(source) = graph.node_index(start) else {
        return Vec::new();
    };

    let weights = shortest_path_weights(&graph.graph, source, None);

    let mut destinations: Vec<_> = graph
        .graph
        .node_indices()
        .filter_map(|index| {
            let node = &graph.graph[index];
            if !node.is_building() || node.id == start {
                return None;
            }
            let &distance = weights.get(&index)?;
            Some(Destination {
                id: node.id.clone(),
                name: node.name.clone(),
                distance: round1(distance),
                walk_time: walk_time_minutes(distance),
                coordinates: node.lat_lon(),
                description: node.description.clone().unwrap_or_default(),
            })
        })
        .collect();

    destinations.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    destinations
}

/// Building-to-building shortest-path distances
///
/// Rows and columns follow the `buildings` order; `None` marks an
/// unreachable pair.
#[derive(Debug, Clone, Serialize)]
pub struct DistanceMatrix {
    pub buildings: Vec<String>,
    pub distances: Vec<Vec<Option<f64>>>,
}

/// Full distance matrix over all buildings, one Dijkstra pass per row,
/// rows computed in parallel
pub fn distance_matrix(graph: &CampusGraph) -> DistanceMatrix {
    let building_indices: Vec<_> = graph
        .graph
        .node_indices()
        .filter(|&index| graph.graph[index].is_building())
        .collect();

    let buildings = building_indices
        .iter()
        .map(|&index| graph.graph[index].id.clone())
        .collect();

    let distances = building_indices
        .par_iter()
        .map(|&source| {
            let weights = shortest_path_weights(&graph.graph, source, None);
            building_indices
                .iter()
                .map(|target| weights.get(target).copied().map(round1))
                .collect()
        })
        .collect();

    DistanceMatrix {
        buildings,
        distances,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::{CampusConfig, EdgeSpec, build_campus_graph};

    fn campus() -> CampusGraph {
        let mut config = CampusConfig::default_campus();
        config.campus_paths = vec![
            EdgeSpec::new("Main_Library", "intersection_1", Some(100.0)),
            EdgeSpec::new("intersection_1", "Dormitory_A", Some(50.0)),
            EdgeSpec::new("Main_Library", "Cafeteria", Some(30.0)),
        ];
        build_campus_graph(&config)
    }

    #[test]
    fn destinations_are_sorted_and_exclude_the_start() {
        let destinations = destinations_from(&campus(), "Main_Library");
        let ids: Vec<_> = destinations.iter().map(|d| d.id.as_str()).collect();
        // Only reachable buildings appear: Cafeteria (30) then Dormitory_A (150)
        assert_eq!(ids, vec!["Cafeteria", "Dormitory_A"]);
        assert_eq!(destinations[0].distance, 30.0);
        assert_eq!(destinations[1].distance, 150.0);
        assert!(destinations.iter().all(|d| d.id != "Main_Library"));
    }

    #[test]
    fn unknown_start_yields_no_destinations() {
        assert!(destinations_from(&campus(), "Atlantis").is_empty());
    }

    #[test]
    fn matrix_is_symmetric_with_zero_diagonal() {
        let matrix = distance_matrix(&campus());
        let n = matrix.buildings.len();
        assert_eq!(n, 10);
        for i in 0..n {
            assert_eq!(matrix.distances[i][i], Some(0.0));
            for j in 0..n {
                assert_eq!(matrix.distances[i][j], matrix.distances[j][i]);
            }
        }

        let library = matrix
            .buildings
            .iter()
            .position(|id| id == "Main_Library")
            .unwrap();
        let gym = matrix.buildings.iter().position(|id| id == "Gym").unwrap();
        // Gym is not wired up in this reduced path set
        assert_eq!(matrix.distances[library][gym], None);
    }
}
