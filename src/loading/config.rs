//! Campus record document: map settings, buildings, intersections, paths

use std::collections::BTreeMap;

use geo::Point;
use serde::{Deserialize, Serialize};

use super::de::EdgeSpec;
use crate::geometry::CampusBounds;

fn default_category() -> String {
    "general".to_string()
}

fn default_zoom() -> u8 {
    16
}

/// Map viewport settings; `zoom_level` is carried for renderers, never
/// interpreted by the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapSettings {
    /// Campus center as `[latitude, longitude]`
    pub center_coordinates: (f64, f64),
    /// Side length of the square campus bounds in kilometers
    pub map_bounds_km: f64,
    #[serde(default = "default_zoom")]
    pub zoom_level: u8,
}

/// A building record as stored in the campus document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingRecord {
    pub name: String,
    /// `[latitude, longitude]`
    pub coordinates: (f64, f64),
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default = "default_category")]
    pub category: String,
}

/// The authoritative campus record set, persisted as a single JSON document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampusConfig {
    pub map_settings: MapSettings,
    #[serde(default)]
    pub buildings: BTreeMap<String, BuildingRecord>,
    #[serde(default)]
    pub intersections: BTreeMap<String, (f64, f64)>,
    #[serde(default)]
    pub campus_paths: Vec<EdgeSpec>,
}

impl CampusConfig {
    /// Coordinate bounds derived from the map settings
    pub fn bounds(&self) -> CampusBounds {
        CampusBounds::from_center(
            self.map_settings.center_coordinates,
            self.map_settings.map_bounds_km,
        )
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.buildings.contains_key(id) || self.intersections.contains_key(id)
    }

    /// Geographic position of a building or intersection, if the id exists
    pub fn node_coordinates(&self, id: &str) -> Option<Point<f64>> {
        let (lat, lon) = self
            .buildings
            .get(id)
            .map(|b| b.coordinates)
            .or_else(|| self.intersections.get(id).copied())?;
        Some(Point::new(lon, lat))
    }

    /// Whether a path between the two nodes exists, in either direction
    pub fn path_exists(&self, a: &str, b: &str) -> bool {
        self.campus_paths.iter().any(|path| path.joins(a, b))
    }

    /// The built-in demo campus used when no stored document exists
    pub fn default_campus() -> Self {
        let buildings = [
            (
                "Main_Library",
                "Main Library",
                (40.7831, -73.9712),
                "Central library with study spaces and resources",
                "academic",
            ),
            (
                "Engineering_Building",
                "Engineering Building",
                (40.7851, -73.9732),
                "Home to all engineering departments",
                "academic",
            ),
            (
                "Student_Center",
                "Student Center",
                (40.7811, -73.9692),
                "Dining, events, and student activities",
                "student_services",
            ),
            (
                "Science_Building",
                "Science Building",
                (40.7871, -73.9752),
                "Physics, Chemistry, and Biology labs",
                "academic",
            ),
            (
                "Business_School",
                "Business School",
                (40.7791, -73.9672),
                "Business administration and economics",
                "academic",
            ),
            (
                "Arts_Building",
                "Arts Building",
                (40.7801, -73.9722),
                "Fine arts, theater, and music departments",
                "academic",
            ),
            (
                "Dormitory_A",
                "Dormitory A",
                (40.7821, -73.9682),
                "First-year student housing",
                "residential",
            ),
            (
                "Dormitory_B",
                "Dormitory B",
                (40.7841, -73.9702),
                "Upper-class student housing",
                "residential",
            ),
            (
                "Cafeteria",
                "Main Cafeteria",
                (40.7821, -73.9712),
                "Main dining facility",
                "dining",
            ),
            (
                "Gym",
                "Recreation Center",
                (40.7861, -73.9682),
                "Fitness center and sports facilities",
                "recreation",
            ),
        ]
        .into_iter()
        .map(|(id, name, coordinates, description, category)| {
            (
                id.to_string(),
                BuildingRecord {
                    name: name.to_string(),
                    coordinates,
                    description: description.to_string(),
                    category: category.to_string(),
                },
            )
        })
        .collect();

        let intersections = [
            ("intersection_1", (40.7831, -73.9692)),
            ("intersection_2", (40.7841, -73.9712)),
            ("intersection_3", (40.7821, -73.9732)),
            ("intersection_4", (40.7851, -73.9712)),
            ("intersection_5", (40.7811, -73.9712)),
            ("intersection_6", (40.7861, -73.9702)),
        ]
        .into_iter()
        .map(|(id, coordinates)| (id.to_string(), coordinates))
        .collect();

        // Wire every building to the walkway network through the nearest
        // intersections; distances are derived from coordinates at build time
        let campus_paths = [
            ("Main_Library", "intersection_1"),
            ("Main_Library", "intersection_2"),
            ("Main_Library", "intersection_5"),
            ("Engineering_Building", "intersection_4"),
            ("Science_Building", "intersection_4"),
            ("Student_Center", "intersection_5"),
            ("Business_School", "intersection_5"),
            ("Arts_Building", "intersection_3"),
            ("Dormitory_A", "intersection_1"),
            ("Dormitory_B", "intersection_2"),
            ("Cafeteria", "intersection_5"),
            ("Gym", "intersection_6"),
            ("intersection_1", "intersection_2"),
            ("intersection_2", "intersection_3"),
            ("intersection_2", "intersection_4"),
            ("intersection_2", "intersection_6"),
            ("intersection_1", "intersection_5"),
            ("intersection_3", "intersection_5"),
        ]
        .into_iter()
        .map(|(a, b)| EdgeSpec::new(a, b, None))
        .collect();

        Self {
            map_settings: MapSettings {
                center_coordinates: (40.7831, -73.9712),
                map_bounds_km: 2.0,
                zoom_level: 16,
            },
            buildings,
            intersections,
            campus_paths,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_campus_is_internally_consistent() {
        let config = CampusConfig::default_campus();
        assert_eq!(config.buildings.len(), 10);
        assert_eq!(config.intersections.len(), 6);
        for path in &config.campus_paths {
            assert!(config.has_node(&path.from), "dangling path: {}", path.from);
            assert!(config.has_node(&path.to), "dangling path: {}", path.to);
        }
        let bounds = config.bounds();
        for building in config.buildings.values() {
            let (lat, lon) = building.coordinates;
            assert!(bounds.contains(lat, lon));
        }
    }

    #[test]
    fn round_trips_through_json() {
        let config = CampusConfig::default_campus();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let back: CampusConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.buildings.len(), config.buildings.len());
        assert_eq!(back.campus_paths, config.campus_paths);
    }

    #[test]
    fn building_category_defaults_on_the_wire() {
        let json = r#"{
            "name": "Annex",
            "coordinates": [40.78, -73.97],
            "description": "Overflow offices"
        }"#;
        let record: BuildingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category, "general");
    }

    #[test]
    fn node_coordinates_covers_both_record_kinds() {
        let config = CampusConfig::default_campus();
        let library = config.node_coordinates("Main_Library").unwrap();
        assert!((library.y() - 40.7831).abs() < 1e-9);
        assert!((library.x() - -73.9712).abs() < 1e-9);
        assert!(config.node_coordinates("intersection_1").is_some());
        assert!(config.node_coordinates("nowhere").is_none());
    }
}
