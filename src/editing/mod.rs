//! Runtime editing of the campus record set
//!
//! Each mutation is an explicit tagged request validated against the current
//! records before any state is touched. The validation rules live here and
//! nowhere else: coordinates must fall inside the campus bounds, paths are
//! rejected as duplicates in either direction, and self-loop paths are
//! rejected outright. Shape errors (a coordinate that is not a 2-tuple,
//! missing fields) surface at deserialization of the request itself.

use serde::Deserialize;

use crate::Error;
use crate::loading::{BuildingRecord, CampusConfig, EdgeSpec};

/// A single edit to the campus records
///
/// `AddBuilding` and `AddIntersection` replace an existing record with the
/// same id; `AddPath` strictly rejects duplicates.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    AddBuilding {
        id: String,
        name: String,
        /// `[latitude, longitude]`
        coordinates: (f64, f64),
        #[serde(default)]
        description: String,
        #[serde(rename = "type", default)]
        category: Option<String>,
    },
    DeleteBuilding {
        id: String,
    },
    AddIntersection {
        id: String,
        coordinates: (f64, f64),
    },
    DeleteIntersection {
        id: String,
    },
    AddPath {
        from: String,
        to: String,
        #[serde(default)]
        distance: Option<f64>,
    },
    DeletePath {
        from: String,
        to: String,
    },
}

impl Mutation {
    /// Check the mutation against the current records without touching them
    pub fn validate(&self, config: &CampusConfig) -> Result<(), Error> {
        match self {
            Self::AddBuilding {
                id,
                name,
                coordinates,
                ..
            } => {
                if id.is_empty() || name.is_empty() {
                    return Err(Error::InvalidData(
                        "Building id and name must not be empty".to_string(),
                    ));
                }
                check_bounds(config, *coordinates)
            }
            Self::DeleteBuilding { id } => {
                if !config.buildings.contains_key(id) {
                    return Err(Error::BuildingNotFound(id.clone()));
                }
                Ok(())
            }
            Self::AddIntersection { id, coordinates } => {
                if id.is_empty() {
                    return Err(Error::InvalidData(
                        "Intersection id must not be empty".to_string(),
                    ));
                }
                check_bounds(config, *coordinates)
            }
            Self::DeleteIntersection { id } => {
                if !config.intersections.contains_key(id) {
                    return Err(Error::IntersectionNotFound(id.clone()));
                }
                Ok(())
            }
            Self::AddPath { from, to, distance } => {
                if from == to {
                    return Err(Error::InvalidData(
                        "Cannot create a path from a node to itself".to_string(),
                    ));
                }
                if !config.has_node(from) {
                    return Err(Error::NodeNotFound(from.clone()));
                }
                if !config.has_node(to) {
                    return Err(Error::NodeNotFound(to.clone()));
                }
                if config.path_exists(from, to) {
                    return Err(Error::DuplicatePath(from.clone(), to.clone()));
                }
                if let Some(distance) = distance {
                    if !distance.is_finite() || *distance < 0.0 {
                        return Err(Error::InvalidData(format!(
                            "Path distance must be a non-negative number, got {distance}"
                        )));
                    }
                }
                Ok(())
            }
            Self::DeletePath { from, to } => {
                if !config.path_exists(from, to) {
                    return Err(Error::PathNotFound(from.clone(), to.clone()));
                }
                Ok(())
            }
        }
    }

    /// Apply to a record set that has already passed validation
    pub(crate) fn apply_to(self, config: &mut CampusConfig) {
        match self {
            Self::AddBuilding {
                id,
                name,
                coordinates,
                description,
                category,
            } => {
                config.buildings.insert(
                    id,
                    BuildingRecord {
                        name,
                        coordinates,
                        description,
                        category: category.unwrap_or_else(|| "general".to_string()),
                    },
                );
            }
            Self::DeleteBuilding { id } => {
                // Paths referencing the building stay in the record set and
                // are skipped as dangling at graph build time
                config.buildings.remove(&id);
            }
            Self::AddIntersection { id, coordinates } => {
                config.intersections.insert(id, coordinates);
            }
            Self::DeleteIntersection { id } => {
                config.intersections.remove(&id);
                config.campus_paths.retain(|path| !path.touches(&id));
            }
            Self::AddPath { from, to, distance } => {
                config.campus_paths.push(EdgeSpec::new(from, to, distance));
            }
            Self::DeletePath { from, to } => {
                config.campus_paths.retain(|path| !path.joins(&from, &to));
            }
        }
    }
}

fn check_bounds(config: &CampusConfig, (lat, lon): (f64, f64)) -> Result<(), Error> {
    if !config.bounds().contains(lat, lon) {
        return Err(Error::OutOfBounds { lat, lon });
    }
    Ok(())
}
