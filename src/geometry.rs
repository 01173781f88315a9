//! Geodesic distance, walk time derivation and the campus bounds box

use geo::Point;
use serde::Serialize;

use crate::{EARTH_RADIUS_M, WALKING_SPEED};

/// Kilometers per degree of latitude (and of longitude at the equator)
const KM_PER_DEGREE: f64 = 111.0;

/// Great-circle distance between two geographic points in meters
///
/// Standard haversine formula in its half-angle sine-squared form. Points
/// carry longitude in `x` and latitude in `y`, both in degrees.
pub fn haversine_distance(a: Point<f64>, b: Point<f64>) -> f64 {
    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();
    let dlat = (b.y() - a.y()).to_radians();
    let dlon = (b.x() - a.x()).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_M * c
}

/// Estimated walking time in whole minutes for a distance in meters
///
/// Clamped to a minimum of one minute for any positive distance; zero for
/// a zero or absent distance.
pub fn walk_time_minutes(meters: f64) -> u32 {
    if meters <= 0.0 {
        return 0;
    }
    let minutes = (meters / WALKING_SPEED / 60.0).floor() as u32;
    minutes.max(1)
}

/// Rectangular coordinate bounds derived from a center point and a side
/// length in kilometers
///
/// Uses the 111 km/degree approximation, with the longitude span widened by
/// `cos(latitude)`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CampusBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl CampusBounds {
    pub fn from_center(center: (f64, f64), side_km: f64) -> Self {
        let (lat, lon) = center;
        let lat_offset = side_km / 2.0 / KM_PER_DEGREE;
        let lon_offset = side_km / 2.0 / (KM_PER_DEGREE * lat.to_radians().cos());

        Self {
            south: lat - lat_offset,
            west: lon - lon_offset,
            north: lat + lat_offset,
            east: lon + lon_offset,
        }
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        self.south <= lat && lat <= self.north && self.west <= lon && lon <= self.east
    }

    pub fn south_west(&self) -> (f64, f64) {
        (self.south, self.west)
    }

    pub fn north_east(&self) -> (f64, f64) {
        (self.north, self.east)
    }
}
