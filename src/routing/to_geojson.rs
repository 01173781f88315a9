//! GeoJSON export of outdoor routes for map consumers

use geo::LineString;
use geojson::{Feature, FeatureCollection, Geometry};
use serde_json::json;

use super::route::Route;

impl Route {
    /// Convert an outdoor route to a `GeoJSON` `FeatureCollection`
    ///
    /// One LineString feature carries the full path with distance and time
    /// properties; each step becomes a Point feature. Interior routes use
    /// floor-local coordinates and are not meaningful as GeoJSON.
    pub fn to_geojson(&self) -> FeatureCollection {
        let mut features = Vec::with_capacity(self.steps.len() + 1);

        // Route coordinates are (lat, lon); GeoJSON positions are (lon, lat)
        let linestring: LineString = self
            .coordinates
            .iter()
            .map(|&(lat, lon)| (lon, lat))
            .collect::<Vec<_>>()
            .into();

        let value = json!({
            "type": "Feature",
            "geometry": Geometry::new((&linestring).into()),
            "properties": {
                "feature_type": "route",
                "total_distance": self.total_distance,
                "walk_time_minutes": self.walk_time_minutes,
            }
        });
        features.push(serde_json::from_value::<Feature>(value).unwrap());

        for (step, &(lat, lon)) in self.steps.iter().zip(&self.coordinates) {
            let point: geo::Point = (lon, lat).into();
            let value = json!({
                "type": "Feature",
                "geometry": Geometry::new((&point).into()),
                "properties": {
                    "feature_type": "step",
                    "node_id": step.node_id,
                    "name": step.name,
                    "kind": step.kind,
                    "step": step.step,
                    "distance_to_next": step.distance_to_next,
                }
            });
            features.push(serde_json::from_value::<Feature>(value).unwrap());
        }

        FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        }
    }

    pub fn to_geojson_string(&self) -> String {
        serde_json::to_string(&self.to_geojson()).unwrap_or_default()
    }
}
