//! Shared navigation state
//!
//! One `Navigator` owns the authoritative records, the derived campus graph
//! snapshot, and the per-building interior graph cache. Readers grab an
//! `Arc` of the current graph and run queries without holding any lock;
//! mutations rebuild a fresh graph and swap the reference, so a reader only
//! ever observes a complete pre- or post-mutation snapshot.

use std::sync::Arc;

use hashbrown::HashMap;
use log::info;
use parking_lot::{Mutex, RwLock};
use serde::Serialize;

use crate::Error;
use crate::editing::Mutation;
use crate::geometry::CampusBounds;
use crate::loading::{
    CampusConfig, ConfigStore, build_campus_graph, build_interior_graph,
};
use crate::model::campus::{CampusGraph, GraphInfo};
use crate::model::interior::{InteriorConfig, InteriorGraph, qualified_room_id};
use crate::routing::{
    CompositeRouteResult, Destination, DistanceMatrix, RouteResult, campus_to_room_route,
    destinations_from, distance_matrix, interior_route, outdoor_route,
};

/// A building entry as served to listing consumers
#[derive(Debug, Clone, Serialize)]
pub struct BuildingSummary {
    pub id: String,
    pub name: String,
    pub coordinates: (f64, f64),
    pub description: String,
}

/// A room entry as served to listing consumers
#[derive(Debug, Clone, Serialize)]
pub struct RoomInfo {
    /// Fully qualified room id
    pub id: String,
    pub name: String,
    pub kind: &'static str,
    pub floor: String,
    pub level: i32,
    pub coordinates: (f64, f64),
}

type InteriorSlot = Arc<Mutex<Option<Arc<InteriorGraph>>>>;

pub struct Navigator {
    store: ConfigStore,
    records: RwLock<CampusConfig>,
    graph: RwLock<Arc<CampusGraph>>,
    interiors: Mutex<HashMap<String, InteriorSlot>>,
}

impl Navigator {
    /// Open a navigator over a config store, falling back to the built-in
    /// default campus when no document has been stored yet
    pub fn open(store: ConfigStore) -> Result<Self, Error> {
        let records = store
            .load_campus()?
            .unwrap_or_else(CampusConfig::default_campus);
        let graph = Arc::new(build_campus_graph(&records));

        Ok(Self {
            store,
            records: RwLock::new(records),
            graph: RwLock::new(graph),
            interiors: Mutex::new(HashMap::new()),
        })
    }

    /// Current campus graph snapshot; the read lock is held only for the
    /// duration of the clone, not the query
    pub fn graph(&self) -> Arc<CampusGraph> {
        self.graph.read().clone()
    }

    pub fn bounds(&self) -> CampusBounds {
        self.records.read().bounds()
    }

    pub fn is_within_bounds(&self, lat: f64, lon: f64) -> bool {
        self.bounds().contains(lat, lon)
    }

    pub fn graph_info(&self) -> GraphInfo {
        self.graph().info()
    }

    /// Apply a record mutation: validate, persist, then commit and swap
    ///
    /// Persistence is the terminal step before the commit - when the write
    /// fails, the served records and graph are left untouched and the caller
    /// may retry.
    pub fn apply(&self, mutation: Mutation) -> Result<(), Error> {
        let invalidates_interiors = matches!(mutation, Mutation::DeleteIntersection { .. });

        let mut records = self.records.write();
        mutation.validate(&records)?;

        let mut next = records.clone();
        mutation.apply_to(&mut next);
        self.store.save_campus(&next)?;

        let graph = Arc::new(build_campus_graph(&next));
        *records = next;
        *self.graph.write() = graph;
        drop(records);

        if invalidates_interiors {
            self.invalidate_all_interiors();
        }
        Ok(())
    }

    /// The stored interior document for a building, or its default interior
    pub fn interior_config(&self, building_id: &str) -> Result<InteriorConfig, Error> {
        let name = self.building_name(building_id)?;
        match self.store.load_interior(building_id)? {
            Some(config) => Ok(config),
            None => Ok(InteriorConfig::default_for(building_id, &name)),
        }
    }

    /// Replace a building's interior configuration and evict its cached graph
    pub fn update_interior(
        &self,
        building_id: &str,
        mut config: InteriorConfig,
    ) -> Result<(), Error> {
        let name = self.building_name(building_id)?;
        config.building_id = building_id.to_string();
        config.building_name = name;

        self.store.save_interior(&config)?;
        self.invalidate_interior(building_id);
        info!("Interior configuration updated for {building_id}");
        Ok(())
    }

    /// Lazily built interior graph for a building
    ///
    /// Concurrent requests for the same building serialize on its cache
    /// slot, so the graph is built at most once per eviction; requests for
    /// different buildings proceed independently.
    pub fn interior_graph(&self, building_id: &str) -> Result<Arc<InteriorGraph>, Error> {
        let slot = {
            let mut cache = self.interiors.lock();
            cache.entry(building_id.to_string()).or_default().clone()
        };

        let mut entry = slot.lock();
        if let Some(graph) = entry.as_ref() {
            return Ok(graph.clone());
        }

        let config = self.interior_config(building_id)?;
        let graph = Arc::new(build_interior_graph(&config));
        *entry = Some(graph.clone());
        Ok(graph)
    }

    /// Drop one building's cached interior graph
    pub fn invalidate_interior(&self, building_id: &str) {
        self.interiors.lock().remove(building_id);
    }

    /// Drop every cached interior graph
    pub fn invalidate_all_interiors(&self) {
        self.interiors.lock().clear();
    }

    /// Shortest outdoor route between two campus nodes
    pub fn find_route(&self, start: &str, end: &str) -> RouteResult {
        outdoor_route(&self.graph(), start, end)
    }

    /// Shortest route between two rooms inside one building
    ///
    /// Room references may be qualified ids, bare room ids or display names.
    pub fn find_interior_route(
        &self,
        building_id: &str,
        start_room: &str,
        end_room: &str,
    ) -> Result<RouteResult, Error> {
        let config = self.interior_config(building_id)?;
        let start = self.resolve_with(&config, start_room)?;
        let end = self.resolve_with(&config, end_room)?;
        let graph = self.interior_graph(building_id)?;
        Ok(interior_route(&graph, &start, &end))
    }

    /// Route from a start building to a specific room in the end building
    pub fn find_route_to_room(
        &self,
        start_building: &str,
        end_building: &str,
        end_room: &str,
    ) -> Result<CompositeRouteResult, Error> {
        let campus = self.graph();

        // An unknown end building fails the outdoor leg outright and the
        // interior leg is never attempted
        if !self.records.read().buildings.contains_key(end_building) {
            return Ok(CompositeRouteResult {
                success: false,
                outdoor: RouteResult::not_found(start_building, end_building),
                interior: None,
                total_distance: 0.0,
                total_walk_time: 0,
            });
        }

        let config = self.interior_config(end_building)?;
        let interior = self.interior_graph(end_building)?;
        Ok(campus_to_room_route(
            &campus,
            &interior,
            &config,
            start_building,
            end_building,
            end_room,
        ))
    }

    /// Resolve a room reference within a building to its fully qualified id
    pub fn resolve_room(&self, building_id: &str, room: &str) -> Result<String, Error> {
        let config = self.interior_config(building_id)?;
        self.resolve_with(&config, room)
    }

    fn resolve_with(&self, config: &InteriorConfig, room: &str) -> Result<String, Error> {
        config
            .resolve_room(room)
            .ok_or_else(|| Error::RoomNotFound {
                building: config.building_id.clone(),
                room: room.to_string(),
            })
    }

    /// All buildings reachable from the given one, nearest first
    pub fn destinations_from(&self, start: &str) -> Result<Vec<Destination>, Error> {
        if !self.records.read().buildings.contains_key(start) {
            return Err(Error::BuildingNotFound(start.to_string()));
        }
        Ok(destinations_from(&self.graph(), start))
    }

    /// Building-to-building shortest-path distance matrix
    pub fn distance_matrix(&self) -> DistanceMatrix {
        distance_matrix(&self.graph())
    }

    pub fn building_list(&self) -> Vec<BuildingSummary> {
        self.records
            .read()
            .buildings
            .iter()
            .map(|(id, record)| BuildingSummary {
                id: id.clone(),
                name: record.name.clone(),
                coordinates: record.coordinates,
                description: record.description.clone(),
            })
            .collect()
    }

    /// All rooms of a building in floor order, vertical nodes excluded
    pub fn building_rooms(&self, building_id: &str) -> Result<Vec<RoomInfo>, Error> {
        let config = self.interior_config(building_id)?;
        let mut rooms: Vec<_> = config
            .floors
            .iter()
            .flat_map(|(floor_id, floor)| {
                floor.rooms.iter().map(|(room_id, room)| RoomInfo {
                    id: qualified_room_id(building_id, floor_id, room_id),
                    name: room.name.clone(),
                    kind: room.kind.as_str(),
                    floor: floor_id.clone(),
                    level: floor.level,
                    coordinates: room.coordinates,
                })
            })
            .collect();
        rooms.sort_by(|a, b| a.level.cmp(&b.level).then_with(|| a.id.cmp(&b.id)));
        Ok(rooms)
    }

    fn building_name(&self, building_id: &str) -> Result<String, Error> {
        self.records
            .read()
            .buildings
            .get(building_id)
            .map(|record| record.name.clone())
            .ok_or_else(|| Error::BuildingNotFound(building_id.to_string()))
    }
}
