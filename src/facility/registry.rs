//! Campus registry and building lookup
//!
//! This module contains the [`Campus`] struct: the complete, immutable set of
//! buildings with an id index for constant-time lookup. A `Campus` is built
//! once at startup and handed by reference to every query.

use crate::facility::dataset::DatasetError;
use crate::facility::{building::Building, room::Room};
use crate::navigation::{directions, search, Directions, QueryError, QueryResult, SearchMatch};
use crate::types::{BuildingId, FacilityCategory, FloorLabel};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

/// The campus dataset with lookup capabilities
#[derive(Debug, Clone)]
pub struct Campus {
    buildings: Vec<Building>,
    /// Quick lookup map from building ID to index
    building_index: HashMap<BuildingId, usize>,
}

/// Dataset totals for the buildings overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampusSummary {
    /// Number of buildings
    pub total_buildings: usize,
    /// Number of rooms across all buildings
    pub total_rooms: usize,
    /// Rooms excluded from floor-scoped views
    pub unclassified_rooms: usize,
    /// Room count per facility category, in category priority order
    pub rooms_per_category: Vec<(FacilityCategory, usize)>,
}

impl Campus {
    /// Build a campus from a list of buildings, validating as it goes
    pub fn new(buildings: Vec<Building>) -> Result<Self, DatasetError> {
        if buildings.is_empty() {
            return Err(DatasetError::Validation("dataset must contain at least one building".into()));
        }

        let mut building_index = HashMap::with_capacity(buildings.len());
        for (idx, building) in buildings.iter().enumerate() {
            building.validate().map_err(DatasetError::Validation)?;

            if building_index.insert(building.id.clone(), idx).is_some() {
                return Err(DatasetError::Validation(format!(
                    "duplicate building id: {}",
                    building.id
                )));
            }

            for room in building.unclassified_rooms() {
                warn!(
                    building = %building.id,
                    room = %room.room_no,
                    "Room number does not map to a floor of this building; excluded from floor views"
                );
            }
        }

        debug!(buildings = buildings.len(), "Campus dataset indexed");
        Ok(Self { buildings, building_index })
    }

    /// All buildings in dataset order
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Get a building by ID
    pub fn get_building(&self, building_id: &str) -> Option<&Building> {
        self.building_index.get(building_id).and_then(|&idx| self.buildings.get(idx))
    }

    /// Get a building by ID, reporting a miss as [`QueryError::BuildingNotFound`]
    pub fn require_building(&self, building_id: &str) -> QueryResult<&Building> {
        self.get_building(building_id).ok_or_else(|| QueryError::building_not_found(building_id))
    }

    /// Get a room by building ID and room number
    pub fn get_room(&self, building_id: &str, room_no: &str) -> Option<&Room> {
        self.get_building(building_id).and_then(|b| b.get_room(room_no))
    }

    /// Every room paired with its building, in building-then-room order
    pub fn all_rooms(&self) -> impl Iterator<Item = (&Building, &Room)> + '_ {
        self.buildings.iter().flat_map(|b| b.rooms.iter().map(move |r| (b, r)))
    }

    /// Get total number of buildings
    pub fn building_count(&self) -> usize {
        self.buildings.len()
    }

    /// Get total number of rooms across all buildings
    pub fn total_room_count(&self) -> usize {
        self.buildings.iter().map(Building::room_count).sum()
    }

    /// Free-text search across every room
    pub fn search(&self, query: &str) -> Vec<SearchMatch> {
        search::search(self, query)
    }

    /// Directions to a room
    pub fn directions(
        &self,
        building_id: &str,
        floor: FloorLabel,
        room_no: &str,
    ) -> QueryResult<Directions> {
        directions::directions(self, building_id, floor, room_no)
    }

    /// Totals for the buildings overview
    pub fn summary(&self) -> CampusSummary {
        let rooms_per_category = FacilityCategory::ALL
            .iter()
            .map(|&category| {
                let count = self.all_rooms().filter(|(_, r)| r.category() == category).count();
                (category, count)
            })
            .collect();

        CampusSummary {
            total_buildings: self.building_count(),
            total_rooms: self.total_room_count(),
            unclassified_rooms: self.buildings.iter().map(|b| b.unclassified_rooms().len()).sum(),
            rooms_per_category,
        }
    }
}
