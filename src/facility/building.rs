//! Building records and room organization
//!
//! This module contains the Building struct and the per-building views the
//! presentation layer needs: floor listings, floor-scoped rooms, facility
//! groupings and nearby landmarks.

use crate::facility::room::Room;
use crate::navigation::{classifier, floor, nearby};
use crate::types::{BuildingId, FacilityCategory, FloorLabel};
use serde::{Deserialize, Serialize};

/// Represents a building on campus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    /// Unique identifier for the building
    pub id: BuildingId,
    /// Human-readable name of the building
    pub name: String,
    /// Number of floors, counting the ground floor
    pub floors: u32,
    /// Rooms in dataset order
    #[serde(default)]
    pub rooms: Vec<Room>,
}

impl Building {
    /// Create a new building with no rooms
    pub fn new(id: impl Into<BuildingId>, name: impl Into<String>, floors: u32) -> Self {
        Self { id: id.into(), name: name.into(), floors, rooms: Vec::new() }
    }

    /// Add a room to the building
    pub fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    /// Builder-style variant of [`Building::add_room`]
    pub fn with_room(mut self, room: Room) -> Self {
        self.add_room(room);
        self
    }

    /// Get a room by its number (first match in dataset order)
    pub fn get_room(&self, room_no: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.room_no == room_no)
    }

    /// Check if a room exists in this building
    pub fn contains_room(&self, room_no: &str) -> bool {
        self.get_room(room_no).is_some()
    }

    /// Get the number of rooms in the building
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Floors of the building from the ground floor up
    pub fn floor_labels(&self) -> Vec<FloorLabel> {
        (0..self.floors).map(FloorLabel::from_index).collect()
    }

    /// Check if the building has the given floor
    pub fn has_floor(&self, floor: FloorLabel) -> bool {
        floor.index() < self.floors
    }

    /// Rooms on one floor, in dataset order
    pub fn rooms_on_floor(&self, floor: FloorLabel) -> Vec<&Room> {
        floor::rooms_on_floor(self, floor)
    }

    /// Landmark rooms next to `room_no` on `floor`
    pub fn nearby_facilities(&self, floor: FloorLabel, room_no: &str) -> Vec<&Room> {
        nearby::nearby_facilities(self, floor, room_no)
    }

    /// Rooms grouped by facility category
    pub fn facilities_by_category(&self) -> Vec<(FacilityCategory, Vec<&Room>)> {
        classifier::group_by_category(&self.rooms)
    }

    /// Get all rooms in a specific category
    pub fn get_rooms_by_category(&self, category: FacilityCategory) -> Vec<&Room> {
        self.rooms.iter().filter(|r| r.category() == category).collect()
    }

    /// Rooms whose number matches no floor convention, or a floor the building lacks
    pub fn unclassified_rooms(&self) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|r| !r.floor().is_some_and(|floor| self.has_floor(floor)))
            .collect()
    }

    /// Validate the building's own fields
    pub fn validate(&self) -> Result<(), String> {
        if self.id.as_str().trim().is_empty() {
            return Err("Building id must not be empty".to_string());
        }

        if self.floors == 0 {
            return Err(format!("Building {} must have at least one floor", self.id));
        }

        Ok(())
    }
}
