//! Room records and their derived properties
//!
//! This module contains the Room struct. A room stores only what the dataset
//! authors write down; its category, floor and corridor position are derived
//! from the name and number on demand.

use crate::navigation::{classifier, floor};
use crate::types::{FacilityCategory, FloorLabel, RoomNumber};
use serde::{Deserialize, Serialize};

/// Represents a room within a building
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Room number as printed on the door
    #[serde(alias = "roomNo")]
    pub room_no: RoomNumber,
    /// Human-readable name of the room
    #[serde(alias = "roomName")]
    pub room_name: String,
    /// Floor area in square feet
    pub area: f64,
    /// Department that owns the room
    pub department: String,
}

impl Room {
    /// Create a new room
    pub fn new(
        room_no: impl Into<RoomNumber>,
        room_name: impl Into<String>,
        area: f64,
        department: impl Into<String>,
    ) -> Self {
        Self {
            room_no: room_no.into(),
            room_name: room_name.into(),
            area,
            department: department.into(),
        }
    }

    /// Facility category derived from the room name
    pub fn category(&self) -> FacilityCategory {
        classifier::classify(&self.room_name)
    }

    /// Floor derived from the room number, `None` if unclassifiable
    pub fn floor(&self) -> Option<FloorLabel> {
        floor::resolve_floor(self.room_no.as_str())
    }

    /// Check if this room lies on the given floor
    pub fn is_on_floor(&self, floor: FloorLabel) -> bool {
        self.floor() == Some(floor.normalized())
    }

    /// Position of the room along its corridor
    pub fn ordinal(&self) -> Option<u64> {
        self.room_no.ordinal()
    }

    /// Check if this room is useful as a reference point in directions
    pub fn is_landmark(&self) -> bool {
        classifier::is_landmark(&self.room_name)
    }
}
