//! Free-text room search
//!
//! A linear scan over every room in building-then-room order. There is no
//! ranking: results come back in dataset order.

use crate::facility::{Building, Campus, Room};
use crate::navigation::floor::search_floor_name;
use crate::types::{BuildingId, RoomNumber};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A room matching a search query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMatch {
    /// Building containing the room
    pub building_id: BuildingId,
    /// Display name of the building
    pub building_name: String,
    /// Room number
    pub room_no: RoomNumber,
    /// Room name
    pub room_name: String,
    /// Floor name in the search listing convention
    pub floor: String,
    /// Department that owns the room
    pub department: String,
}

impl SearchMatch {
    fn new(building: &Building, room: &Room) -> Self {
        Self {
            building_id: building.id.clone(),
            building_name: building.name.clone(),
            room_no: room.room_no.clone(),
            room_name: room.room_name.clone(),
            floor: search_floor_name(room.room_no.as_str()).to_string(),
            department: room.department.clone(),
        }
    }
}

/// Search every room by name, number or department
///
/// A room matches when the lower-cased query is a substring of its lower-cased
/// name, number or department. An empty or whitespace-only query matches
/// nothing. The query itself is not trimmed before matching.
pub fn search(campus: &Campus, query: &str) -> Vec<SearchMatch> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let matches: Vec<SearchMatch> = campus
        .all_rooms()
        .filter(|(_, room)| room_matches(room, &needle))
        .map(|(building, room)| SearchMatch::new(building, room))
        .collect();

    debug!(query, results = matches.len(), "Search completed");
    matches
}

fn room_matches(room: &Room, needle: &str) -> bool {
    room.room_name.to_lowercase().contains(needle)
        || room.room_no.as_str().to_lowercase().contains(needle)
        || room.department.to_lowercase().contains(needle)
}
