//! Floor derivation from room numbers
//!
//! Rooms do not store their floor. It is read off the first character of the
//! room number: `G` is the ground floor and a digit `d` in `1..=9` is floor `d`.
//! Only the first character is consulted, so a tenth floor cannot be told
//! apart from the first; buildings with ten or more floors are not supported.
//!
//! Search results use a second, older naming scheme ([`search_floor_name`])
//! that only knows three upper floors. The two are kept separate on purpose.

use crate::facility::{Building, Room};
use crate::navigation::error::{QueryError, QueryResult};
use crate::types::FloorLabel;
use tracing::trace;

/// Parse a floor label such as `"Ground Floor"` or `"Floor 2"`
pub fn parse_floor(label: &str) -> QueryResult<FloorLabel> {
    label.parse::<FloorLabel>().map_err(|_| QueryError::UnknownFloor(label.to_string()))
}

/// Resolve the floor of a room from its number
///
/// Returns `None` for numbers that follow neither convention (including a
/// leading `0` and a lowercase `g`).
pub fn resolve_floor(room_no: &str) -> Option<FloorLabel> {
    match room_no.chars().next()? {
        'G' => Some(FloorLabel::Ground),
        c @ '1'..='9' => c.to_digit(10).map(FloorLabel::Upper),
        _ => None,
    }
}

/// Rooms of a building that lie on `floor`, in dataset order
///
/// A floor the building does not have, or one no room number can resolve to
/// (such as `Floor 10`), yields no rooms. The floor-count guard applies to the
/// ground floor too: a building with `floors == 0` lists nothing, even for
/// rooms numbered `G..`. `Campus::new` rejects such buildings.
pub fn rooms_on_floor(building: &Building, floor: FloorLabel) -> Vec<&Room> {
    if !building.has_floor(floor) {
        trace!(building = %building.id, %floor, "Floor outside building");
        return Vec::new();
    }

    building.rooms.iter().filter(|r| r.is_on_floor(floor)).collect()
}

/// Floor name shown next to a search result
///
/// `G` is "Ground Floor" and `1`..`3` are "First Floor" to "Third Floor".
/// Every other number, including fourth-floor rooms, falls back to
/// "Ground Floor". This differs from [`resolve_floor`] and is pinned by tests.
pub fn search_floor_name(room_no: &str) -> &'static str {
    match room_no.chars().next() {
        Some('1') => "First Floor",
        Some('2') => "Second Floor",
        Some('3') => "Third Floor",
        _ => "Ground Floor",
    }
}
