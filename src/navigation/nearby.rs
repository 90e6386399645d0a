//! Nearby landmark lookup
//!
//! Rooms on the same corridor are numbered consecutively, so rooms whose
//! numbers differ by at most [`MAX_ORDINAL_DISTANCE`] are treated as adjacent.

use crate::facility::{Building, Room};
use crate::navigation::floor::rooms_on_floor;
use crate::types::identifiers::ordinal_of;
use crate::types::FloorLabel;
use tracing::debug;

/// Largest ordinal difference at which two rooms count as neighbours
pub const MAX_ORDINAL_DISTANCE: u64 = 2;

/// Maximum number of landmarks returned
pub const MAX_NEARBY_FACILITIES: usize = 2;

/// Landmark rooms close to `room_no` on `floor`
///
/// A candidate must be on `floor`, have a different number from `room_no`,
/// have an ordinal within [`MAX_ORDINAL_DISTANCE`] of the target's and be a
/// landmark (lab, toilet, washroom or classroom). The first
/// [`MAX_NEARBY_FACILITIES`] matches in dataset order are returned; they are
/// not sorted by distance. Rooms without digits in their number have no
/// ordinal and never match.
pub fn nearby_facilities<'a>(
    building: &'a Building,
    floor: FloorLabel,
    room_no: &str,
) -> Vec<&'a Room> {
    let Some(target) = ordinal_of(room_no) else {
        debug!(building = %building.id, room = room_no, "Target room has no ordinal");
        return Vec::new();
    };

    let nearby: Vec<&Room> = rooms_on_floor(building, floor)
        .into_iter()
        .filter(|r| r.room_no != room_no)
        .filter(|r| r.ordinal().is_some_and(|ordinal| ordinal.abs_diff(target) <= MAX_ORDINAL_DISTANCE))
        .filter(|r| r.is_landmark())
        .take(MAX_NEARBY_FACILITIES)
        .collect();

    debug!(
        building = %building.id,
        %floor,
        room = room_no,
        found = nearby.len(),
        "Nearby facility lookup"
    );
    nearby
}
