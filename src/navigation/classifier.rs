//! Room classification
//!
//! Rooms carry no explicit type in the dataset, so the category is read off
//! the room name with case-insensitive keyword rules.

use crate::facility::Room;
use crate::types::FacilityCategory;
use tracing::trace;

/// Keyword rules in priority order; the first keyword found in the name wins
const CATEGORY_RULES: [(&str, FacilityCategory); 4] = [
    ("lab", FacilityCategory::Labs),
    ("conference", FacilityCategory::ConferenceRooms),
    ("class", FacilityCategory::Classrooms),
    ("auditorium", FacilityCategory::Auditoriums),
];

/// Keywords that make a room a usable reference point in directions
const LANDMARK_KEYWORDS: [&str; 4] = ["lab", "toilet", "washroom", "class"];

/// Classify a room by its name
///
/// Matching is a case-insensitive substring test against each rule in
/// priority order (`lab`, `conference`, `class`, `auditorium`). A name that
/// matches none of them is [`FacilityCategory::Other`].
pub fn classify(room_name: &str) -> FacilityCategory {
    let name = room_name.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map(|&(_, category)| category)
        .unwrap_or(FacilityCategory::Other)
}

/// Check if a room name marks a landmark (lab, toilet, washroom or classroom)
pub fn is_landmark(room_name: &str) -> bool {
    let name = room_name.to_lowercase();
    LANDMARK_KEYWORDS.iter().any(|keyword| name.contains(keyword))
}

/// Group rooms into category buckets
///
/// Buckets appear in the order their category is first encountered, and each
/// bucket keeps its rooms in input order.
pub fn group_by_category(rooms: &[Room]) -> Vec<(FacilityCategory, Vec<&Room>)> {
    let mut groups: Vec<(FacilityCategory, Vec<&Room>)> = Vec::new();

    for room in rooms {
        let category = room.category();
        match groups.iter_mut().find(|(c, _)| *c == category) {
            Some((_, bucket)) => bucket.push(room),
            None => groups.push((category, vec![room])),
        }
    }

    trace!(rooms = rooms.len(), groups = groups.len(), "Grouped rooms by category");
    groups
}
