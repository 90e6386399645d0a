//! Tests for floor resolution and floor-scoped room listings

use campus_wayfinder::facility::{Building, Campus, Room};
use campus_wayfinder::navigation::{parse_floor, resolve_floor, rooms_on_floor, QueryError};
use campus_wayfinder::types::FloorLabel;

fn room_numbers(rooms: &[&Room]) -> Vec<String> {
    rooms.iter().map(|r| r.room_no.to_string()).collect()
}

#[test]
fn test_resolution_uses_first_character_only() {
    assert_eq!(resolve_floor("G01"), Some(FloorLabel::Ground));
    assert_eq!(resolve_floor("101"), Some(FloorLabel::Upper(1)));
    assert_eq!(resolve_floor("9A"), Some(FloorLabel::Upper(9)));
    // Tenth floor rooms read as first floor
    assert_eq!(resolve_floor("1001"), Some(FloorLabel::Upper(1)));
}

#[test]
fn test_unclassifiable_numbers() {
    for number in ["", "001", "g01", "B12", "-1"] {
        assert_eq!(resolve_floor(number), None, "{:?} should not resolve", number);
    }
}

#[test]
fn test_every_listed_room_resolves_to_the_requested_floor() {
    let campus = Campus::bundled().unwrap();

    for building in campus.buildings() {
        for floor in building.floor_labels() {
            for room in rooms_on_floor(building, floor) {
                assert_eq!(room.floor(), Some(floor));
            }
        }
    }
}

#[test]
fn test_bundled_floor_listing() {
    let campus = Campus::bundled().unwrap();
    let gdn = campus.get_building("GDN").unwrap();

    assert_eq!(gdn.floor_labels().len(), 5);
    assert_eq!(gdn.floor_labels()[4], FloorLabel::Upper(4));
    assert_eq!(room_numbers(&gdn.rooms_on_floor(FloorLabel::Upper(4))), vec!["401", "402"]);
    assert_eq!(room_numbers(&gdn.rooms_on_floor(FloorLabel::Ground)), vec!["G01", "G02"]);
}

#[test]
fn test_floor_outside_building_is_empty() {
    let building = Building::new("MB", "Main Building", 2)
        .with_room(Room::new("G01", "Dean's Office", 300.0, "Administration"))
        .with_room(Room::new("301", "Stray Room", 10.0, "Estates"));

    assert!(rooms_on_floor(&building, FloorLabel::Upper(3)).is_empty());
    assert!(rooms_on_floor(&building, FloorLabel::Upper(10)).is_empty());
    assert_eq!(building.unclassified_rooms().len(), 1);
}

#[test]
fn test_parse_floor_labels() {
    assert_eq!(parse_floor("Ground Floor"), Ok(FloorLabel::Ground));
    assert_eq!(parse_floor("Floor 3"), Ok(FloorLabel::Upper(3)));
    assert_eq!(parse_floor("Basement"), Err(QueryError::UnknownFloor("Basement".to_string())));
}
