//! Tests for loading alternate datasets from disk

use campus_wayfinder::facility::{Campus, DatasetError};
use campus_wayfinder::types::FloorLabel;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_dataset(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_dataset_from_file() {
    let file = write_dataset(
        r#"{
            "buildings": [
                {
                    "id": "LIB",
                    "name": "Central Library",
                    "floors": 2,
                    "rooms": [
                        {"room_no": "G01", "room_name": "Issue Counter", "area": 200.0, "department": "Library"},
                        {"room_no": "G02", "room_name": "Washroom", "area": 40.0, "department": "Facilities"},
                        {"room_no": "101", "room_name": "Reading Hall", "area": 900.0, "department": "Library"}
                    ]
                }
            ]
        }"#,
    );

    let campus = Campus::from_json_file(file.path()).unwrap();
    assert_eq!(campus.building_count(), 1);
    assert_eq!(campus.total_room_count(), 3);

    let route = campus.directions("LIB", FloorLabel::Ground, "G01").unwrap();
    assert_eq!(route.lines()[3], "The room is located near Washroom (G02).");
}

#[test]
fn test_camel_case_room_fields_are_accepted() {
    let campus = Campus::from_json_str(
        r#"{"buildings": [{"id": "A", "name": "Annex", "floors": 1, "rooms": [
            {"roomNo": "G01", "roomName": "Store", "area": 10, "department": "Estates"}
        ]}]}"#,
    )
    .unwrap();

    assert_eq!(campus.get_room("A", "G01").unwrap().room_name, "Store");
}

#[test]
fn test_missing_file() {
    let result = Campus::from_json_file("/no/such/dataset.json");
    assert!(matches!(result, Err(DatasetError::Read { .. })));
}

#[test]
fn test_malformed_json() {
    let file = write_dataset("{\"buildings\": [");
    let result = Campus::from_json_file(file.path());
    assert!(matches!(result, Err(DatasetError::Parse(_))));
}

#[test]
fn test_structural_validation() {
    let empty = Campus::from_json_str(r#"{"buildings": []}"#);
    assert!(matches!(empty, Err(DatasetError::Validation(_))));

    let duplicate = Campus::from_json_str(
        r#"{"buildings": [
            {"id": "A", "name": "One", "floors": 1},
            {"id": "A", "name": "Two", "floors": 1}
        ]}"#,
    );
    assert!(matches!(duplicate, Err(DatasetError::Validation(_))));

    let no_floors = Campus::from_json_str(r#"{"buildings": [{"id": "A", "name": "One", "floors": 0}]}"#);
    assert!(matches!(no_floors, Err(DatasetError::Validation(_))));
}

#[test]
fn test_unclassifiable_rooms_are_kept() {
    let campus = Campus::from_json_str(
        r#"{"buildings": [{"id": "A", "name": "Annex", "floors": 1, "rooms": [
            {"room_no": "G01", "room_name": "Store", "area": 10, "department": "Estates"},
            {"room_no": "B01", "room_name": "Boiler Room", "area": 30, "department": "Estates"},
            {"room_no": "201", "room_name": "Loft", "area": 30, "department": "Estates"}
        ]}]}"#,
    )
    .unwrap();

    let annex = campus.get_building("A").unwrap();
    assert_eq!(annex.room_count(), 3);
    assert_eq!(annex.rooms_on_floor(FloorLabel::Ground).len(), 1);
    assert_eq!(campus.summary().unclassified_rooms, 2);
    // Still reachable by search
    assert_eq!(campus.search("boiler").len(), 1);
}

#[test]
fn test_dataset_round_trips_through_file_layout() {
    let campus = Campus::bundled().unwrap();
    let json = serde_json::to_string(&campus.to_dataset_file()).unwrap();
    let reloaded = Campus::from_json_str(&json).unwrap();

    assert_eq!(reloaded.buildings(), campus.buildings());
}
