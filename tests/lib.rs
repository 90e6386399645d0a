// Integration tests test your crate's public API. They only have access to items
// in your crate that are marked pub. See the Cargo Targets page of the Cargo Book
// for more information.
//
//   https://doc.rust-lang.org/cargo/reference/cargo-targets.html#integration-tests
//

use campus_wayfinder::*;

mod floor_resolution_tests;

mod dataset_loading_tests;

#[test]
fn test_bundled_campus_overview() {
    let campus = Campus::bundled().unwrap();

    let ids: Vec<&str> = campus.buildings().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["SJT", "TT", "MB", "GDN"]);

    let summary = campus.summary();
    assert_eq!(summary.total_buildings, 4);
    assert_eq!(summary.total_rooms, 36);
    assert_eq!(summary.unclassified_rooms, 0);

    let per_category: usize = summary.rooms_per_category.iter().map(|(_, n)| n).sum();
    assert_eq!(per_category, summary.total_rooms);
}

#[test]
fn test_identifier_serialization_is_transparent() {
    let json = serde_json::to_string(&BuildingId::new("SJT")).unwrap();
    assert_eq!(json, "\"SJT\"");

    let room: RoomNumber = serde_json::from_str("\"G01\"").unwrap();
    assert_eq!(room, "G01");
    assert_eq!(room.ordinal(), Some(1));
}

#[test]
fn test_queries_from_many_threads_share_one_campus() {
    let campus = &Campus::bundled().unwrap();
    let expected = campus.directions("SJT", FloorLabel::Ground, "G01").unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(move || {
                    let directions = campus.directions("SJT", FloorLabel::Ground, "G01").unwrap();
                    let hits = campus.search("lab").len();
                    (directions, hits)
                })
            })
            .collect();

        let baseline_hits = campus.search("lab").len();
        for handle in handles {
            let (directions, hits) = handle.join().unwrap();
            assert_eq!(directions, expected);
            assert_eq!(hits, baseline_hits);
        }
    });
}
