//! Facility query engine
//!
//! This module contains the queries the presentation layer runs against the
//! campus dataset. Every query is a pure function over borrowed data, so a
//! single [`Campus`](crate::facility::Campus) can serve any number of callers
//! at once.
//!
//! # Overview
//!
//! - **Classifier**: Facility category from a room name, and category grouping
//! - **Floor**: Floor label from a room number, and floor-scoped room lists
//! - **Nearby**: Landmark rooms next to a target room
//! - **Directions**: Templated step-by-step directions
//! - **Search**: Case-insensitive search by name, number or department
//!
//! # Usage Example
//!
//! ```rust
//! use campus_wayfinder::facility::{Building, Campus, Room};
//! use campus_wayfinder::navigation::*;
//! use campus_wayfinder::types::{FacilityCategory, FloorLabel};
//!
//! let campus = Campus::new(vec![Building::new("SJT", "SJT", 1)
//!     .with_room(Room::new("G01", "Physics Lab", 500.0, "Physics"))
//!     .with_room(Room::new("G02", "Toilet", 50.0, "Facilities"))])
//! .unwrap();
//!
//! assert_eq!(classify("Physics Lab"), FacilityCategory::Labs);
//! assert_eq!(resolve_floor("G01"), Some(FloorLabel::Ground));
//!
//! let route = directions(&campus, "SJT", FloorLabel::Ground, "G01").unwrap();
//! assert_eq!(route.lines()[3], "The room is located near Toilet (G02).");
//!
//! let hits = search(&campus, "toilet");
//! assert_eq!(hits.len(), 1);
//! ```

pub mod classifier;
pub mod directions;
pub mod error;
pub mod floor;
pub mod nearby;
pub mod search;

// Re-export all public types for convenience
pub use classifier::{classify, group_by_category, is_landmark};
pub use directions::{directions, DirectionStep, Directions, Landmark};
pub use error::{QueryError, QueryResult};
pub use floor::{parse_floor, resolve_floor, rooms_on_floor, search_floor_name};
pub use nearby::{nearby_facilities, MAX_NEARBY_FACILITIES, MAX_ORDINAL_DISTANCE};
pub use search::{search, SearchMatch};
