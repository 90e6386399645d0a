//! Campus facility model
//!
//! This module manages buildings and rooms, the campus registry that indexes
//! them, and dataset loading.
//!
//! # Overview
//!
//! - **Building**: A building with its floor count and rooms in dataset order
//! - **Room**: A room with number, name, area and department
//! - **Campus**: The immutable dataset with building lookup
//! - **Dataset**: JSON loading for the bundled or an alternate dataset
//!
//! # Usage Example
//!
//! ```rust
//! use campus_wayfinder::facility::*;
//! use campus_wayfinder::types::FloorLabel;
//!
//! let building = Building::new("SJT", "Silver Jubilee Tower", 2)
//!     .with_room(Room::new("G01", "Physics Lab", 500.0, "Physics"))
//!     .with_room(Room::new("G02", "Toilet", 50.0, "Facilities"));
//!
//! let campus = Campus::new(vec![building]).unwrap();
//! let sjt = campus.get_building("SJT").unwrap();
//! assert_eq!(sjt.rooms_on_floor(FloorLabel::Ground).len(), 2);
//!
//! let bundled = Campus::bundled().unwrap();
//! assert!(bundled.building_count() > 0);
//! ```

pub mod building;
pub mod dataset;
pub mod registry;
pub mod room;

// Re-export all public types for convenience
pub use building::Building;
pub use dataset::{DatasetError, DatasetFile};
pub use registry::{Campus, CampusSummary};
pub use room::Room;
