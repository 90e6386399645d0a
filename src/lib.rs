//! Campus Wayfinder
//!
//! A facility query engine over a static campus dataset: buildings made of
//! rooms, each room identified by a number that encodes its floor.
//!
//! # Overview
//!
//! The library answers the questions a campus navigation front end asks:
//! what kind of facility a room is, which floor it is on, which rooms share a
//! floor, which landmarks are close to it, how to walk there, and which rooms
//! match a free-text query.
//!
//! ## Key Features
//!
//! - **Room Classification**: Ordered keyword rules map room names to categories
//! - **Floor Resolution**: Floors derived from the first character of a room number
//! - **Nearby Landmarks**: Up to two labs, toilets or classrooms next to a room
//! - **Directions**: Templated step-by-step directions with structured steps
//! - **Search**: Case-insensitive search by room name, number or department
//!
//! ## Quick Start
//!
//! ```rust
//! use campus_wayfinder::*;
//!
//! let campus = Campus::bundled()?;
//! let building = campus.get_building("SJT").unwrap();
//!
//! let ground = building.rooms_on_floor(FloorLabel::Ground);
//! assert!(!ground.is_empty());
//!
//! let route = campus.directions("SJT", FloorLabel::Ground, "G01")?;
//! for line in route.lines() {
//!     println!("{}", line);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Identifiers, enums and configuration
//! - [`facility`]: Rooms, buildings, the campus registry and dataset loading
//! - [`navigation`]: Classification, floors, nearby landmarks, directions and search
//! - [`logging`]: Tracing subscriber setup
//!
//! ## Concurrency
//!
//! A [`Campus`] is immutable once built and every query borrows it, so one
//! instance can be shared across threads without locking.

#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod facility;
pub mod logging;
pub mod navigation;
pub mod types;

// Re-export commonly used types for convenience
pub use facility::*;
pub use logging::{LoggingConfig, LoggingGuard};
pub use navigation::*;
pub use types::*;
