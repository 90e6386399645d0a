//! Core types and identifiers for the campus wayfinder
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the query engine.
//!
//! # Overview
//!
//! - **Identifiers**: String-backed identifiers for buildings and room numbers
//! - **Enums**: Facility categories, floor labels and output formats
//! - **Configuration**: CLI arguments, config file merging and validation
//!
//! # Usage Example
//!
//! ```rust
//! use campus_wayfinder::types::*;
//!
//! let building_id = BuildingId::new("SJT");
//! let room_no = RoomNumber::new("G01");
//! assert_eq!(room_no.ordinal(), Some(1));
//!
//! let floor: FloorLabel = "Floor 2".parse().unwrap();
//! assert_eq!(floor, FloorLabel::Upper(2));
//!
//! let config = WayfinderConfig::default();
//! assert!(config.validate().is_ok());
//! # let _ = building_id;
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
