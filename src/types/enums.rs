//! Enumeration types for the campus directory
//!
//! This module contains all enumeration types used throughout the query engine,
//! including facility categories, floor labels and output formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Facility categories used to group a building's rooms for display
///
/// Variants are declared in display priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacilityCategory {
    /// Laboratories of any kind
    Labs,
    /// Conference and meeting rooms
    ConferenceRooms,
    /// Classrooms and lecture rooms
    Classrooms,
    /// Auditoriums and halls
    Auditoriums,
    /// Everything else (offices, toilets, stores, ...)
    Other,
}

impl FacilityCategory {
    /// All categories in priority order
    pub const ALL: [FacilityCategory; 5] = [
        FacilityCategory::Labs,
        FacilityCategory::ConferenceRooms,
        FacilityCategory::Classrooms,
        FacilityCategory::Auditoriums,
        FacilityCategory::Other,
    ];
}

impl fmt::Display for FacilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacilityCategory::Labs => write!(f, "Labs"),
            FacilityCategory::ConferenceRooms => write!(f, "Conference Rooms"),
            FacilityCategory::Classrooms => write!(f, "Classrooms"),
            FacilityCategory::Auditoriums => write!(f, "Auditoriums"),
            FacilityCategory::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for FacilityCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "labs" | "lab" => Ok(FacilityCategory::Labs),
            "conference rooms" | "conferencerooms" | "conference" => {
                Ok(FacilityCategory::ConferenceRooms)
            }
            "classrooms" | "classroom" => Ok(FacilityCategory::Classrooms),
            "auditoriums" | "auditorium" => Ok(FacilityCategory::Auditoriums),
            "other" => Ok(FacilityCategory::Other),
            _ => Err(format!("Unknown facility category: {}", s)),
        }
    }
}

/// A floor within a building
///
/// Floors are numbered the way the navigation view lists them: the ground
/// floor first, then `Floor 1`, `Floor 2`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum FloorLabel {
    /// Ground floor (room numbers prefixed with `G`)
    Ground,
    /// Upper floor `n`, where `n >= 1`
    Upper(u32),
}

impl FloorLabel {
    /// Zero-based floor index (ground floor is 0)
    pub fn index(&self) -> u32 {
        match self {
            FloorLabel::Ground => 0,
            FloorLabel::Upper(n) => *n,
        }
    }

    /// Floor label for a zero-based floor index
    pub fn from_index(index: u32) -> Self {
        if index == 0 {
            FloorLabel::Ground
        } else {
            FloorLabel::Upper(index)
        }
    }

    /// Canonical form of this label; `Upper(0)` becomes `Ground`
    pub fn normalized(self) -> Self {
        Self::from_index(self.index())
    }

    /// Check if this is the ground floor
    pub fn is_ground(&self) -> bool {
        self.index() == 0
    }
}

impl fmt::Display for FloorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloorLabel::Ground => write!(f, "Ground Floor"),
            FloorLabel::Upper(0) => write!(f, "Ground Floor"),
            FloorLabel::Upper(n) => write!(f, "Floor {}", n),
        }
    }
}

impl FromStr for FloorLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "ground floor" | "ground" | "g" => return Ok(FloorLabel::Ground),
            _ => {}
        }

        let number = normalized.strip_prefix("floor").map(str::trim).unwrap_or(&normalized);
        match number.parse::<u32>() {
            Ok(0) => Ok(FloorLabel::Ground),
            Ok(n) => Ok(FloorLabel::Upper(n)),
            Err(_) => Err(format!("Unknown floor: {}", s)),
        }
    }
}

impl From<FloorLabel> for String {
    fn from(floor: FloorLabel) -> Self {
        floor.to_string()
    }
}

impl TryFrom<String> for FloorLabel {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Output formats for query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text lines
    Text,
    /// JSON report for machine consumption
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
