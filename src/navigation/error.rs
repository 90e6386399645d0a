//! Error types for facility queries
//!
//! Lookups that miss are ordinary outcomes for the presentation layer, so
//! they are returned as values rather than raised as faults.

use thiserror::Error;

/// Errors returned by facility queries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No building with this id exists in the dataset
    #[error("Building not found: {0}")]
    BuildingNotFound(String),

    /// The building exists but has no room with this number
    #[error("Room {room} not found in building {building}")]
    RoomNotFound {
        /// Building that was searched
        building: String,
        /// Room number that was requested
        room: String,
    },

    /// A floor label could not be parsed
    #[error("Unknown floor: {0}")]
    UnknownFloor(String),
}

impl QueryError {
    /// Create a building-not-found error
    pub fn building_not_found(building: impl Into<String>) -> Self {
        Self::BuildingNotFound(building.into())
    }

    /// Create a room-not-found error
    pub fn room_not_found(building: impl Into<String>, room: impl Into<String>) -> Self {
        Self::RoomNotFound { building: building.into(), room: room.into() }
    }

    /// Check if this error reports a missing building or room
    pub fn is_not_found(&self) -> bool {
        matches!(self, QueryError::BuildingNotFound(_) | QueryError::RoomNotFound { .. })
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            QueryError::BuildingNotFound(_) => "Building Not Found",
            QueryError::RoomNotFound { .. } => "Room Not Found",
            QueryError::UnknownFloor(_) => "Unknown Floor",
        }
    }
}

/// Result type for facility queries
pub type QueryResult<T> = Result<T, QueryError>;
