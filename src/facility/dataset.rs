//! Dataset loading
//!
//! The campus dataset is a JSON document of the form
//! `{"buildings": [{"id", "name", "floors", "rooms": [...]}, ...]}`. A copy is
//! embedded in the binary at compile time; alternate datasets of the same
//! shape can be loaded from disk.

use crate::facility::{building::Building, registry::Campus};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Dataset bundled with the application
const BUNDLED_DATASET: &str = include_str!("../../data/campus.json");

/// On-disk layout of a dataset file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetFile {
    /// Buildings in display order
    pub buildings: Vec<Building>,
}

/// Errors that can occur while loading a dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Dataset file could not be read
    #[error("Failed to read dataset file {path}: {source}")]
    Read {
        /// Path that was being read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Dataset is not valid JSON of the expected shape
    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// Dataset parsed but violates a structural rule
    #[error("Dataset validation failed: {0}")]
    Validation(String),
}

impl Campus {
    /// Load the dataset bundled with the application
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json_str(BUNDLED_DATASET)
    }

    /// Parse a dataset from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let file: DatasetFile = serde_json::from_str(json)?;
        Self::new(file.buildings)
    }

    /// Load a dataset from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|source| DatasetError::Read { path: path.display().to_string(), source })?;

        let campus = Self::from_json_str(&content)?;
        info!(
            path = %path.display(),
            buildings = campus.building_count(),
            rooms = campus.total_room_count(),
            "Loaded campus dataset"
        );
        Ok(campus)
    }

    /// Serialize the dataset back into its file layout
    pub fn to_dataset_file(&self) -> DatasetFile {
        DatasetFile { buildings: self.buildings().to_vec() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FloorLabel;
    use std::io::Write;

    #[test]
    fn test_bundled_dataset_loads() {
        let campus = Campus::bundled().unwrap();
        assert!(campus.building_count() > 0);
        assert!(campus.total_room_count() > 0);
    }

    #[test]
    fn test_bundled_dataset_follows_floor_convention() {
        let campus = Campus::bundled().unwrap();
        assert_eq!(campus.summary().unclassified_rooms, 0);

        for building in campus.buildings() {
            let on_some_floor: usize =
                building.floor_labels().iter().map(|&f| building.rooms_on_floor(f).len()).sum();
            assert_eq!(on_some_floor, building.room_count(), "building {}", building.id);
        }
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{"buildings": [{"id": "SJT", "name": "SJT", "floors": 1, "rooms": [
            {"room_no": "G01", "room_name": "Physics Lab", "area": 500, "department": "Physics"}
        ]}]}"#;

        let campus = Campus::from_json_str(json).unwrap();
        let building = campus.get_building("SJT").unwrap();
        assert_eq!(building.rooms_on_floor(FloorLabel::Ground).len(), 1);
    }

    #[test]
    fn test_from_json_str_rejects_malformed_input() {
        assert!(matches!(Campus::from_json_str("[]"), Err(DatasetError::Parse(_))));
        assert!(matches!(Campus::from_json_str(r#"{"buildings": []}"#), Err(DatasetError::Validation(_))));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"buildings": [{{"id": "MB", "name": "Main Building", "floors": 2, "rooms": []}}]}}"#
        )
        .unwrap();

        let campus = Campus::from_json_file(file.path()).unwrap();
        assert_eq!(campus.get_building("MB").unwrap().floors, 2);
    }

    #[test]
    fn test_from_missing_file() {
        let result = Campus::from_json_file("/no/such/dataset.json");
        assert!(matches!(result, Err(DatasetError::Read { .. })));
    }

    #[test]
    fn test_dataset_file_round_trip() {
        let campus = Campus::bundled().unwrap();
        let json = serde_json::to_string(&campus.to_dataset_file()).unwrap();
        let reloaded = Campus::from_json_str(&json).unwrap();
        assert_eq!(reloaded.buildings(), campus.buildings());
    }
}
