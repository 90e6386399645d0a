//! Configuration structures for the campus wayfinder
//!
//! This module contains the command line interface, the optional JSON
//! configuration file and the merged [`WayfinderConfig`] with its validation
//! logic. Precedence is CLI arguments, then the configuration file, then
//! built-in defaults.

use super::{FloorLabel, OutputFormat};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "campus-wayfinder",
    version,
    about = "Campus Wayfinder - Browse campus buildings, search rooms and get directions",
    long_about = "Looks up buildings, floors and rooms in a static campus dataset, groups facilities by type, searches rooms by name, number or department and prints step-by-step directions to a room.

EXAMPLES:
    # List all buildings in the bundled dataset
    campus-wayfinder buildings

    # Rooms on the first floor of SJT
    campus-wayfinder rooms SJT \"Floor 1\"

    # Directions to a room
    campus-wayfinder directions SJT \"Ground Floor\" G01

    # Search across every building
    campus-wayfinder search \"physics lab\"

    # Use an alternate dataset and JSON output
    campus-wayfinder --dataset campus.json --output-format json search eee

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)

    Use --print-config to generate a template configuration file."
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        global = true,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Dataset file to load instead of the bundled campus dataset
    #[arg(long, global = true, help = "Dataset file path (JSON format)")]
    pub dataset: Option<String>,

    /// Output format for query results
    #[arg(
        long,
        global = true,
        help = "Output format (text or json)",
        long_help = "Output format for query results. Supported formats: text, json. Default: text"
    )]
    pub output_format: Option<String>,

    /// Maximum number of search results to print
    #[arg(long, global = true, help = "Maximum number of search results to print")]
    pub limit: Option<usize>,

    /// Directory for rolling JSON log files
    #[arg(long, global = true, help = "Also write JSON logs to daily files in this directory")]
    pub log_dir: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration and dataset without querying
    #[arg(long, help = "Validate configuration and dataset, then exit")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,

    /// Query to run (defaults to listing buildings)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Queries the CLI can run against the dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List all buildings
    #[default]
    Buildings,
    /// List the floors of a building
    Floors {
        /// Building identifier (e.g. SJT)
        building: String,
    },
    /// Show a building's rooms grouped by facility category
    Facilities {
        /// Building identifier (e.g. SJT)
        building: String,
        /// Room number to highlight
        #[arg(long)]
        highlight: Option<String>,
    },
    /// List the rooms on one floor of a building
    Rooms {
        /// Building identifier (e.g. SJT)
        building: String,
        /// Floor label (e.g. "Ground Floor", "Floor 2")
        floor: FloorLabel,
    },
    /// List landmark rooms close to a room
    Nearby {
        /// Building identifier (e.g. SJT)
        building: String,
        /// Floor label (e.g. "Ground Floor", "Floor 2")
        floor: FloorLabel,
        /// Room number (e.g. G01)
        room: String,
    },
    /// Print directions to a room
    Directions {
        /// Building identifier (e.g. SJT)
        building: String,
        /// Floor label (e.g. "Ground Floor", "Floor 2")
        floor: FloorLabel,
        /// Room number (e.g. G01)
        room: String,
    },
    /// Search rooms by name, number or department
    Search {
        /// Free-text query
        query: String,
    },
    /// Print dataset totals
    Summary,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Dataset file to load instead of the bundled dataset
    pub dataset_path: Option<String>,

    /// Output format for query results
    pub output_format: Option<String>,

    /// Maximum number of search results to print
    pub search_result_limit: Option<usize>,
}

/// Configuration for the campus wayfinder
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WayfinderConfig {
    /// Dataset file to load; `None` uses the bundled dataset
    pub dataset_path: Option<String>,

    /// Output format for query results
    pub output_format: String,

    /// Maximum number of search results to print; `None` prints all
    pub search_result_limit: Option<usize>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for wayfinder configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Output format is not recognised
    #[error("Invalid output format: {0} (supported: text, json)")]
    InvalidOutputFormat(String),

    /// Search result limit is zero
    #[error("Search result limit must be greater than 0")]
    InvalidSearchLimit,

    /// Dataset path is present but empty
    #[error("Dataset path must not be empty")]
    EmptyDatasetPath,
}

impl Default for WayfinderConfig {
    fn default() -> Self {
        Self { dataset_path: None, output_format: "text".to_string(), search_result_limit: None }
    }
}

impl WayfinderConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file, merging with defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            dataset_path: config_file.dataset_path.or(defaults.dataset_path),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            search_result_limit: config_file.search_result_limit.or(defaults.search_result_limit),
        }
    }

    fn apply_cli_overrides(config: &mut Self, args: &CliArgs) {
        if let Some(value) = &args.dataset {
            config.dataset_path = Some(value.clone());
        }
        if let Some(value) = &args.output_format {
            config.output_format = value.clone();
        }
        if let Some(value) = args.limit {
            config.search_result_limit = Some(value);
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.output_format.parse::<OutputFormat>().is_err() {
            return Err(ConfigValidationError::InvalidOutputFormat(self.output_format.clone()));
        }

        if self.search_result_limit == Some(0) {
            return Err(ConfigValidationError::InvalidSearchLimit);
        }

        if matches!(&self.dataset_path, Some(path) if path.trim().is_empty()) {
            return Err(ConfigValidationError::EmptyDatasetPath);
        }

        Ok(())
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, String> {
        self.output_format.parse()
    }
}
