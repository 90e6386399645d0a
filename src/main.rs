// Campus Wayfinder - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/campus-wayfinder buildings
// ```
//
// Or with a query and custom output:
//
// ```console
// $ ./target/release/campus-wayfinder --output-format json directions SJT "Ground Floor" G01
// ```

use anyhow::{Context, Result};
use campus_wayfinder::facility::{Building, Campus, Room};
use campus_wayfinder::logging::{LoggingConfig, LoggingGuard};
use campus_wayfinder::navigation::QueryError;
use campus_wayfinder::types::{CliArgs, Command, FacilityCategory, OutputFormat, WayfinderConfig};
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;
use std::process;
use tracing::{debug, error, info};

/// JSON envelope for query results
#[derive(Debug, Serialize)]
struct QueryReport<T: Serialize> {
    generated_at: DateTime<Utc>,
    query: String,
    result_count: usize,
    results: T,
}

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match WayfinderConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let _logging_guard = match init_logging(&args) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    info!("Starting Campus Wayfinder");

    // Load configuration from CLI arguments and optional config file
    let config = match WayfinderConfig::from_cli_args(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let campus = match load_campus(&config) {
        Ok(campus) => campus,
        Err(e) => {
            error!("Failed to load dataset: {:#}", e);
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };

    if args.dry_run {
        eprintln!("Configuration and dataset validation successful!");
        eprintln!("Dry run mode - no query will be executed.");
        print_configuration_summary(&config, &campus);
        return;
    }

    let command = args.command.clone().unwrap_or_default();
    if let Err(e) = run_command(&campus, &config, &command) {
        error!("Query failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }

    info!("Campus Wayfinder completed successfully");
}

fn init_logging(args: &CliArgs) -> Result<LoggingGuard, Box<dyn std::error::Error + Send + Sync>> {
    let logging = LoggingConfig::from_flags(args.verbose, args.debug);

    match &args.log_dir {
        Some(dir) => logging.with_file_logging(dir.clone()).init(),
        None => logging.init(),
    }
}

fn load_campus(config: &WayfinderConfig) -> Result<Campus> {
    match &config.dataset_path {
        Some(path) => Campus::from_json_file(path)
            .with_context(|| format!("could not load dataset from {}", path)),
        None => Campus::bundled().context("bundled dataset is invalid"),
    }
}

fn print_configuration_summary(config: &WayfinderConfig, campus: &Campus) {
    eprintln!("Configuration Summary:");
    eprintln!(
        "  Dataset: {}",
        config.dataset_path.as_deref().unwrap_or("bundled campus dataset")
    );
    eprintln!("  Output format: {}", config.output_format);
    match config.search_result_limit {
        Some(limit) => eprintln!("  Search result limit: {}", limit),
        None => eprintln!("  Search result limit: unlimited"),
    }
    eprintln!("  Buildings: {}", campus.building_count());
    eprintln!("  Rooms: {}", campus.total_room_count());
}

fn run_command(campus: &Campus, config: &WayfinderConfig, command: &Command) -> Result<()> {
    let format = config.get_output_format().map_err(anyhow::Error::msg)?;
    debug!(?command, ?format, "Running query");

    match command {
        Command::Buildings => {
            let buildings = campus.buildings();
            emit(format, "buildings", buildings.len(), &buildings, || {
                for building in buildings {
                    println!(
                        "{:<6} {} ({} floors, {} rooms)",
                        building.id,
                        building.name,
                        building.floors,
                        building.room_count()
                    );
                }
            })
        }
        Command::Floors { building } => {
            let building = campus.require_building(building)?;
            let floors = building.floor_labels();
            emit(format, &format!("floors {}", building.id), floors.len(), &floors, || {
                println!("{}", building.name);
                for floor in &floors {
                    println!("  {}", floor);
                }
            })
        }
        Command::Facilities { building, highlight } => {
            let building = campus.require_building(building)?;
            let highlighted = match highlight {
                Some(room_no) => Some(
                    building
                        .get_room(room_no)
                        .ok_or_else(|| QueryError::room_not_found(building.id.as_str(), room_no))?,
                ),
                None => None,
            };
            let groups = building.facilities_by_category();
            let count = groups.iter().map(|(_, rooms)| rooms.len()).sum();
            emit(format, &format!("facilities {}", building.id), count, &groups, || {
                print_facilities(building, &groups, highlighted);
            })
        }
        Command::Rooms { building, floor } => {
            let building = campus.require_building(building)?;
            let rooms = building.rooms_on_floor(*floor);
            let query = format!("rooms {} {}", building.id, floor);
            emit(format, &query, rooms.len(), &rooms, || {
                if rooms.is_empty() {
                    println!("No rooms found on {} of {}.", floor, building.name);
                }
                for room in &rooms {
                    print_room(room);
                }
            })
        }
        Command::Nearby { building, floor, room } => {
            let building = campus.require_building(building)?;
            let nearby = building.nearby_facilities(*floor, room);
            let query = format!("nearby {} {} {}", building.id, floor, room);
            emit(format, &query, nearby.len(), &nearby, || {
                if nearby.is_empty() {
                    println!("No landmark facilities near room {}.", room);
                }
                for room in &nearby {
                    print_room(room);
                }
            })
        }
        Command::Directions { building, floor, room } => {
            let directions = campus.directions(building, *floor, room)?;
            let query = format!("directions {} {} {}", building, floor, room);
            emit(format, &query, directions.steps.len(), &directions, || {
                println!("{}", directions);
            })
        }
        Command::Search { query } => {
            let mut matches = campus.search(query);
            let total = matches.len();
            if let Some(limit) = config.search_result_limit {
                matches.truncate(limit);
            }
            info!(query = %query, total, shown = matches.len(), "Search results");
            emit(format, &format!("search {}", query), matches.len(), &matches, || {
                if matches.is_empty() {
                    println!("No rooms match \"{}\".", query);
                }
                for m in &matches {
                    println!(
                        "{:<6} {:<6} {:<35} {:<13} {}",
                        m.building_id, m.room_no, m.room_name, m.floor, m.department
                    );
                }
                if matches.len() < total {
                    println!("({} of {} results shown)", matches.len(), total);
                }
            })
        }
        Command::Summary => {
            let summary = campus.summary();
            emit(format, "summary", 1, &summary, || {
                println!("Buildings: {}", summary.total_buildings);
                println!("Rooms: {}", summary.total_rooms);
                println!("Rooms without a floor: {}", summary.unclassified_rooms);
                for (category, count) in &summary.rooms_per_category {
                    println!("  {:<17} {}", category, count);
                }
            })
        }
    }
}

/// Print results as text, or wrap them in a [`QueryReport`] for JSON output
fn emit<T: Serialize>(
    format: OutputFormat,
    query: &str,
    result_count: usize,
    results: &T,
    print_text: impl FnOnce(),
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print_text();
            Ok(())
        }
        OutputFormat::Json => {
            let report = QueryReport {
                generated_at: Utc::now(),
                query: query.to_string(),
                result_count,
                results,
            };
            let json =
                serde_json::to_string_pretty(&report).context("failed to serialize query report")?;
            println!("{}", json);
            Ok(())
        }
    }
}

fn print_room(room: &Room) {
    println!("  {:<6} {:<35} {}", room.room_no, room.room_name, room.department);
}

fn print_facilities(
    building: &Building,
    groups: &[(FacilityCategory, Vec<&Room>)],
    highlighted: Option<&Room>,
) {
    println!("{} ({})", building.name, building.id);

    if let Some(room) = highlighted {
        let floor = room.floor().map_or_else(|| "unknown floor".to_string(), |f| f.to_string());
        println!(
            "Selected: {} {} - {}, {} sq ft, {}",
            room.room_no, room.room_name, floor, room.area, room.department
        );
    }

    for (category, rooms) in groups {
        println!("{}:", category);
        for room in rooms {
            let marker = if highlighted.is_some_and(|h| h.room_no == room.room_no) { "*" } else { " " };
            println!("{} {:<6} {:<35} {}", marker, room.room_no, room.room_name, room.department);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_wayfinder::types::FloorLabel;

    #[test]
    fn test_query_report_shape() {
        let report = QueryReport {
            generated_at: Utc::now(),
            query: "floors SJT".to_string(),
            result_count: 2,
            results: vec![FloorLabel::Ground, FloorLabel::Upper(1)],
        };
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["query"], "floors SJT");
        assert_eq!(json["result_count"], 2);
        assert_eq!(json["results"][1], "Floor 1");
        assert!(json["generated_at"].is_string());
    }

    #[test]
    fn test_every_command_runs_against_bundled_dataset() {
        let campus = Campus::bundled().unwrap();
        let config = WayfinderConfig::default();
        let commands = [
            Command::Buildings,
            Command::Floors { building: "SJT".to_string() },
            Command::Facilities { building: "SJT".to_string(), highlight: Some("G01".to_string()) },
            Command::Rooms { building: "SJT".to_string(), floor: FloorLabel::Upper(1) },
            Command::Nearby {
                building: "SJT".to_string(),
                floor: FloorLabel::Ground,
                room: "G01".to_string(),
            },
            Command::Directions {
                building: "SJT".to_string(),
                floor: FloorLabel::Ground,
                room: "G01".to_string(),
            },
            Command::Search { query: "lab".to_string() },
            Command::Summary,
        ];

        for command in &commands {
            assert!(run_command(&campus, &config, command).is_ok(), "{:?} failed", command);
        }
    }

    #[test]
    fn test_missing_building_is_an_error() {
        let campus = Campus::bundled().unwrap();
        let config = WayfinderConfig { output_format: "json".to_string(), ..Default::default() };
        let result = run_command(&campus, &config, &Command::Floors { building: "UNKNOWN".into() });

        let err = result.unwrap_err();
        assert_eq!(
            err.downcast_ref::<QueryError>(),
            Some(&QueryError::building_not_found("UNKNOWN"))
        );
    }

    #[test]
    fn test_unknown_highlight_is_an_error() {
        let campus = Campus::bundled().unwrap();
        let command =
            Command::Facilities { building: "SJT".to_string(), highlight: Some("X99".to_string()) };
        assert!(run_command(&campus, &WayfinderConfig::default(), &command).is_err());
    }
}
