//! Step-by-step directions to a room
//!
//! Directions are a fixed sequence of templated steps: enter the building,
//! change floors if needed, find the room, optionally note nearby landmarks,
//! and name the owning department.

use crate::facility::{Campus, Room};
use crate::navigation::error::{QueryError, QueryResult};
use crate::navigation::nearby::nearby_facilities;
use crate::types::{BuildingId, FloorLabel, RoomNumber};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// A room used as a reference point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Landmark {
    /// Room number of the landmark
    pub room_no: RoomNumber,
    /// Name of the landmark
    pub room_name: String,
}

impl From<&Room> for Landmark {
    fn from(room: &Room) -> Self {
        Self { room_no: room.room_no.clone(), room_name: room.room_name.clone() }
    }
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.room_name, self.room_no)
    }
}

/// One step of a set of directions
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum DirectionStep {
    /// Enter the building through its main entrance
    EnterBuilding {
        /// Display name of the building
        building_name: String,
    },
    /// The room is on the ground floor
    AlreadyOnGroundFloor,
    /// Go up to the room's floor
    ChangeFloor {
        /// Floor to reach
        floor: FloorLabel,
    },
    /// Find the room itself
    LookForRoom {
        /// Room number
        room_no: RoomNumber,
        /// Room name
        room_name: String,
    },
    /// Landmarks next to the room
    NearLandmarks {
        /// One or two nearby landmark rooms
        landmarks: Vec<Landmark>,
    },
    /// The room's owning department
    OwnedBy {
        /// Department name
        department: String,
    },
}

impl fmt::Display for DirectionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectionStep::EnterBuilding { building_name } => {
                write!(f, "Enter the {} building from the main entrance.", building_name)
            }
            DirectionStep::AlreadyOnGroundFloor => write!(f, "You are already on the Ground Floor."),
            DirectionStep::ChangeFloor { floor } => {
                write!(f, "Take the stairs or elevator to reach {}.", floor)
            }
            DirectionStep::LookForRoom { room_no, room_name } => {
                write!(f, "Look for Room {} ({}).", room_no, room_name)
            }
            DirectionStep::NearLandmarks { landmarks } => {
                let joined =
                    landmarks.iter().map(Landmark::to_string).collect::<Vec<_>>().join(" and ");
                write!(f, "The room is located near {}.", joined)
            }
            DirectionStep::OwnedBy { department } => {
                write!(f, "The room belongs to the {} department.", department)
            }
        }
    }
}

/// Directions to a single room
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Directions {
    /// Building containing the room
    pub building_id: BuildingId,
    /// Floor the directions lead to
    pub floor: FloorLabel,
    /// Destination room
    pub room_no: RoomNumber,
    /// Steps in walking order
    pub steps: Vec<DirectionStep>,
}

impl Directions {
    /// Steps rendered as sentences
    pub fn lines(&self) -> Vec<String> {
        self.steps.iter().map(DirectionStep::to_string).collect()
    }

    /// Landmarks mentioned in the directions, if any
    pub fn landmarks(&self) -> &[Landmark] {
        self.steps
            .iter()
            .find_map(|step| match step {
                DirectionStep::NearLandmarks { landmarks } => Some(landmarks.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }
}

impl fmt::Display for Directions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}. {}", i + 1, step)?;
        }
        Ok(())
    }
}

/// Generate directions to `room_no` on `floor` of a building
///
/// Returns [`QueryError::BuildingNotFound`] or [`QueryError::RoomNotFound`]
/// when the destination does not exist. The landmark step is only present
/// when at least one nearby facility is found.
pub fn directions(
    campus: &Campus,
    building_id: &str,
    floor: FloorLabel,
    room_no: &str,
) -> QueryResult<Directions> {
    let floor = floor.normalized();
    let building = campus.require_building(building_id)?;
    let room =
        building.get_room(room_no).ok_or_else(|| QueryError::room_not_found(building_id, room_no))?;

    let mut steps = vec![DirectionStep::EnterBuilding { building_name: building.name.clone() }];

    if floor.is_ground() {
        steps.push(DirectionStep::AlreadyOnGroundFloor);
    } else {
        steps.push(DirectionStep::ChangeFloor { floor });
    }

    steps.push(DirectionStep::LookForRoom {
        room_no: room.room_no.clone(),
        room_name: room.room_name.clone(),
    });

    let landmarks: Vec<Landmark> =
        nearby_facilities(building, floor, room_no).into_iter().map(Landmark::from).collect();
    if !landmarks.is_empty() {
        steps.push(DirectionStep::NearLandmarks { landmarks });
    }

    steps.push(DirectionStep::OwnedBy { department: room.department.clone() });

    debug!(building = building_id, %floor, room = room_no, steps = steps.len(), "Generated directions");
    Ok(Directions { building_id: building.id.clone(), floor, room_no: room.room_no.clone(), steps })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::Building;

    fn campus() -> Campus {
        Campus::new(vec![Building::new("SJT", "SJT", 3)
            .with_room(Room::new("G01", "Physics Lab", 500.0, "Physics"))
            .with_room(Room::new("G02", "Toilet", 50.0, "Facilities"))
            .with_room(Room::new("201", "Staff Room", 200.0, "Maths"))
            .with_room(Room::new("202", "Classroom", 400.0, "Maths"))
            .with_room(Room::new("203", "Washroom", 50.0, "Facilities"))])
        .unwrap()
    }

    #[test]
    fn test_ground_floor_directions() {
        let directions = directions(&campus(), "SJT", FloorLabel::Ground, "G01").unwrap();

        assert_eq!(
            directions.lines(),
            vec![
                "Enter the SJT building from the main entrance.",
                "You are already on the Ground Floor.",
                "Look for Room G01 (Physics Lab).",
                "The room is located near Toilet (G02).",
                "The room belongs to the Physics department.",
            ]
        );
    }

    #[test]
    fn test_upper_floor_directions_join_two_landmarks() {
        let directions = directions(&campus(), "SJT", FloorLabel::Upper(2), "201").unwrap();

        assert_eq!(directions.steps[1], DirectionStep::ChangeFloor { floor: FloorLabel::Upper(2) });
        assert_eq!(directions.lines()[1], "Take the stairs or elevator to reach Floor 2.");
        assert_eq!(
            directions.lines()[3],
            "The room is located near Classroom (202) and Washroom (203)."
        );
        assert_eq!(directions.landmarks().len(), 2);
    }

    #[test]
    fn test_landmark_step_omitted_when_nothing_nearby() {
        let campus = Campus::new(vec![Building::new("MB", "Main Building", 1)
            .with_room(Room::new("G01", "Dean's Office", 300.0, "Administration"))])
        .unwrap();

        let directions = directions(&campus, "MB", FloorLabel::Ground, "G01").unwrap();
        assert_eq!(directions.steps.len(), 4);
        assert!(directions.landmarks().is_empty());
        assert_eq!(directions.lines()[3], "The room belongs to the Administration department.");
    }

    #[test]
    fn test_unknown_building() {
        let result = directions(&campus(), "UNKNOWN", FloorLabel::Ground, "G01");
        assert_eq!(result, Err(QueryError::building_not_found("UNKNOWN")));
    }

    #[test]
    fn test_unknown_room() {
        let result = directions(&campus(), "SJT", FloorLabel::Ground, "G99");
        assert_eq!(result, Err(QueryError::room_not_found("SJT", "G99")));
    }

    #[test]
    fn test_upper_zero_is_treated_as_ground_floor() {
        let campus = campus();
        let from_zero = directions(&campus, "SJT", FloorLabel::Upper(0), "G01").unwrap();
        let from_ground = directions(&campus, "SJT", FloorLabel::Ground, "G01").unwrap();

        assert_eq!(from_zero, from_ground);
        assert_eq!(from_zero.steps[1], DirectionStep::AlreadyOnGroundFloor);
        assert_eq!(from_zero.landmarks().len(), 1);
    }

    #[test]
    fn test_display_numbers_steps() {
        let directions = directions(&campus(), "SJT", FloorLabel::Ground, "G02").unwrap();
        let text = directions.to_string();

        assert!(text.starts_with("1. Enter the SJT building"));
        assert!(text.contains("\n4. The room is located near Physics Lab (G01)."));
        assert!(text.ends_with("5. The room belongs to the Facilities department."));
    }

    #[test]
    fn test_serialized_steps_are_tagged() {
        let directions = directions(&campus(), "SJT", FloorLabel::Ground, "G01").unwrap();
        let json = serde_json::to_value(&directions).unwrap();

        assert_eq!(json["floor"], "Ground Floor");
        assert_eq!(json["steps"][0]["step"], "enter_building");
        assert_eq!(json["steps"][1]["step"], "already_on_ground_floor");
        assert_eq!(json["steps"][3]["landmarks"][0]["room_no"], "G02");
    }
}
