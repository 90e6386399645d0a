//! Identifier types for the campus directory
//!
//! This module contains the string-backed identifier types for buildings and
//! rooms. Both are authored by hand in the dataset (e.g. `"SJT"`, `"G01"`), so
//! they wrap the raw string rather than generating fresh values.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Unique identifier for a building (e.g. `"SJT"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildingId(String);

impl BuildingId {
    /// Create a building ID from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BuildingId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for BuildingId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for BuildingId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for BuildingId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BuildingId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Room number as printed on the door (e.g. `"G01"`, `"101"`, `"3A05"`)
///
/// The number also encodes the room's floor and its position along the
/// corridor; see [`RoomNumber::ordinal`] and [`crate::navigation::resolve_floor`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomNumber(String);

impl RoomNumber {
    /// Create a room number from any string-like value
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Borrow the raw room number
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Comparable position of the room along its floor
    ///
    /// All non-digit characters are stripped and the remaining digits are
    /// parsed as an integer, so `"G01"` is 1 and `"1A04"` is 104. Returns
    /// `None` when the number has no digits (or too many to fit a `u64`).
    pub fn ordinal(&self) -> Option<u64> {
        ordinal_of(&self.0)
    }
}

/// Digits of a room number parsed as an integer
pub(crate) fn ordinal_of(room_no: &str) -> Option<u64> {
    let digits: String = room_no.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomNumber {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RoomNumber {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for RoomNumber {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RoomNumber {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
