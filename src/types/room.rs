use serde::{Deserialize, Serialize};
use std::fmt;

/// Newtype for room identifiers. The leading whitespace-delimited token of
/// the id names the building, used by the building-change soft constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub String);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomKind {
    Lecture,
    Lab,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "RoomID")]
    pub id: RoomId,
    #[serde(rename = "Capacity")]
    pub capacity: u32,
    #[serde(rename = "Type")]
    pub kind: RoomKind,
    #[serde(rename = "Type_of_Space")]
    pub space_type: String,
}

impl Room {
    /// First whitespace-delimited token of the room id; the entire id if
    /// there is no delimiter (open question O3 in the design notes).
    pub fn building(&self) -> &str {
        self.id.0.split_whitespace().next().unwrap_or(&self.id.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn building_is_first_token() {
        let room = Room {
            id: RoomId("Building-A 204".into()),
            capacity: 40,
            kind: RoomKind::Lecture,
            space_type: "Standard".into(),
        };
        assert_eq!(room.building(), "Building-A");
    }

    #[test]
    fn building_falls_back_to_whole_id_without_delimiter() {
        let room = Room {
            id: RoomId("A204".into()),
            capacity: 40,
            kind: RoomKind::Lecture,
            space_type: "Standard".into(),
        };
        assert_eq!(room.building(), "A204");
    }
}
