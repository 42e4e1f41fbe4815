use super::{InstructorId, RoomId, SlotId};
use serde::{Deserialize, Serialize};

/// Precomputed admissible candidates for one session: time sequences,
/// rooms, and instructors. Non-empty in all three coordinates for a
/// feasible session; empty in any one makes the session unsatisfiable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Domain {
    /// Each entry is a `duration_slots`-long run of consecutive slot ids
    /// within a single day.
    pub time_sequences: Vec<Vec<SlotId>>,
    pub rooms: Vec<RoomId>,
    pub instructors: Vec<InstructorId>,
}

impl Domain {
    pub fn is_empty(&self) -> bool {
        self.time_sequences.is_empty() || self.rooms.is_empty() || self.instructors.is_empty()
    }

    pub fn size(&self) -> usize {
        self.time_sequences.len() * self.rooms.len() * self.instructors.len()
    }

    pub fn contains(&self, time_sequence: &[SlotId], room: &RoomId, instructor: &InstructorId) -> bool {
        self.time_sequences.iter().any(|t| t == time_sequence)
            && self.rooms.contains(room)
            && self.instructors.contains(instructor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_in_any_coordinate_is_empty() {
        let mut d = Domain {
            time_sequences: vec![vec![SlotId(0)]],
            rooms: vec![RoomId("A1".into())],
            instructors: vec![],
        };
        assert!(d.is_empty());
        d.instructors.push(InstructorId("I1".into()));
        assert!(!d.is_empty());
    }

    #[test]
    fn size_is_product_of_coordinates() {
        let d = Domain {
            time_sequences: vec![vec![SlotId(0)], vec![SlotId(1)]],
            rooms: vec![RoomId("A1".into())],
            instructors: vec![InstructorId("I1".into()), InstructorId("I2".into())],
        };
        assert_eq!(d.size(), 4);
    }
}
