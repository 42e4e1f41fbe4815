use super::{InstructorId, RoomId, SessionId, SlotId};
use serde::{Deserialize, Serialize};

/// An immutable value record binding one session to a concrete time
/// sequence, room, and instructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub session_id: SessionId,
    pub time_sequence: Vec<SlotId>,
    pub room: RoomId,
    pub instructor: InstructorId,
}

impl Assignment {
    pub fn first_slot(&self) -> Option<SlotId> {
        self.time_sequence.first().copied()
    }

    pub fn last_slot(&self) -> Option<SlotId> {
        self.time_sequence.last().copied()
    }
}
