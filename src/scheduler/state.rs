//! C4: three occupancy maps supporting consistency queries and reversible
//! mutation.

use crate::types::{Assignment, InstructorId, RoomId, SectionId, SessionId, SlotId};
use std::collections::{HashMap, HashSet};

/// Owned by whichever solver is active; mutated only through `add`/`remove`.
#[derive(Debug, Clone, Default)]
pub struct State {
    by_instructor: HashMap<InstructorId, HashSet<SlotId>>,
    by_room: HashMap<RoomId, HashSet<SlotId>>,
    by_section: HashMap<SectionId, HashSet<SlotId>>,
}

impl State {
    pub fn new() -> Self {
        State::default()
    }

    /// True iff every slot in `time_sequence` is absent from the
    /// instructor's set, the room's set, and every listed section's set.
    pub fn is_consistent(
        &self,
        time_sequence: &[SlotId],
        room: &RoomId,
        instructor: &InstructorId,
        sections: &[SectionId],
    ) -> bool {
        let instructor_slots = self.by_instructor.get(instructor);
        let room_slots = self.by_room.get(room);

        for slot in time_sequence {
            if instructor_slots.is_some_and(|s| s.contains(slot)) {
                return false;
            }
            if room_slots.is_some_and(|s| s.contains(slot)) {
                return false;
            }
            for section in sections {
                if self
                    .by_section
                    .get(section)
                    .is_some_and(|s| s.contains(slot))
                {
                    return false;
                }
            }
        }
        true
    }

    pub fn add(&mut self, assignment: &Assignment, sections: &[SectionId]) {
        let instructor_set = self.by_instructor.entry(assignment.instructor.clone()).or_default();
        let room_set = self.by_room.entry(assignment.room.clone()).or_default();
        for slot in &assignment.time_sequence {
            instructor_set.insert(*slot);
            room_set.insert(*slot);
        }
        for section in sections {
            let section_set = self.by_section.entry(section.clone()).or_default();
            for slot in &assignment.time_sequence {
                section_set.insert(*slot);
            }
        }
    }

    /// The exact inverse of the corresponding `add`.
    pub fn remove(&mut self, assignment: &Assignment, sections: &[SectionId]) {
        if let Some(set) = self.by_instructor.get_mut(&assignment.instructor) {
            for slot in &assignment.time_sequence {
                set.remove(slot);
            }
        }
        if let Some(set) = self.by_room.get_mut(&assignment.room) {
            for slot in &assignment.time_sequence {
                set.remove(slot);
            }
        }
        for section in sections {
            if let Some(set) = self.by_section.get_mut(section) {
                for slot in &assignment.time_sequence {
                    set.remove(slot);
                }
            }
        }
    }

    pub fn section_occupied_slots(&self, section: &SectionId) -> Option<&HashSet<SlotId>> {
        self.by_section.get(section)
    }

    pub fn instructor_occupied_slots(&self, instructor: &InstructorId) -> Option<&HashSet<SlotId>> {
        self.by_instructor.get(instructor)
    }
}

/// Convenience wrapper pairing a session id with the section ids it
/// touches, since `State` doesn't hold session metadata itself.
pub fn sections_for(assignment: &Assignment, session_sections: &HashMap<SessionId, Vec<SectionId>>) -> Vec<SectionId> {
    session_sections
        .get(&assignment.session_id)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment() -> Assignment {
        Assignment {
            session_id: SessionId(1),
            time_sequence: vec![SlotId(0), SlotId(1)],
            room: RoomId("R1".into()),
            instructor: InstructorId("I1".into()),
        }
    }

    #[test]
    fn add_then_remove_is_identity() {
        let a = assignment();
        let sections = vec![SectionId("S1".into())];
        let mut state = State::new();
        let before = state.clone();
        state.add(&a, &sections);
        state.remove(&a, &sections);
        assert_eq!(format!("{:?}", state), format!("{:?}", before));
    }

    #[test]
    fn add_makes_state_inconsistent_for_overlapping_slot() {
        let a = assignment();
        let sections = vec![SectionId("S1".into())];
        let mut state = State::new();
        assert!(state.is_consistent(&a.time_sequence, &a.room, &a.instructor, &sections));
        state.add(&a, &sections);
        assert!(!state.is_consistent(&a.time_sequence, &a.room, &a.instructor, &sections));
    }

    #[test]
    fn remove_then_add_on_previously_present_is_identity() {
        let a = assignment();
        let sections = vec![SectionId("S1".into())];
        let mut state = State::new();
        state.add(&a, &sections);
        let with_a = state.clone();
        state.remove(&a, &sections);
        state.add(&a, &sections);
        assert_eq!(format!("{:?}", state), format!("{:?}", with_a));
    }

    proptest::proptest! {
        /// P4: for any slot sequence, add followed by remove restores the
        /// empty state, regardless of how many slots the assignment covers.
        #[test]
        fn add_remove_is_identity_for_any_slot_run(slots in proptest::collection::vec(0u32..50, 1..8)) {
            let a = Assignment {
                session_id: SessionId(1),
                time_sequence: slots.into_iter().map(SlotId).collect(),
                room: RoomId("R1".into()),
                instructor: InstructorId("I1".into()),
            };
            let sections = vec![SectionId("S1".into())];
            let mut state = State::new();
            let before = state.clone();
            state.add(&a, &sections);
            state.remove(&a, &sections);
            proptest::prop_assert_eq!(format!("{:?}", state), format!("{:?}", before));
        }
    }
}
