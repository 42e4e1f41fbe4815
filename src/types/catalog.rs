use super::{Course, CourseId, CourseOffering, Instructor, InstructorId, Room, RoomId, Section, SectionId, TimeSlot};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Read-only reference data: courses, rooms, instructors, time slots,
/// sections, and course offerings. Constructed once by the ingestion
/// layer (§6); the solver core never performs I/O against it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub courses: Vec<Course>,
    pub rooms: Vec<Room>,
    pub instructors: Vec<Instructor>,
    pub time_slots: Vec<TimeSlot>,
    pub sections: Vec<Section>,
    pub offerings: Vec<CourseOffering>,
}

impl Catalog {
    pub fn course(&self, id: &CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| &c.id == id)
    }

    pub fn instructor(&self, id: &InstructorId) -> Option<&Instructor> {
        self.instructors.iter().find(|i| &i.id == id)
    }

    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| &r.id == id)
    }

    pub fn section(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| &s.id == id)
    }

    /// Slot ids grouped by day, each sorted ascending — used by both the
    /// domain builder's contiguous-window search and the cost evaluator's
    /// gap penalty.
    pub fn slots_by_day(&self) -> HashMap<&str, Vec<&TimeSlot>> {
        let mut by_day: HashMap<&str, Vec<&TimeSlot>> = HashMap::new();
        for slot in &self.time_slots {
            by_day.entry(slot.day.as_str()).or_default().push(slot);
        }
        for slots in by_day.values_mut() {
            slots.sort_by_key(|s| s.id);
        }
        by_day
    }
}
