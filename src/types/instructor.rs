use super::{CourseId, SlotId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Newtype for instructor identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstructorId(pub String);

impl fmt::Display for InstructorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructor {
    #[serde(rename = "InstructorID")]
    pub id: InstructorId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "QualifiedCourses")]
    pub qualified_course_ids: HashSet<CourseId>,
    #[serde(rename = "Not_PreferredSlots", default)]
    pub not_preferred_slots: HashSet<SlotId>,
}

impl Instructor {
    pub fn is_qualified_for(&self, course_id: &CourseId) -> bool {
        self.qualified_course_ids.contains(course_id)
    }

    pub fn prefers(&self, slot: SlotId) -> bool {
        !self.not_preferred_slots.contains(&slot)
    }
}
