use super::{CourseId, Domain, InstructorId, SectionId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Newtype for synthetic session identifiers, assigned by a builder-local
/// counter (never a process-wide singleton — see design notes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionKind {
    Lecture,
    Lab,
}

/// One atomic scheduling unit: either a lecture for a (possibly merged)
/// group of sections, or a lab for a single section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub course_id: CourseId,
    pub kind: SessionKind,
    pub duration_slots: u32,
    pub sections: Vec<SectionId>,
    pub total_students: u32,
    pub is_small_group: bool,
    pub preferred_instructors: HashSet<InstructorId>,
    pub domain: Domain,
}

impl Session {
    /// Lab sessions always cover exactly one section (§3 invariant).
    pub fn is_lab(&self) -> bool {
        matches!(self.kind, SessionKind::Lab)
    }
}
