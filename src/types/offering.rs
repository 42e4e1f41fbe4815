use super::{CourseId, InstructorId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A course required (or offered) for a department/level/specialization.
/// `specialization = "Core"` matches every section of that department and
/// level regardless of the section's own specialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseOffering {
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Level")]
    pub level: String,
    #[serde(rename = "Specialization")]
    pub specialization: String,
    #[serde(rename = "CourseID")]
    pub course_id: CourseId,
    #[serde(rename = "preferred_Prof", default)]
    pub preferred_professor: Option<InstructorId>,
    #[serde(rename = "preferred_Assi", default)]
    pub preferred_assistants: HashSet<InstructorId>,
}

impl CourseOffering {
    pub fn matches_section_specialization(&self, section_specialization: &str) -> bool {
        self.specialization == "Core" || self.specialization == section_specialization
    }
}
