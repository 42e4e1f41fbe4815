use serde::{Deserialize, Serialize};
use std::fmt;

/// Newtype for section identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SectionId(pub String);

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cohort of students sharing a department/level/specialization. Unlike
/// the per-student enrollment model this crate's teacher used, a section
/// here is a static group record — individual students are out of scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "SectionID")]
    pub id: SectionId,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Level")]
    pub level: String,
    #[serde(rename = "Specialization")]
    pub specialization: String,
    #[serde(rename = "StudentCount")]
    pub student_count: u32,
}
