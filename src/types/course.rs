use serde::{Deserialize, Serialize};
use std::fmt;

/// Newtype for course identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourseId(pub String);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A course that may be offered as a lecture, a lab, or both.
///
/// `lecture_duration_slots` and `lab_duration_slots` are counts of
/// consecutive time slots; zero means that modality is not offered for
/// this course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "CourseID")]
    pub id: CourseId,
    #[serde(rename = "CourseName")]
    pub name: String,
    #[serde(rename = "Lecture")]
    pub lecture_duration_slots: u32,
    #[serde(rename = "Lab")]
    pub lab_duration_slots: u32,
    #[serde(rename = "Lab_Type")]
    pub lab_space_type: Option<String>,
}

impl Course {
    pub fn has_lecture(&self) -> bool {
        self.lecture_duration_slots > 0
    }

    pub fn has_lab(&self) -> bool {
        self.lab_duration_slots > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course() -> Course {
        Course {
            id: CourseId("CS101".into()),
            name: "Intro to CS".into(),
            lecture_duration_slots: 2,
            lab_duration_slots: 0,
            lab_space_type: None,
        }
    }

    #[test]
    fn zero_duration_means_not_offered() {
        let c = course();
        assert!(c.has_lecture());
        assert!(!c.has_lab());
    }
}
