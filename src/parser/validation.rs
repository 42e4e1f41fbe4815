use crate::error::{Result, SolverError};
use crate::types::Catalog;
use std::collections::HashSet;

/// Collected pre-solve validation errors/warnings (§7 CatalogValidation).
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }
}

/// Validates a freshly-ingested catalog before it reaches the solver:
/// duplicate ids, non-positive capacities/durations, and dangling
/// references. Returns `CatalogValidation` if any error is found.
pub fn validate_catalog(catalog: &Catalog) -> Result<ValidationResult> {
    let mut result = ValidationResult::default();

    check_duplicate(&catalog.courses.iter().map(|c| &c.id).collect::<Vec<_>>(), "course", &mut result);
    check_duplicate(&catalog.rooms.iter().map(|r| &r.id).collect::<Vec<_>>(), "room", &mut result);
    check_duplicate(&catalog.instructors.iter().map(|i| &i.id).collect::<Vec<_>>(), "instructor", &mut result);
    check_duplicate(&catalog.sections.iter().map(|s| &s.id).collect::<Vec<_>>(), "section", &mut result);
    check_duplicate(&catalog.time_slots.iter().map(|t| &t.id).collect::<Vec<_>>(), "time slot", &mut result);

    for room in &catalog.rooms {
        if room.capacity == 0 {
            result.add_error(format!("room '{}' has non-positive capacity", room.id));
        }
    }

    for course in &catalog.courses {
        if course.lecture_duration_slots == 0 && course.lab_duration_slots == 0 {
            result.add_warning(format!(
                "course '{}' offers neither a lecture nor a lab",
                course.id
            ));
        }
        if course.lab_duration_slots > 0 && course.lab_space_type.is_none() {
            result.add_error(format!(
                "course '{}' has a lab duration but no lab space type",
                course.id
            ));
        }
    }

    for section in &catalog.sections {
        if section.student_count == 0 {
            result.add_error(format!("section '{}' has non-positive student count", section.id));
        }
    }

    let course_ids: HashSet<_> = catalog.courses.iter().map(|c| &c.id).collect();
    for offering in &catalog.offerings {
        if !course_ids.contains(&offering.course_id) {
            result.add_warning(format!(
                "offering for {}/{} references unknown course '{}', skipping",
                offering.department, offering.level, offering.course_id
            ));
        }
    }

    if !result.is_valid() {
        return Err(SolverError::CatalogValidation {
            message: result.errors.join("; "),
        });
    }

    Ok(result)
}

fn check_duplicate<T: std::hash::Hash + Eq + std::fmt::Display>(
    ids: &[&T],
    kind: &str,
    result: &mut ValidationResult,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(*id) {
            result.add_error(format!("duplicate {kind} id: '{id}'"));
        }
    }
}
