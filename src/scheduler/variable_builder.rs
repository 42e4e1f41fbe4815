//! C2: expands course offerings into atomic sessions.

use crate::types::{Catalog, CourseOffering, Domain, InstructorId, Section, Session, SessionId, SessionKind};
use std::collections::HashSet;

/// Warnings collected while building sessions, surfaced to the caller
/// instead of raised as errors (§7 propagation policy).
#[derive(Debug, Default, Clone)]
pub struct BuildWarnings {
    pub messages: Vec<String>,
}

impl BuildWarnings {
    fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }
}

/// Builder-local session id counter, reset on each `build()` call — never
/// a process-wide singleton (design notes §9).
pub struct VariableBuilder {
    next_id: u64,
}

impl VariableBuilder {
    pub fn new() -> Self {
        VariableBuilder { next_id: 0 }
    }

    fn next_session_id(&mut self) -> SessionId {
        let id = SessionId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Expands every course offering into lecture and/or lab sessions.
    /// Domains are left empty here; the domain builder (C3) fills them in.
    pub fn build(&mut self, catalog: &Catalog, max_group_capacity: u32) -> (Vec<Session>, BuildWarnings) {
        let mut sessions = Vec::new();
        let mut warnings = BuildWarnings::default();

        for offering in &catalog.offerings {
            let Some(course) = catalog.course(&offering.course_id) else {
                warnings.push(format!(
                    "offering for {}/{} references unknown course {}",
                    offering.department, offering.level, offering.course_id
                ));
                continue;
            };

            let mut matching: Vec<&Section> = catalog
                .sections
                .iter()
                .filter(|s| {
                    s.department == offering.department
                        && s.level == offering.level
                        && offering.matches_section_specialization(&s.specialization)
                })
                .collect();
            matching.sort_by(|a, b| a.id.0.cmp(&b.id.0));

            if matching.is_empty() {
                warnings.push(format!(
                    "offering for {} has no matching sections",
                    offering.course_id
                ));
                continue;
            }

            if course.has_lecture() {
                let preferred: HashSet<InstructorId> = offering
                    .preferred_professor
                    .clone()
                    .into_iter()
                    .collect();
                for group in pack_into_groups(&matching, max_group_capacity) {
                    let total_students: u32 = group.iter().map(|s| s.student_count).sum();
                    sessions.push(Session {
                        id: self.next_session_id(),
                        course_id: course.id.clone(),
                        kind: SessionKind::Lecture,
                        duration_slots: course.lecture_duration_slots,
                        sections: group.iter().map(|s| s.id.clone()).collect(),
                        total_students,
                        is_small_group: total_students < max_group_capacity,
                        preferred_instructors: preferred.clone(),
                        domain: Domain::default(),
                    });
                }
            }

            if course.has_lab() {
                for section in &matching {
                    sessions.push(Session {
                        id: self.next_session_id(),
                        course_id: course.id.clone(),
                        kind: SessionKind::Lab,
                        duration_slots: course.lab_duration_slots,
                        sections: vec![section.id.clone()],
                        total_students: section.student_count,
                        is_small_group: section.student_count < max_group_capacity,
                        preferred_instructors: offering.preferred_assistants.clone(),
                        domain: Domain::default(),
                    });
                }
            }
        }

        (sessions, warnings)
    }
}

impl Default for VariableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Greedily packs sections (sorted by id ascending) into groups such that
/// adding the next section would not push the running total above the cap.
fn pack_into_groups<'a>(sections: &[&'a Section], cap: u32) -> Vec<Vec<&'a Section>> {
    let mut groups = Vec::new();
    let mut current: Vec<&Section> = Vec::new();
    let mut current_total: u32 = 0;

    for &section in sections {
        if !current.is_empty() && current_total + section.student_count > cap {
            groups.push(std::mem::take(&mut current));
            current_total = 0;
        }
        current_total += section.student_count;
        current.push(section);
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}
