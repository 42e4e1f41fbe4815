//! Post-solve checks for P1 (Feasibility) and P3 (Domain closure).

use crate::types::{Assignment, Session, SessionId};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct Violation {
    pub constraint: String,
    pub message: String,
}

/// P1: no slot in any assignment's time sequence is shared by another
/// assignment's instructor, room, or any of its sections.
pub fn check_no_resource_conflicts(assignments: &[Assignment], sessions: &HashMap<SessionId, Session>) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut instructor_slots: HashMap<&crate::types::InstructorId, HashSet<crate::types::SlotId>> = HashMap::new();
    let mut room_slots: HashMap<&crate::types::RoomId, HashSet<crate::types::SlotId>> = HashMap::new();
    let mut section_slots: HashMap<&crate::types::SectionId, HashSet<crate::types::SlotId>> = HashMap::new();

    for assignment in assignments {
        let sections = sessions
            .get(&assignment.session_id)
            .map(|s| s.sections.as_slice())
            .unwrap_or(&[]);

        for slot in &assignment.time_sequence {
            if !instructor_slots
                .entry(&assignment.instructor)
                .or_default()
                .insert(*slot)
            {
                violations.push(Violation {
                    constraint: "instructor_conflict".into(),
                    message: format!("instructor {} double-booked at slot {}", assignment.instructor, slot),
                });
            }
            if !room_slots.entry(&assignment.room).or_default().insert(*slot) {
                violations.push(Violation {
                    constraint: "room_conflict".into(),
                    message: format!("room {} double-booked at slot {}", assignment.room, slot),
                });
            }
            for section in sections {
                if !section_slots.entry(section).or_default().insert(*slot) {
                    violations.push(Violation {
                        constraint: "section_conflict".into(),
                        message: format!("section {section} double-booked at slot {slot}"),
                    });
                }
            }
        }
    }
    violations
}

/// P3: every assignment's (time_sequence, room, instructor) lies in its
/// session's precomputed domain.
pub fn check_domain_closure(assignments: &[Assignment], sessions: &HashMap<SessionId, Session>) -> Vec<Violation> {
    let mut violations = Vec::new();
    for assignment in assignments {
        let Some(session) = sessions.get(&assignment.session_id) else {
            violations.push(Violation {
                constraint: "domain_closure".into(),
                message: format!("assignment references unknown session {}", assignment.session_id),
            });
            continue;
        };
        if !session
            .domain
            .contains(&assignment.time_sequence, &assignment.room, &assignment.instructor)
        {
            violations.push(Violation {
                constraint: "domain_closure".into(),
                message: format!("assignment for {} lies outside its session's domain", session.id),
            });
        }
    }
    violations
}

/// P2: exactly one assignment per generated session.
pub fn check_coverage(assignments: &[Assignment], sessions: &[Session]) -> Vec<Violation> {
    let assigned: HashSet<SessionId> = assignments.iter().map(|a| a.session_id).collect();
    sessions
        .iter()
        .filter(|s| !assigned.contains(&s.id))
        .map(|s| Violation {
            constraint: "coverage".into(),
            message: format!("session {} has no assignment", s.id),
        })
        .collect()
}
