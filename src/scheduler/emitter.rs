//! C8: converts assignments to tabular rows for downstream renderers.

use crate::types::{Assignment, Catalog, SectionId, SessionId};
use serde::Serialize;
use std::collections::HashMap;

/// One row of the stable output schema (§6): `Day, StartTime, EndTime,
/// CourseID, CourseName, Type, Instructor, Room, Sections, StudentCount`.
#[derive(Debug, Clone, Serialize)]
pub struct ResultRow {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub course_id: String,
    pub course_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub instructor: String,
    pub room: String,
    pub sections: String,
    pub student_count: u32,
}

pub fn to_rows(
    catalog: &Catalog,
    assignments: &[Assignment],
    sessions_by_id: &HashMap<SessionId, crate::types::Session>,
) -> Vec<ResultRow> {
    let slots_by_id: HashMap<_, _> = catalog.time_slots.iter().map(|s| (s.id, s)).collect();

    let mut rows: Vec<(crate::types::SlotId, ResultRow)> = assignments
        .iter()
        .filter_map(|a| {
            let session = sessions_by_id.get(&a.session_id)?;
            let course = catalog.course(&session.course_id);
            let instructor = catalog.instructor(&a.instructor);
            let first_id = a.first_slot()?;
            let first = slots_by_id.get(&first_id).copied()?;
            let last = a.last_slot().and_then(|s| slots_by_id.get(&s).copied())?;

            let sections_csv = session
                .sections
                .iter()
                .map(|s: &SectionId| s.0.clone())
                .collect::<Vec<_>>()
                .join(", ");

            Some((
                first_id,
                ResultRow {
                    day: first.day.clone(),
                    start_time: first.start.to_string(),
                    end_time: last.end.to_string(),
                    course_id: session.course_id.0.clone(),
                    course_name: course.map(|c| c.name.clone()).unwrap_or_else(|| "Unknown".into()),
                    kind: format!("{:?}", session.kind),
                    instructor: instructor.map(|i| i.name.clone()).unwrap_or_else(|| a.instructor.0.clone()),
                    room: a.room.0.clone(),
                    sections: sections_csv,
                    student_count: session.total_students,
                },
            ))
        })
        .collect();

    // Slot ids are globally ordered (§3), so sorting by the assignment's
    // first slot already yields chronological (Day, StartTime) order without
    // a lexicographic string comparison on "H:MM".
    rows.sort_by_key(|(slot_id, _)| *slot_id);
    rows.into_iter().map(|(_, row)| row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CourseId, Domain, InstructorId, NaiveTimeOfDay, RoomId, SessionKind, SlotId, TimeSlot};

    #[test]
    fn rows_sort_by_slot_id_not_start_time_string() {
        let mut catalog = Catalog::default();
        catalog.time_slots = vec![
            TimeSlot {
                id: SlotId(0),
                day: "Sunday".into(),
                start: NaiveTimeOfDay { hour: 9, minute: 0 },
                end: NaiveTimeOfDay { hour: 10, minute: 0 },
            },
            // A later slot whose "H:MM" start_time string ("10:00") would
            // sort before "9:00" lexicographically if compared as a string.
            TimeSlot {
                id: SlotId(1),
                day: "Monday".into(),
                start: NaiveTimeOfDay {
                    hour: 10,
                    minute: 0,
                },
                end: NaiveTimeOfDay {
                    hour: 11,
                    minute: 0,
                },
            },
        ];

        let session_monday = crate::types::Session {
            id: SessionId(0),
            course_id: CourseId("CS101".into()),
            kind: SessionKind::Lecture,
            duration_slots: 1,
            sections: vec![SectionId("S1".into())],
            total_students: 10,
            is_small_group: true,
            preferred_instructors: Default::default(),
            domain: Domain::default(),
        };
        let session_sunday = crate::types::Session {
            id: SessionId(1),
            ..session_monday.clone()
        };

        let sessions: HashMap<_, _> = [
            (SessionId(0), session_monday),
            (SessionId(1), session_sunday),
        ]
        .into_iter()
        .collect();

        let assignments = vec![
            Assignment {
                session_id: SessionId(0),
                time_sequence: vec![SlotId(0)],
                room: RoomId("R1".into()),
                instructor: InstructorId("I1".into()),
            },
            Assignment {
                session_id: SessionId(1),
                time_sequence: vec![SlotId(1)],
                room: RoomId("R1".into()),
                instructor: InstructorId("I1".into()),
            },
        ];

        let rows = to_rows(&catalog, &assignments, &sessions);
        assert_eq!(rows[0].day, "Sunday");
        assert_eq!(rows[1].day, "Monday");
    }
}
