//! C3: for each session, computes admissible (time-sequence, room,
//! instructor) candidates.

use crate::types::{Catalog, Domain, InstructorId, RoomId, Session, SessionKind, SlotId, SolverConfig};
use std::collections::{HashMap, HashSet};

/// Every contiguous window of `duration_slots` consecutive ids within one
/// day's sorted slot list. Computed once per distinct duration and reused
/// across sessions that share it.
pub fn time_sequences_for_duration(catalog: &Catalog, duration_slots: u32) -> Vec<Vec<SlotId>> {
    if duration_slots == 0 {
        return Vec::new();
    }
    let duration = duration_slots as usize;
    let mut sequences = Vec::new();

    for day_slots in catalog.slots_by_day().values() {
        if day_slots.len() < duration {
            continue;
        }
        for window in day_slots.windows(duration) {
            let consecutive = window.windows(2).all(|pair| pair[1].id.0 == pair[0].id.0 + 1);
            if consecutive {
                sequences.push(window.iter().map(|s| s.id).collect());
            }
        }
    }
    sequences
}

fn admissible_rooms(catalog: &Catalog, session: &Session, config: &SolverConfig) -> Vec<RoomId> {
    let Some(course) = catalog.course(&session.course_id) else {
        return Vec::new();
    };

    catalog
        .rooms
        .iter()
        .filter(|room| room.capacity >= session.total_students)
        .filter(|room| match session.kind {
            SessionKind::Lab => course
                .lab_space_type
                .as_deref()
                .map(|want| want == room.space_type)
                .unwrap_or(false),
            SessionKind::Lecture => {
                if config.excluded_lecture_spaces.contains(&room.space_type) {
                    return false;
                }
                if !session.is_small_group && room.kind != crate::types::RoomKind::Lecture {
                    return false;
                }
                true
            }
        })
        .map(|room| room.id.clone())
        .collect()
}

/// Preferred instructors intersected with the catalog; falls back to all
/// qualified instructors if that intersection is empty (open question O1).
/// Returns `true` in the second element when the fallback was taken, so
/// the caller can surface a warning.
fn admissible_instructors(catalog: &Catalog, session: &Session) -> (Vec<InstructorId>, bool) {
    if !session.preferred_instructors.is_empty() {
        let intersected: Vec<InstructorId> = catalog
            .instructors
            .iter()
            .filter(|i| session.preferred_instructors.contains(&i.id))
            .map(|i| i.id.clone())
            .collect();
        if !intersected.is_empty() {
            return (intersected, false);
        }
    }
    let qualified: Vec<InstructorId> = catalog
        .instructors
        .iter()
        .filter(|i| i.is_qualified_for(&session.course_id))
        .map(|i| i.id.clone())
        .collect();
    (qualified, !session.preferred_instructors.is_empty())
}

pub struct DomainBuildResult {
    pub fallback_warnings: Vec<String>,
}

/// Fills in each session's `domain` field in place.
pub fn build_domains(catalog: &Catalog, sessions: &mut [Session], config: &SolverConfig) -> DomainBuildResult {
    let mut sequence_cache: HashMap<u32, Vec<Vec<SlotId>>> = HashMap::new();
    let mut warnings = Vec::new();

    for session in sessions.iter_mut() {
        let time_sequences = sequence_cache
            .entry(session.duration_slots)
            .or_insert_with(|| time_sequences_for_duration(catalog, session.duration_slots))
            .clone();
        let rooms = admissible_rooms(catalog, session, config);
        let (instructors, used_fallback) = admissible_instructors(catalog, session);
        if used_fallback {
            warnings.push(format!(
                "{}: preferred instructors not available, fell back to qualified instructors",
                session.id
            ));
        }

        session.domain = Domain {
            time_sequences,
            rooms,
            instructors,
        };
    }

    DomainBuildResult {
        fallback_warnings: warnings,
    }
}

/// Every coordinate that is empty for this session, for the EmptyDomain
/// error (§7).
pub fn empty_coordinates(domain: &Domain) -> Vec<&'static str> {
    let mut empties = Vec::new();
    if domain.time_sequences.is_empty() {
        empties.push("time_sequences");
    }
    if domain.rooms.is_empty() {
        empties.push("rooms");
    }
    if domain.instructors.is_empty() {
        empties.push("instructors");
    }
    empties
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NaiveTimeOfDay, TimeSlot};

    fn slot(id: u32, day: &str) -> TimeSlot {
        TimeSlot {
            id: SlotId(id),
            day: day.into(),
            start: NaiveTimeOfDay { hour: 9, minute: 0 },
            end: NaiveTimeOfDay { hour: 10, minute: 0 },
        }
    }

    #[test]
    fn time_sequences_never_cross_day_boundary() {
        let mut catalog = Catalog::default();
        catalog.time_slots = vec![slot(0, "Sunday"), slot(1, "Sunday"), slot(2, "Monday")];
        let sequences = time_sequences_for_duration(&catalog, 2);
        assert_eq!(sequences, vec![vec![SlotId(0), SlotId(1)]]);
    }

    #[test]
    fn zero_duration_yields_no_sequences() {
        let catalog = Catalog::default();
        assert!(time_sequences_for_duration(&catalog, 0).is_empty());
    }
}
