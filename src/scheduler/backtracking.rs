//! C5: MRV-ordered depth-first search with value ordering by
//! soft-preference score.

use crate::error::{Result, SolverError};
use crate::scheduler::state::State;
use crate::types::{Assignment, Catalog, InstructorId, RoomId, SectionId, Session, SessionId, SlotId};
use itertools::iproduct;
use std::collections::HashMap;

pub struct BacktrackingSolver<'a> {
    catalog: &'a Catalog,
    sections_by_session: HashMap<SessionId, Vec<SectionId>>,
    nodes_explored: u64,
}

/// One candidate value for a session: a concrete (time, room, instructor)
/// triple, scored for ordering.
struct Candidate {
    time_sequence: Vec<SlotId>,
    room: RoomId,
    instructor: InstructorId,
    score: i64,
}

impl<'a> BacktrackingSolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        BacktrackingSolver {
            catalog,
            sections_by_session: HashMap::new(),
            nodes_explored: 0,
        }
    }

    pub fn nodes_explored(&self) -> u64 {
        self.nodes_explored
    }

    /// Runs the search to completion. Returns the assignment list (one per
    /// session, in session-id order) and the final occupancy state.
    pub fn solve(&mut self, sessions: &[Session]) -> Result<(Vec<Assignment>, State)> {
        for session in sessions {
            self.sections_by_session
                .insert(session.id, session.sections.clone());
        }

        let instructors: HashMap<&InstructorId, &crate::types::Instructor> =
            self.catalog.instructors.iter().map(|i| (&i.id, i)).collect();

        // Static MRV ordering: ascending domain size, taken from the front.
        let mut ordered: Vec<&Session> = sessions.iter().collect();
        ordered.sort_by_key(|s| s.domain.size());

        let mut state = State::new();
        let mut assignments: Vec<Assignment> = Vec::new();

        if self.backtrack(&mut ordered, &instructors, &mut state, &mut assignments) {
            assignments.sort_by_key(|a| a.session_id);
            Ok((assignments, state))
        } else {
            Err(SolverError::Infeasible {
                nodes_explored: self.nodes_explored,
            })
        }
    }

    fn backtrack(
        &mut self,
        unassigned: &mut Vec<&Session>,
        instructors: &HashMap<&InstructorId, &crate::types::Instructor>,
        state: &mut State,
        assignments: &mut Vec<Assignment>,
    ) -> bool {
        let Some(session) = unassigned.first().copied() else {
            return true;
        };
        unassigned.remove(0);
        self.nodes_explored += 1;

        let sections = self
            .sections_by_session
            .get(&session.id)
            .cloned()
            .unwrap_or_default();

        for candidate in ordered_candidates(session, instructors) {
            if state.is_consistent(&candidate.time_sequence, &candidate.room, &candidate.instructor, &sections) {
                let assignment = Assignment {
                    session_id: session.id,
                    time_sequence: candidate.time_sequence,
                    room: candidate.room,
                    instructor: candidate.instructor,
                };
                state.add(&assignment, &sections);
                assignments.push(assignment.clone());

                if self.backtrack(unassigned, instructors, state, assignments) {
                    return true;
                }

                assignments.pop();
                state.remove(&assignment, &sections);
            }
        }

        unassigned.insert(0, session);
        false
    }
}

/// Cartesian product of time_sequences × instructors × rooms, pre-filtered
/// to drop combinations whose time sequence intersects the instructor's
/// not-preferred slots, then sorted ascending by heuristic score.
fn ordered_candidates(
    session: &Session,
    instructors: &HashMap<&InstructorId, &crate::types::Instructor>,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for (time_sequence, instructor_id, room) in iproduct!(
        &session.domain.time_sequences,
        &session.domain.instructors,
        &session.domain.rooms
    ) {
        let Some(instructor) = instructors.get(instructor_id) else {
            continue;
        };
        if time_sequence.iter().any(|slot| !instructor.prefers(*slot)) {
            continue;
        }
        let score = if session.preferred_instructors.contains(instructor_id) {
            -10
        } else {
            0
        };
        candidates.push(Candidate {
            time_sequence: time_sequence.clone(),
            room: room.clone(),
            instructor: instructor_id.clone(),
            score,
        });
    }

    candidates.sort_by_key(|c| c.score);
    candidates
}
