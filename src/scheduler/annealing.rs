//! C7: neighborhood search (move / swap) with Metropolis acceptance.

use crate::scheduler::cost::CostEvaluator;
use crate::scheduler::state::State;
use crate::types::{AnnealingParams, Assignment, Catalog, InstructorId, SectionId, Session, SessionId, SlotId};
use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// Emitted every `PROGRESS_CADENCE` iterations and on cancellation.
pub struct ProgressSnapshot {
    pub iteration: u64,
    pub total_iterations: u64,
    pub best_cost: i64,
}

const PROGRESS_CADENCE: u64 = 100;

pub struct AnnealingOptimizer<'a> {
    sessions_by_id: HashMap<SessionId, &'a Session>,
    sections_by_session: HashMap<SessionId, Vec<SectionId>>,
    instructors: HashMap<&'a InstructorId, &'a crate::types::Instructor>,
    evaluator: &'a CostEvaluator<'a>,
    params: AnnealingParams,
    rng: ChaCha8Rng,
}

impl<'a> AnnealingOptimizer<'a> {
    pub fn new(
        catalog: &'a Catalog,
        sessions: &'a [Session],
        evaluator: &'a CostEvaluator<'a>,
        params: AnnealingParams,
    ) -> Self {
        let sessions_by_id = sessions.iter().map(|s| (s.id, s)).collect();
        let sections_by_session = sessions
            .iter()
            .map(|s| (s.id, s.sections.clone()))
            .collect();
        let instructors = catalog.instructors.iter().map(|i| (&i.id, i)).collect();
        let rng = match params.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        AnnealingOptimizer {
            sessions_by_id,
            sections_by_session,
            instructors,
            evaluator,
            params,
            rng,
        }
    }

    /// Runs `params.iterations` steps of simulated annealing starting from
    /// `initial_solution`/`initial_state`. Never fails once started: if no
    /// neighbor is ever accepted, the initial solution is returned
    /// unchanged (§7 propagation policy).
    pub fn optimize(
        &mut self,
        initial_solution: Vec<Assignment>,
        initial_state: State,
        cancel: Option<&AtomicBool>,
        mut on_progress: impl FnMut(&ProgressSnapshot),
    ) -> (Vec<Assignment>, i64) {
        let mut current_cost = self.evaluator.total_cost(&initial_solution, &self.sections_by_session);
        let mut current_solution = initial_solution;
        let mut current_state = initial_state;

        let mut best_solution = current_solution.clone();
        let mut best_cost = current_cost;

        let mut temperature = self.params.initial_temperature;

        for i in 0..self.params.iterations {
            temperature *= self.params.cooling_rate;

            let neighbor = if self.rng.gen_bool(0.5) {
                self.swap_neighbor(&current_solution, &current_state)
            } else {
                self.move_neighbor(&current_solution, &current_state)
            };

            let Some((new_solution, new_state)) = neighbor else {
                continue;
            };

            let new_cost = self.evaluator.total_cost(&new_solution, &self.sections_by_session);
            let delta = new_cost - current_cost;
            let accept = if delta <= 0 {
                true
            } else {
                let p = (-(delta as f64) / temperature).exp();
                self.rng.gen_range(0.0..1.0) < p
            };

            if accept {
                current_solution = new_solution;
                current_state = new_state;
                current_cost = new_cost;
                if current_cost < best_cost {
                    best_cost = current_cost;
                    best_solution = current_solution.clone();
                }
            }

            if i % PROGRESS_CADENCE == 0 {
                on_progress(&ProgressSnapshot {
                    iteration: i,
                    total_iterations: self.params.iterations,
                    best_cost,
                });

                if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                    return (best_solution, best_cost);
                }
            }
        }

        (best_solution, best_cost)
    }

    fn sections_of(&self, session_id: SessionId) -> &[SectionId] {
        self.sections_by_session
            .get(&session_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Picks two distinct assignments of equal duration and proposes
    /// swapping their (time, room, instructor) triples.
    fn swap_neighbor(&mut self, solution: &[Assignment], state: &State) -> Option<(Vec<Assignment>, State)> {
        if solution.len() < 2 {
            return None;
        }
        let i = self.rng.gen_range(0..solution.len());
        let mut j = self.rng.gen_range(0..solution.len());
        while j == i {
            j = self.rng.gen_range(0..solution.len());
        }

        let a1 = &solution[i];
        let a2 = &solution[j];
        let session1 = *self.sessions_by_id.get(&a1.session_id)?;
        let session2 = *self.sessions_by_id.get(&a2.session_id)?;
        if session1.duration_slots != session2.duration_slots {
            return None;
        }

        let candidate1 = Assignment {
            session_id: a1.session_id,
            time_sequence: a2.time_sequence.clone(),
            room: a2.room.clone(),
            instructor: a2.instructor.clone(),
        };
        let candidate2 = Assignment {
            session_id: a2.session_id,
            time_sequence: a1.time_sequence.clone(),
            room: a1.room.clone(),
            instructor: a1.instructor.clone(),
        };

        if !session1.domain.contains(&candidate1.time_sequence, &candidate1.room, &candidate1.instructor) {
            return None;
        }
        if !session2.domain.contains(&candidate2.time_sequence, &candidate2.room, &candidate2.instructor) {
            return None;
        }
        if self.assignment_violates_not_preferred(&candidate1) || self.assignment_violates_not_preferred(&candidate2) {
            return None;
        }

        let sections1 = self.sections_of(a1.session_id).to_vec();
        let sections2 = self.sections_of(a2.session_id).to_vec();

        let mut trial_state = state.clone();
        trial_state.remove(a1, &sections1);
        trial_state.remove(a2, &sections2);

        if !trial_state.is_consistent(&candidate1.time_sequence, &candidate1.room, &candidate1.instructor, &sections1) {
            return None;
        }
        trial_state.add(&candidate1, &sections1);

        if !trial_state.is_consistent(&candidate2.time_sequence, &candidate2.room, &candidate2.instructor, &sections2) {
            return None;
        }
        trial_state.add(&candidate2, &sections2);

        let mut new_solution = solution.to_vec();
        new_solution[i] = candidate1;
        new_solution[j] = candidate2;
        Some((new_solution, trial_state))
    }

    /// Picks one assignment and proposes a new (time, room) pair from its
    /// session's domain, keeping the same instructor.
    fn move_neighbor(&mut self, solution: &[Assignment], state: &State) -> Option<(Vec<Assignment>, State)> {
        if solution.is_empty() {
            return None;
        }
        let i = self.rng.gen_range(0..solution.len());
        let current = &solution[i];
        let session = *self.sessions_by_id.get(&current.session_id)?;
        let sections = self.sections_of(current.session_id).to_vec();

        let mut trial_state = state.clone();
        trial_state.remove(current, &sections);

        let mut candidates: Vec<(Vec<crate::types::SlotId>, crate::types::RoomId)> = Vec::new();
        for time_sequence in &session.domain.time_sequences {
            if time_sequence.iter().any(|s| self.instructor_not_preferred(&current.instructor, *s)) {
                continue;
            }
            for room in &session.domain.rooms {
                candidates.push((time_sequence.clone(), room.clone()));
            }
        }
        shuffle(&mut candidates, &mut self.rng);

        for (time_sequence, room) in candidates {
            if trial_state.is_consistent(&time_sequence, &room, &current.instructor, &sections) {
                let candidate = Assignment {
                    session_id: current.session_id,
                    time_sequence,
                    room,
                    instructor: current.instructor.clone(),
                };
                trial_state.add(&candidate, &sections);
                let mut new_solution = solution.to_vec();
                new_solution[i] = candidate;
                return Some((new_solution, trial_state));
            }
        }
        None
    }

    fn assignment_violates_not_preferred(&self, assignment: &Assignment) -> bool {
        assignment
            .time_sequence
            .iter()
            .any(|slot| self.instructor_not_preferred(&assignment.instructor, *slot))
    }

    fn instructor_not_preferred(&self, instructor: &InstructorId, slot: SlotId) -> bool {
        self.instructors
            .get(instructor)
            .is_some_and(|i| !i.prefers(slot))
    }
}

fn shuffle<T>(items: &mut [T], rng: &mut ChaCha8Rng) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CostWeights, CourseId, Domain, RoomId, RoomKind, SessionKind};

    fn instructor(id: &str) -> crate::types::Instructor {
        crate::types::Instructor {
            id: InstructorId(id.into()),
            name: id.into(),
            qualified_course_ids: Default::default(),
            not_preferred_slots: Default::default(),
        }
    }

    fn two_session_setup() -> (Catalog, Vec<Session>, Vec<Assignment>, State) {
        let mut catalog = Catalog::default();
        catalog.instructors = vec![instructor("I1"), instructor("I2")];
        catalog.rooms = vec![
            crate::types::Room {
                id: RoomId("R1".into()),
                capacity: 50,
                kind: RoomKind::Lecture,
                space_type: "Standard".into(),
            },
            crate::types::Room {
                id: RoomId("R2".into()),
                capacity: 50,
                kind: RoomKind::Lecture,
                space_type: "Standard".into(),
            },
        ];

        let domain = Domain {
            time_sequences: vec![vec![SlotId(0)], vec![SlotId(1)]],
            rooms: vec![RoomId("R1".into()), RoomId("R2".into())],
            instructors: vec![InstructorId("I1".into()), InstructorId("I2".into())],
        };

        let sessions = vec![
            Session {
                id: SessionId(0),
                course_id: CourseId("CS101".into()),
                kind: SessionKind::Lecture,
                duration_slots: 1,
                sections: vec![SectionId("S1".into())],
                total_students: 10,
                is_small_group: true,
                preferred_instructors: Default::default(),
                domain: domain.clone(),
            },
            Session {
                id: SessionId(1),
                course_id: CourseId("CS101".into()),
                kind: SessionKind::Lecture,
                duration_slots: 1,
                sections: vec![SectionId("S2".into())],
                total_students: 10,
                is_small_group: true,
                preferred_instructors: Default::default(),
                domain,
            },
        ];

        let a0 = Assignment {
            session_id: SessionId(0),
            time_sequence: vec![SlotId(0)],
            room: RoomId("R1".into()),
            instructor: InstructorId("I1".into()),
        };
        let a1 = Assignment {
            session_id: SessionId(1),
            time_sequence: vec![SlotId(1)],
            room: RoomId("R2".into()),
            instructor: InstructorId("I2".into()),
        };

        let mut state = State::new();
        state.add(&a0, &[SectionId("S1".into())]);
        state.add(&a1, &[SectionId("S2".into())]);

        (catalog, sessions, vec![a0, a1], state)
    }

    #[test]
    fn optimizer_never_worsens_best_cost() {
        let (catalog, sessions, solution, state) = two_session_setup();
        let evaluator = CostEvaluator::new(&catalog, CostWeights::default());
        let params = AnnealingParams {
            iterations: 200,
            initial_temperature: 5.0,
            cooling_rate: 0.99,
            seed: Some(42),
        };
        let mut optimizer = AnnealingOptimizer::new(&catalog, &sessions, &evaluator, params);
        let initial_cost = evaluator.total_cost(&solution, &optimizer.sections_by_session);

        let mut seen_best = Vec::new();
        let (_best_solution, best_cost) = optimizer.optimize(solution, state, None, |snap| {
            seen_best.push(snap.best_cost);
        });

        assert!(best_cost <= initial_cost);
        for pair in seen_best.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
    }

    #[test]
    fn cancellation_returns_cost_no_worse_than_initial() {
        let (catalog, sessions, solution, state) = two_session_setup();
        let evaluator = CostEvaluator::new(&catalog, CostWeights::default());
        let params = AnnealingParams {
            iterations: 1000,
            initial_temperature: 5.0,
            cooling_rate: 0.99,
            seed: Some(7),
        };
        let mut optimizer = AnnealingOptimizer::new(&catalog, &sessions, &evaluator, params);
        let initial_cost = evaluator.total_cost(&solution, &optimizer.sections_by_session);
        let cancel = AtomicBool::new(true);

        let (_solution, best_cost) = optimizer.optimize(solution, state, Some(&cancel), |_| {});
        assert!(best_cost <= initial_cost);
    }
}
