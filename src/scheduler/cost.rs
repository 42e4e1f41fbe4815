//! C6: computes the scalar penalty of a full state.

use crate::types::{Assignment, Catalog, CostWeights, InstructorId, SectionId, SessionId, SlotId};
use std::collections::{HashMap, HashSet};

/// Precomputed per-catalog facts the evaluator reuses across calls so
/// repeated evaluation during annealing doesn't rescan the catalog.
pub struct CostEvaluator<'a> {
    catalog: &'a Catalog,
    weights: CostWeights,
    bad_time_slots: HashSet<SlotId>,
}

impl<'a> CostEvaluator<'a> {
    pub fn new(catalog: &'a Catalog, weights: CostWeights) -> Self {
        let bad_time_slots = catalog
            .time_slots
            .iter()
            .filter(|s| s.is_bad_time())
            .map(|s| s.id)
            .collect();
        CostEvaluator {
            catalog,
            weights,
            bad_time_slots,
        }
    }

    /// Total cost of a full solution: bad-time + building-change + gap +
    /// daily-load-imbalance penalties.
    pub fn total_cost(
        &self,
        assignments: &[Assignment],
        sections_by_session: &HashMap<SessionId, Vec<SectionId>>,
    ) -> i64 {
        self.bad_time_penalty(assignments)
            + self.building_change_penalty(assignments)
            + self.gap_penalty(assignments, sections_by_session)
            + self.imbalance_penalty(assignments, sections_by_session)
    }

    fn bad_time_penalty(&self, assignments: &[Assignment]) -> i64 {
        let hits: i64 = assignments
            .iter()
            .map(|a| {
                a.time_sequence
                    .iter()
                    .filter(|slot| self.bad_time_slots.contains(slot))
                    .count() as i64
            })
            .sum();
        self.weights.bad_time * hits
    }

    fn building_change_penalty(&self, assignments: &[Assignment]) -> i64 {
        let rooms: HashMap<&crate::types::RoomId, &crate::types::Room> =
            self.catalog.rooms.iter().map(|r| (&r.id, r)).collect();
        let day_of: HashMap<SlotId, &str> = self
            .catalog
            .time_slots
            .iter()
            .map(|s| (s.id, s.day.as_str()))
            .collect();

        let mut by_instructor: HashMap<&InstructorId, Vec<&Assignment>> = HashMap::new();
        for a in assignments {
            by_instructor.entry(&a.instructor).or_default().push(a);
        }

        let mut penalty = 0i64;
        for group in by_instructor.values_mut() {
            group.sort_by_key(|a| a.first_slot());
            for pair in group.windows(2) {
                let (a1, a2) = (pair[0], pair[1]);
                let (Some(s1), Some(s2)) = (a1.first_slot(), a2.first_slot()) else {
                    continue;
                };
                if day_of.get(&s1) != day_of.get(&s2) {
                    continue;
                }
                let (Some(r1), Some(r2)) = (rooms.get(&a1.room), rooms.get(&a2.room)) else {
                    continue;
                };
                if r1.building() != r2.building() {
                    penalty += self.weights.building;
                }
            }
        }
        penalty
    }

    fn gap_penalty(
        &self,
        assignments: &[Assignment],
        sections_by_session: &HashMap<SessionId, Vec<SectionId>>,
    ) -> i64 {
        let day_of: HashMap<SlotId, &str> = self
            .catalog
            .time_slots
            .iter()
            .map(|s| (s.id, s.day.as_str()))
            .collect();

        let mut by_section: HashMap<&SectionId, Vec<SlotId>> = HashMap::new();
        for a in assignments {
            if let Some(sections) = sections_by_session.get(&a.session_id) {
                for section in sections {
                    by_section
                        .entry(section)
                        .or_default()
                        .extend(a.time_sequence.iter().copied());
                }
            }
        }

        let mut penalty = 0i64;
        for slots in by_section.values_mut() {
            slots.sort();
            let mut by_day: HashMap<&str, Vec<SlotId>> = HashMap::new();
            for slot in slots.iter() {
                if let Some(day) = day_of.get(slot) {
                    by_day.entry(day).or_default().push(*slot);
                }
            }
            for day_slots in by_day.values_mut() {
                day_slots.sort();
                day_slots.dedup();
                for pair in day_slots.windows(2) {
                    let gap = pair[1].0 as i64 - pair[0].0 as i64;
                    penalty += match gap {
                        1 => 0,
                        2 => self.weights.gap,
                        3 => 3 * self.weights.gap,
                        _ => 5 * self.weights.gap,
                    };
                }
            }
        }
        penalty
    }

    fn imbalance_penalty(
        &self,
        assignments: &[Assignment],
        sections_by_session: &HashMap<SessionId, Vec<SectionId>>,
    ) -> i64 {
        let day_of: HashMap<SlotId, &str> = self
            .catalog
            .time_slots
            .iter()
            .map(|s| (s.id, s.day.as_str()))
            .collect();

        let mut by_section: HashMap<&SectionId, HashMap<&str, i64>> = HashMap::new();
        for a in assignments {
            if let Some(sections) = sections_by_session.get(&a.session_id) {
                for section in sections {
                    let per_day = by_section.entry(section).or_default();
                    for slot in &a.time_sequence {
                        if let Some(day) = day_of.get(slot) {
                            *per_day.entry(day).or_insert(0) += 1;
                        }
                    }
                }
            }
        }

        let mut penalty = 0i64;
        for per_day in by_section.values() {
            if per_day.is_empty() {
                continue;
            }
            let max = *per_day.values().max().unwrap();
            let min = *per_day.values().min().unwrap();
            if max - min > 3 {
                penalty += (max - min) * self.weights.imbalance;
            }
        }
        penalty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{InstructorId, NaiveTimeOfDay, RoomId, RoomKind, SectionId, TimeSlot};

    fn slot(id: u32, hour: u32) -> TimeSlot {
        TimeSlot {
            id: SlotId(id),
            day: "Sunday".into(),
            start: NaiveTimeOfDay { hour, minute: 0 },
            end: NaiveTimeOfDay {
                hour: hour + 1,
                minute: 0,
            },
        }
    }

    fn assignment(session: u64, slots: Vec<u32>, room: &str) -> Assignment {
        Assignment {
            session_id: SessionId(session),
            time_sequence: slots.into_iter().map(SlotId).collect(),
            room: RoomId(room.into()),
            instructor: InstructorId("I1".into()),
        }
    }

    #[test]
    fn gap_penalty_scales_with_distance() {
        let mut catalog = Catalog::default();
        catalog.time_slots = (0..6).map(|i| slot(i, 9)).collect();
        let evaluator = CostEvaluator::new(&catalog, CostWeights::default());

        let sections_by_session: HashMap<SessionId, Vec<SectionId>> = [
            (SessionId(0), vec![SectionId("S1".into())]),
            (SessionId(1), vec![SectionId("S1".into())]),
        ]
        .into_iter()
        .collect();

        let small_gap = vec![assignment(0, vec![1], "R1"), assignment(1, vec![3], "R1")];
        let big_gap = vec![assignment(0, vec![1], "R1"), assignment(1, vec![4], "R1")];

        let small_cost = evaluator.gap_penalty(&small_gap, &sections_by_session);
        let big_cost = evaluator.gap_penalty(&big_gap, &sections_by_session);
        assert_eq!(big_cost - small_cost, 2 * evaluator.weights.gap);
    }

    #[test]
    fn bad_time_flags_early_and_late_slots() {
        let mut catalog = Catalog::default();
        catalog.time_slots = vec![slot(0, 8), slot(1, 9)];
        let evaluator = CostEvaluator::new(&catalog, CostWeights::default());
        assert!(evaluator.bad_time_slots.contains(&SlotId(0)));
        assert!(!evaluator.bad_time_slots.contains(&SlotId(1)));
    }

    #[test]
    fn building_change_penalizes_adjacent_different_buildings() {
        let mut catalog = Catalog::default();
        catalog.time_slots = vec![slot(0, 9), slot(1, 10)];
        catalog.rooms = vec![
            crate::types::Room {
                id: RoomId("A 1".into()),
                capacity: 50,
                kind: RoomKind::Lecture,
                space_type: "Standard".into(),
            },
            crate::types::Room {
                id: RoomId("B 1".into()),
                capacity: 50,
                kind: RoomKind::Lecture,
                space_type: "Standard".into(),
            },
        ];
        let evaluator = CostEvaluator::new(&catalog, CostWeights::default());
        let assignments = vec![assignment(0, vec![0], "A 1"), assignment(1, vec![1], "B 1")];
        assert_eq!(evaluator.building_change_penalty(&assignments), evaluator.weights.building);
    }

    proptest::proptest! {
        /// P6: re-evaluating the same solution never produces a different
        /// cost — there's no hidden mutable state in the evaluator.
        #[test]
        fn total_cost_is_deterministic_across_repeated_evaluation(hour in 6u32..20, gap in 1u32..6) {
            let mut catalog = Catalog::default();
            catalog.time_slots = (0..10).map(|i| slot(i, hour)).collect();
            let evaluator = CostEvaluator::new(&catalog, CostWeights::default());
            let sections_by_session: HashMap<SessionId, Vec<SectionId>> =
                [(SessionId(0), vec![SectionId("S1".into())]), (SessionId(1), vec![SectionId("S1".into())])]
                    .into_iter()
                    .collect();
            let assignments = vec![assignment(0, vec![0], "R1"), assignment(1, vec![gap.min(9)], "R1")];

            let first = evaluator.total_cost(&assignments, &sections_by_session);
            let second = evaluator.total_cost(&assignments, &sections_by_session);
            proptest::prop_assert_eq!(first, second);
        }
    }
}
