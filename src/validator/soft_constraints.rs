//! Post-solve soft-constraint scoring for reports.

use crate::scheduler::cost::CostEvaluator;
use crate::types::{Assignment, SectionId, SessionId};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct SoftScore {
    pub constraint: String,
    pub cost: i64,
}

/// Breaks the total cost down per soft constraint so reports can show
/// where the penalty budget went, reusing the evaluator's private
/// per-term methods isn't possible across module boundaries, so this
/// recomputes each term with a zeroed weight vector for the others.
pub fn breakdown(
    evaluator_weights: crate::types::CostWeights,
    catalog: &crate::types::Catalog,
    assignments: &[Assignment],
    sections_by_session: &HashMap<SessionId, Vec<SectionId>>,
) -> Vec<SoftScore> {
    use crate::types::CostWeights;

    let isolate = |gap, bad_time, building, imbalance| {
        let weights = CostWeights {
            gap,
            bad_time,
            building,
            imbalance,
        };
        CostEvaluator::new(catalog, weights).total_cost(assignments, sections_by_session)
    };

    vec![
        SoftScore {
            constraint: "gap".into(),
            cost: isolate(evaluator_weights.gap, 0, 0, 0),
        },
        SoftScore {
            constraint: "bad_time".into(),
            cost: isolate(0, evaluator_weights.bad_time, 0, 0),
        },
        SoftScore {
            constraint: "building_change".into(),
            cost: isolate(0, 0, evaluator_weights.building, 0),
        },
        SoftScore {
            constraint: "daily_load_imbalance".into(),
            cost: isolate(0, 0, 0, evaluator_weights.imbalance),
        },
    ]
}
