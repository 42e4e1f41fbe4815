mod hard_constraints;
mod soft_constraints;

pub use hard_constraints::{check_coverage, check_domain_closure, check_no_resource_conflicts, Violation};
pub use soft_constraints::{breakdown, SoftScore};

use crate::types::{Assignment, Catalog, Session, SessionId, SolverConfig};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub violations: Vec<Violation>,
    pub soft_scores: Vec<SoftScore>,
    pub total_cost: i64,
}

/// Runs every post-solve property check (P1-P3) and produces a soft-score
/// breakdown for reporting.
pub fn validate_solution(
    catalog: &Catalog,
    sessions: &[Session],
    assignments: &[Assignment],
    config: &SolverConfig,
) -> ValidationReport {
    let sessions_by_id: HashMap<SessionId, Session> = sessions.iter().cloned().map(|s| (s.id, s)).collect();
    let sections_by_session: HashMap<SessionId, Vec<crate::types::SectionId>> =
        sessions.iter().map(|s| (s.id, s.sections.clone())).collect();

    let mut violations = Vec::new();
    violations.extend(check_no_resource_conflicts(assignments, &sessions_by_id));
    violations.extend(check_domain_closure(assignments, &sessions_by_id));
    violations.extend(check_coverage(assignments, sessions));

    let soft_scores = breakdown(config.weights, catalog, assignments, &sections_by_session);
    let total_cost = soft_scores.iter().map(|s| s.cost).sum();

    ValidationReport {
        is_valid: violations.is_empty(),
        violations,
        soft_scores,
        total_cost,
    }
}
