use crate::error::{Result, SolverError};
use crate::scheduler::ResultRow;
use serde::Serialize;

/// Full tabular JSON report: one row per assignment (§4.8 output schema).
pub fn generate_json_report(rows: &[ResultRow]) -> Result<String> {
    serde_json::to_string_pretty(rows).map_err(|e| SolverError::JsonParse {
        file: "<report>".into(),
        message: e.to_string(),
    })
}

#[derive(Serialize)]
pub struct JsonSummary {
    pub total_sessions: usize,
    pub total_assignments: usize,
    pub nodes_explored: u64,
    pub final_cost: i64,
    pub backtracking_time_ms: u64,
    pub annealing_time_ms: u64,
}

pub fn generate_json_summary(outcome: &crate::scheduler::SolveOutcome) -> Result<String> {
    let summary = JsonSummary {
        total_sessions: outcome.sessions.len(),
        total_assignments: outcome.assignments.len(),
        nodes_explored: outcome.metadata.nodes_explored,
        final_cost: outcome.metadata.final_cost,
        backtracking_time_ms: outcome.metadata.backtracking_time_ms,
        annealing_time_ms: outcome.metadata.annealing_time_ms,
    };
    serde_json::to_string_pretty(&summary).map_err(|e| SolverError::JsonParse {
        file: "<summary>".into(),
        message: e.to_string(),
    })
}
