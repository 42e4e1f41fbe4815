use crate::scheduler::{ResultRow, SolveOutcome};
use crate::validator::ValidationReport;

/// Generates a markdown report of the solved timetable.
pub fn generate_markdown_report(outcome: &SolveOutcome, rows: &[ResultRow], validation: &ValidationReport) -> String {
    let mut lines = vec![
        "# Timetable Report".to_string(),
        String::new(),
        format!("Generated: {}", outcome.metadata.generated_at.to_rfc3339()),
        format!("Algorithm: v{}", outcome.metadata.algorithm_version),
        format!(
            "Backtracking: {}ms ({} nodes explored)",
            outcome.metadata.backtracking_time_ms, outcome.metadata.nodes_explored
        ),
        format!("Annealing: {}ms", outcome.metadata.annealing_time_ms),
        String::new(),
    ];

    lines.push("## Summary\n".to_string());
    lines.push("| Metric | Value |".to_string());
    lines.push("|--------|-------|".to_string());
    lines.push(format!("| Sessions | {} |", outcome.sessions.len()));
    lines.push(format!("| Assignments | {} |", outcome.assignments.len()));
    lines.push(format!("| Final Cost | {} |", outcome.metadata.final_cost));
    lines.push(String::new());

    if validation.is_valid {
        lines.push("## Validation: ✅ PASSED\n".to_string());
    } else {
        lines.push("## Validation: ❌ FAILED\n".to_string());
        for v in &validation.violations {
            lines.push(format!("- **{}**: {}", v.constraint, v.message));
        }
        lines.push(String::new());
    }

    lines.push("## Soft Constraint Costs\n".to_string());
    for score in &validation.soft_scores {
        lines.push(format!("- **{}**: {}", score.constraint, score.cost));
    }
    lines.push(String::new());

    lines.push("## Schedule\n".to_string());
    lines.push("| Day | Start | End | Course | Type | Instructor | Room | Sections | Students |".to_string());
    lines.push("|-----|-------|-----|--------|------|------------|------|----------|----------|".to_string());
    for row in rows {
        lines.push(format!(
            "| {} | {} | {} | {} ({}) | {} | {} | {} | {} | {} |",
            row.day,
            row.start_time,
            row.end_time,
            row.course_name,
            row.course_id,
            row.kind,
            row.instructor,
            row.room,
            row.sections,
            row.student_count
        ));
    }

    lines.join("\n")
}
