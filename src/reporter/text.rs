use crate::scheduler::{ResultRow, SolveOutcome};
use crate::validator::ValidationReport;
use colored::Colorize;

/// Generates a plain text report (with colors for terminal display).
pub fn generate_text_report(outcome: &SolveOutcome, rows: &[ResultRow], validation: &ValidationReport) -> String {
    let mut lines = Vec::new();

    lines.push("═".repeat(60));
    lines.push("               TIMETABLE REPORT".to_string());
    lines.push("═".repeat(60));
    lines.push(String::new());

    lines.push(format!("Generated: {}", outcome.metadata.generated_at.to_rfc3339()));
    lines.push(format!(
        "Backtracking: {}ms ({} nodes)",
        outcome.metadata.backtracking_time_ms, outcome.metadata.nodes_explored
    ));
    lines.push(format!("Annealing: {}ms", outcome.metadata.annealing_time_ms));
    lines.push(String::new());

    lines.push("─".repeat(40));
    lines.push("STATISTICS".to_string());
    lines.push("─".repeat(40));
    lines.push(format!("  Sessions:      {}", outcome.sessions.len()));
    lines.push(format!("  Assignments:   {}", outcome.assignments.len()));
    lines.push(format!("  Final Cost:    {}", outcome.metadata.final_cost));
    lines.push(String::new());

    lines.push("─".repeat(40));
    if validation.is_valid {
        lines.push("VALIDATION: PASSED".green().to_string());
    } else {
        lines.push("VALIDATION: FAILED".red().to_string());
        for v in &validation.violations {
            lines.push(format!("  ! {}: {}", v.constraint, v.message));
        }
    }
    lines.push("─".repeat(40));
    lines.push(String::new());

    lines.push("SCHEDULE".to_string());
    lines.push("─".repeat(40));
    for row in rows {
        lines.push(format!(
            "  {} {}-{} | {} ({}) | {} | {} | {} students",
            row.day, row.start_time, row.end_time, row.course_name, row.kind, row.instructor, row.room, row.student_count
        ));
    }

    lines.push(String::new());
    lines.push("═".repeat(60));

    lines.join("\n")
}

/// Prints a quick summary to stdout.
pub fn print_summary(outcome: &SolveOutcome, validation: &ValidationReport) {
    println!();
    if validation.is_valid {
        println!("{}", "✓ Timetable generated successfully".green().bold());
    } else {
        println!("{}", "✗ Timetable has validation errors".red().bold());
    }
    println!();
    println!("  Sessions:     {}", outcome.sessions.len());
    println!("  Assignments:  {}", outcome.assignments.len());
    println!("  Final cost:   {}", outcome.metadata.final_cost);
    println!(
        "  Time:         {}ms backtracking, {}ms annealing",
        outcome.metadata.backtracking_time_ms, outcome.metadata.annealing_time_ms
    );
    println!();
}
