mod json;
mod markdown;
mod text;

pub use json::*;
pub use markdown::*;
pub use text::*;

use crate::error::{Result, SolverError};
use crate::scheduler::{to_rows, ResultRow, SolveOutcome};
use crate::types::{Catalog, InstructorId};
use crate::validator::ValidationReport;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Text,
}

/// Generates every requested report format and writes it to `output_dir`.
pub fn generate_reports(
    catalog: &Catalog,
    outcome: &SolveOutcome,
    validation: &ValidationReport,
    output_dir: &Path,
    formats: &[OutputFormat],
) -> Result<()> {
    fs::create_dir_all(output_dir).map_err(|e| SolverError::FileRead {
        path: output_dir.display().to_string(),
        source: e,
    })?;

    let sessions_by_id: HashMap<_, _> = outcome.sessions.iter().cloned().map(|s| (s.id, s)).collect();
    let rows = to_rows(catalog, &outcome.assignments, &sessions_by_id);

    for format in formats {
        match format {
            OutputFormat::Json => {
                let json = generate_json_report(&rows)?;
                write(output_dir.join("timetable.json"), json)?;
            }
            OutputFormat::Markdown => {
                let md = generate_markdown_report(outcome, &rows, validation);
                write(output_dir.join("timetable.md"), md)?;
            }
            OutputFormat::Text => {
                let txt = generate_text_report(outcome, &rows, validation);
                write(output_dir.join("timetable.txt"), txt)?;
            }
        }
    }

    Ok(())
}

fn write(path: std::path::PathBuf, content: String) -> Result<()> {
    fs::write(&path, content).map_err(|e| SolverError::FileRead {
        path: path.display().to_string(),
        source: e,
    })
}

/// Renders one instructor's personal schedule.
pub fn generate_instructor_schedule(catalog: &Catalog, outcome: &SolveOutcome, instructor_id: &InstructorId) -> Option<String> {
    let instructor = catalog.instructor(instructor_id)?;
    let sessions_by_id: HashMap<_, _> = outcome.sessions.iter().cloned().map(|s| (s.id, s)).collect();
    let rows: Vec<ResultRow> = to_rows(catalog, &outcome.assignments, &sessions_by_id)
        .into_iter()
        .filter(|r| r.instructor == instructor.name)
        .collect();

    let mut lines = vec![format!("# Schedule for {} ({})", instructor.name, instructor.id), String::new()];

    if rows.is_empty() {
        lines.push("No sessions assigned.".to_string());
    } else {
        lines.push(format!("## Teaching {} sessions\n", rows.len()));
        for row in &rows {
            lines.push(format!(
                "- **{}** ({}): {} {}-{} - Room {} ({} students)",
                row.course_name, row.course_id, row.day, row.start_time, row.end_time, row.room, row.student_count
            ));
        }
    }

    Some(lines.join("\n"))
}

/// Renders one department/level cohort's schedule.
pub fn generate_level_schedule(catalog: &Catalog, outcome: &SolveOutcome, department: &str, level: &str) -> String {
    let sessions_by_id: HashMap<_, _> = outcome.sessions.iter().cloned().map(|s| (s.id, s)).collect();
    let matching_sections: Vec<_> = catalog
        .sections
        .iter()
        .filter(|s| s.department == department && s.level == level)
        .map(|s| &s.id)
        .collect();

    let rows: Vec<ResultRow> = to_rows(catalog, &outcome.assignments, &sessions_by_id)
        .into_iter()
        .filter(|r| matching_sections.iter().any(|id| r.sections.contains(&id.0)))
        .collect();

    let mut lines = vec![format!("# Schedule for {department} / level {level}"), String::new()];
    if rows.is_empty() {
        lines.push("No sessions scheduled.".to_string());
    } else {
        for row in &rows {
            lines.push(format!(
                "- {} {}-{}: {} ({}) with {} in {}",
                row.day, row.start_time, row.end_time, row.course_name, row.kind, row.instructor, row.room
            ));
        }
    }
    lines.join("\n")
}
