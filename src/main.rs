use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use timetable_solver::parser::{load_catalog_from_dir, load_config_or_default, validate_catalog};
use timetable_solver::reporter::{
    generate_instructor_schedule, generate_level_schedule, generate_reports, print_summary,
    OutputFormat,
};
use timetable_solver::scheduler::{generate_timetable, SolveOutcome};
use timetable_solver::types::{Catalog, InstructorId};
use timetable_solver::validator::validate_solution;

#[derive(Parser)]
#[command(name = "timetable-solver")]
#[command(about = "Constraint-based university timetable generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run demo with sample data
    Demo,

    /// Generate a timetable from catalog data
    Solve {
        /// Directory containing catalog JSON files
        #[arg(short, long)]
        data: PathBuf,

        /// Output directory for timetable files
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Output format(s): json, markdown, text, or all
        #[arg(short, long, default_value = "all")]
        format: String,

        /// Suppress progress output, print JSON summary only
        #[arg(short, long)]
        quiet: bool,
    },

    /// Validate an existing timetable against its catalog
    Validate {
        /// Path to timetable.json file
        #[arg(short, long)]
        timetable: PathBuf,

        /// Directory containing catalog data for validation
        #[arg(short, long)]
        data: PathBuf,

        /// Show detailed validation results
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate reports from a solved timetable
    Report {
        /// Path to timetable.json file
        #[arg(short, long)]
        timetable: PathBuf,

        /// Directory containing catalog data
        #[arg(short, long)]
        data: PathBuf,

        /// Generate schedule for a specific instructor ID
        #[arg(long)]
        instructor: Option<String>,

        /// Generate schedule for a department/level cohort, as "DEPT/LEVEL"
        #[arg(long)]
        cohort: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => run_demo(),
        Commands::Solve {
            data,
            output,
            format,
            quiet,
        } => run_solve(&data, &output, &format, quiet),
        Commands::Validate {
            timetable,
            data,
            verbose,
        } => run_validate(&timetable, &data, verbose),
        Commands::Report {
            timetable,
            data,
            instructor,
            cohort,
        } => run_report(&timetable, &data, instructor, cohort),
    }
}

fn run_demo() -> Result<()> {
    println!("{}", "Timetable Solver Demo".bold().cyan());
    println!("{}", "─".repeat(40));

    let demo_path = PathBuf::from("data/demo");
    let output_path = PathBuf::from("output");

    if !demo_path.join("courses.json").exists() {
        println!(
            "{}",
            "Demo data not found. Creating sample data...".yellow()
        );
        create_demo_data(&demo_path)?;
    }

    println!("Loading demo data from: {}", demo_path.display());

    let catalog = load_catalog_from_dir(&demo_path).context("Failed to load demo data")?;
    let result = validate_catalog(&catalog)?;
    for warning in &result.warnings {
        println!("{} {}", "Warning:".yellow(), warning);
    }

    println!(
        "Loaded {} courses, {} rooms, {} instructors, {} sections, {} offerings",
        catalog.courses.len(),
        catalog.rooms.len(),
        catalog.instructors.len(),
        catalog.sections.len(),
        catalog.offerings.len()
    );

    println!("\nGenerating timetable...\n");
    let config = load_config_or_default(&demo_path.join("config.toml"));
    let outcome = generate_timetable(&catalog, &config, false)?;
    let validation = validate_solution(&catalog, &outcome.sessions, &outcome.assignments, &config);

    print_summary(&outcome, &validation);

    generate_reports(
        &catalog,
        &outcome,
        &validation,
        &output_path,
        &[OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Text],
    )?;

    println!(
        "Reports written to: {}",
        output_path.display().to_string().green()
    );

    Ok(())
}

fn run_solve(data: &PathBuf, output: &PathBuf, format: &str, quiet: bool) -> Result<()> {
    let catalog = load_catalog_from_dir(data).context("Failed to load catalog data")?;
    let config = load_config_or_default(&data.join("config.toml"));

    let result = validate_catalog(&catalog)?;
    if !quiet {
        for warning in &result.warnings {
            println!("{} {}", "Warning:".yellow(), warning);
        }
        println!(
            "Loaded {} courses, {} rooms, {} instructors, {} sections, {} offerings",
            catalog.courses.len(),
            catalog.rooms.len(),
            catalog.instructors.len(),
            catalog.sections.len(),
            catalog.offerings.len()
        );
    }

    let outcome = generate_timetable(&catalog, &config, quiet)?;
    let validation = validate_solution(&catalog, &outcome.sessions, &outcome.assignments, &config);

    let formats = parse_formats(format);
    generate_reports(&catalog, &outcome, &validation, output, &formats)?;

    if quiet {
        let summary = timetable_solver::reporter::generate_json_summary(&outcome)?;
        println!("{}", summary);
    } else {
        print_summary(&outcome, &validation);
        println!("Reports written to: {}", output.display().to_string().green());
    }

    Ok(())
}

fn run_validate(timetable_path: &PathBuf, data: &PathBuf, verbose: bool) -> Result<()> {
    let catalog = load_catalog_from_dir(data)?;
    let config = load_config_or_default(&data.join("config.toml"));
    let (sessions, assignments) = load_rows_as_solution(timetable_path, &catalog)?;

    let validation = validate_solution(&catalog, &sessions, &assignments, &config);

    if validation.is_valid {
        println!("{}", "✓ Timetable is valid".green().bold());
    } else {
        println!("{}", "✗ Timetable has violations".red().bold());
        for v in &validation.violations {
            println!("  - {}: {}", v.constraint.red(), v.message);
        }
    }

    if verbose {
        println!("\n{}", "Soft Constraint Costs:".bold());
        for score in &validation.soft_scores {
            println!("  {}: {}", score.constraint, score.cost);
        }
    }

    println!("\nTotal cost: {}", validation.total_cost);

    Ok(())
}

fn run_report(
    timetable_path: &PathBuf,
    data: &PathBuf,
    instructor: Option<String>,
    cohort: Option<String>,
) -> Result<()> {
    let catalog = load_catalog_from_dir(data)?;
    let config = load_config_or_default(&data.join("config.toml"));
    let (sessions, assignments) = load_rows_as_solution(timetable_path, &catalog)?;

    let outcome = SolveOutcome {
        assignments,
        sessions,
        metadata: timetable_solver::types::SolveMetadata {
            generated_at: chrono::Utc::now(),
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
            nodes_explored: 0,
            backtracking_time_ms: 0,
            annealing_time_ms: 0,
            final_cost: 0,
        },
        warnings: Default::default(),
    };

    if let Some(instructor_id) = instructor {
        let id = InstructorId(instructor_id);
        match generate_instructor_schedule(&catalog, &outcome, &id) {
            Some(report) => println!("{}", report),
            None => println!("Instructor not found"),
        }
    } else if let Some(cohort) = cohort {
        let (department, level) = cohort
            .split_once('/')
            .context("cohort must be formatted as DEPT/LEVEL")?;
        println!("{}", generate_level_schedule(&catalog, &outcome, department, level));
    } else {
        let validation = validate_solution(&catalog, &outcome.sessions, &outcome.assignments, &config);
        print_summary(&outcome, &validation);
    }

    Ok(())
}

/// Loads a previously-saved `timetable.json` (a `Vec<ResultRow>`) and
/// rehydrates the sessions/assignments needed to re-run validation. Since
/// `ResultRow` is a flattened projection, sessions are reconstructed
/// one-to-one per row rather than recovering the original grouping.
fn load_rows_as_solution(
    timetable_path: &PathBuf,
    catalog: &Catalog,
) -> Result<(Vec<timetable_solver::types::Session>, Vec<timetable_solver::types::Assignment>)> {
    use timetable_solver::types::{Assignment, CourseId, Domain, InstructorId, RoomId, SectionId, Session, SessionId, SessionKind};

    let content = std::fs::read_to_string(timetable_path)
        .with_context(|| format!("failed to read {}", timetable_path.display()))?;
    let rows: Vec<timetable_solver::scheduler::ResultRow> = serde_json::from_str(&content)
        .context("expected a timetable.json produced by `solve`")?;

    let mut sessions = Vec::with_capacity(rows.len());
    let mut assignments = Vec::with_capacity(rows.len());

    for (idx, row) in rows.iter().enumerate() {
        let time_sequence: Vec<_> = catalog
            .time_slots
            .iter()
            .filter(|t| t.day == row.day && t.start.to_string() == row.start_time)
            .map(|t| t.id)
            .collect();

        let kind = if row.kind == "Lab" { SessionKind::Lab } else { SessionKind::Lecture };
        let sections = row
            .sections
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| SectionId(s.to_string()))
            .collect::<Vec<_>>();

        let session_id = SessionId(idx as u64);
        sessions.push(Session {
            id: session_id,
            course_id: CourseId(row.course_id.clone()),
            kind,
            duration_slots: time_sequence.len().max(1) as u32,
            sections,
            total_students: row.student_count,
            is_small_group: false,
            preferred_instructors: Default::default(),
            domain: Domain::default(),
        });

        assignments.push(Assignment {
            session_id,
            time_sequence,
            room: RoomId(row.room.clone()),
            instructor: InstructorId(row.instructor.clone()),
        });
    }

    Ok((sessions, assignments))
}

fn parse_formats(format: &str) -> Vec<OutputFormat> {
    if format == "all" {
        return vec![OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Text];
    }

    format
        .split(',')
        .filter_map(|f| match f.trim().to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            "text" | "txt" => Some(OutputFormat::Text),
            _ => None,
        })
        .collect()
}

fn create_demo_data(path: &PathBuf) -> Result<()> {
    std::fs::create_dir_all(path)?;

    let courses = serde_json::json!([
        {"CourseID": "cs101", "CourseName": "Intro to Programming", "Lecture": 2, "Lab": 2, "Lab_Type": "Computer"},
        {"CourseID": "cs201", "CourseName": "Data Structures", "Lecture": 2, "Lab": 2, "Lab_Type": "Computer"},
        {"CourseID": "math101", "CourseName": "Calculus I", "Lecture": 3, "Lab": 0, "Lab_Type": null},
        {"CourseID": "phys101", "CourseName": "Physics I", "Lecture": 2, "Lab": 1, "Lab_Type": "Science Lab"}
    ]);
    std::fs::write(path.join("courses.json"), serde_json::to_string_pretty(&courses)?)?;

    let rooms = serde_json::json!([
        {"RoomID": "A101", "Capacity": 60, "Type": "Lecture", "Type_of_Space": "Standard"},
        {"RoomID": "A102", "Capacity": 40, "Type": "Lecture", "Type_of_Space": "Standard"},
        {"RoomID": "B201 Computer Lab", "Capacity": 30, "Type": "Lab", "Type_of_Space": "Computer"},
        {"RoomID": "C301 Science Lab", "Capacity": 24, "Type": "Lab", "Type_of_Space": "Science Lab"}
    ]);
    std::fs::write(path.join("rooms.json"), serde_json::to_string_pretty(&rooms)?)?;

    let instructors = serde_json::json!([
        {"InstructorID": "i001", "Name": "Dr. Amin", "QualifiedCourses": ["cs101", "cs201"], "Not_PreferredSlots": []},
        {"InstructorID": "i002", "Name": "Dr. Nasser", "QualifiedCourses": ["math101"], "Not_PreferredSlots": []},
        {"InstructorID": "i003", "Name": "Dr. Saleh", "QualifiedCourses": ["phys101"], "Not_PreferredSlots": []}
    ]);
    std::fs::write(path.join("instructors.json"), serde_json::to_string_pretty(&instructors)?)?;

    let timeslots = serde_json::json!([
        {"ID": 1, "Day": "Sunday", "StartTime": "9:00", "EndTime": "10:00"},
        {"ID": 2, "Day": "Sunday", "StartTime": "10:00", "EndTime": "11:00"},
        {"ID": 3, "Day": "Sunday", "StartTime": "11:00", "EndTime": "12:00"},
        {"ID": 4, "Day": "Monday", "StartTime": "9:00", "EndTime": "10:00"},
        {"ID": 5, "Day": "Monday", "StartTime": "10:00", "EndTime": "11:00"},
        {"ID": 6, "Day": "Monday", "StartTime": "11:00", "EndTime": "12:00"},
        {"ID": 7, "Day": "Tuesday", "StartTime": "9:00", "EndTime": "10:00"},
        {"ID": 8, "Day": "Tuesday", "StartTime": "10:00", "EndTime": "11:00"},
        {"ID": 9, "Day": "Wednesday", "StartTime": "9:00", "EndTime": "10:00"},
        {"ID": 10, "Day": "Wednesday", "StartTime": "10:00", "EndTime": "11:00"}
    ]);
    std::fs::write(path.join("timeslots.json"), serde_json::to_string_pretty(&timeslots)?)?;

    let sections = serde_json::json!([
        {"SectionID": "cs-1-a", "Department": "CS", "Level": "1", "Specialization": "General", "StudentCount": 35},
        {"SectionID": "cs-1-b", "Department": "CS", "Level": "1", "Specialization": "General", "StudentCount": 30},
        {"SectionID": "math-1-a", "Department": "Math", "Level": "1", "Specialization": "General", "StudentCount": 40}
    ]);
    std::fs::write(path.join("sections.json"), serde_json::to_string_pretty(&sections)?)?;

    let offerings = serde_json::json!([
        {"Department": "CS", "Level": "1", "Specialization": "General", "CourseID": "cs101", "preferred_Prof": "i001", "preferred_Assi": []},
        {"Department": "CS", "Level": "1", "Specialization": "General", "CourseID": "cs201", "preferred_Prof": "i001", "preferred_Assi": []},
        {"Department": "Math", "Level": "1", "Specialization": "General", "CourseID": "math101", "preferred_Prof": "i002", "preferred_Assi": []}
    ]);
    std::fs::write(path.join("offerings.json"), serde_json::to_string_pretty(&offerings)?)?;

    println!("{}", "Demo data created successfully!".green());
    Ok(())
}
