pub mod annealing;
pub mod backtracking;
pub mod cost;
pub mod domain_builder;
pub mod emitter;
pub mod state;
pub mod variable_builder;

pub use annealing::{AnnealingOptimizer, ProgressSnapshot};
pub use backtracking::BacktrackingSolver;
pub use cost::CostEvaluator;
pub use emitter::{to_rows, ResultRow};
pub use state::State;
pub use variable_builder::{BuildWarnings, VariableBuilder};

use crate::error::{Result, SolverError};
use crate::types::{Assignment, Catalog, Session, SessionId, SolveMetadata};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::time::Instant;

/// Warnings accumulated across the full pipeline, returned alongside the
/// solution rather than elevated to errors (§7 propagation policy).
#[derive(Debug, Default)]
pub struct SolveWarnings {
    pub messages: Vec<String>,
}

pub struct SolveOutcome {
    pub assignments: Vec<Assignment>,
    pub sessions: Vec<Session>,
    pub metadata: SolveMetadata,
    pub warnings: SolveWarnings,
}

/// Runs the full C1 → C2 → C3 → C5 → C7 → C8 pipeline. Mirrors the
/// teacher's phase-by-phase progress bar, generalized from five ILP phases
/// to variable-build → domain-build → backtracking → annealing.
pub fn generate_timetable(catalog: &Catalog, config: &crate::types::SolverConfig, quiet: bool) -> Result<SolveOutcome> {
    config.validate()?;
    let start = Instant::now();

    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(100);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}% {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    };

    progress.set_message("Building sessions...");
    progress.set_position(5);
    let mut builder = VariableBuilder::new();
    let (mut sessions, build_warnings) = builder.build(catalog, config.max_group_capacity);
    let mut warnings = SolveWarnings {
        messages: build_warnings.messages,
    };

    progress.set_message("Computing domains...");
    progress.set_position(15);
    let domain_result = domain_builder::build_domains(catalog, &mut sessions, config);
    warnings.messages.extend(domain_result.fallback_warnings);

    for session in &sessions {
        let empties = domain_builder::empty_coordinates(&session.domain);
        if let Some(coordinate) = empties.first() {
            return Err(SolverError::EmptyDomain {
                session_id: session.id.to_string(),
                coordinate,
            });
        }
    }

    progress.set_message("Backtracking search...");
    progress.set_position(30);
    let backtracking_start = Instant::now();
    let mut solver = BacktrackingSolver::new(catalog);
    let (assignments, state) = solver.solve(&sessions)?;
    let backtracking_time_ms = backtracking_start.elapsed().as_millis() as u64;

    progress.set_message("Annealing optimization...");
    progress.set_position(60);
    let annealing_start = Instant::now();
    let evaluator = CostEvaluator::new(catalog, config.weights);
    let mut optimizer = AnnealingOptimizer::new(catalog, &sessions, &evaluator, config.annealing);
    let cancel: Option<&AtomicBool> = None;
    let (best_assignments, best_cost) = optimizer.optimize(assignments, state, cancel, |snap| {
        progress.set_position(60 + (snap.iteration * 35 / snap.total_iterations.max(1)) as u64);
    });
    let annealing_time_ms = annealing_start.elapsed().as_millis() as u64;

    progress.set_message("Complete!");
    progress.set_position(100);
    progress.finish_with_message("Timetable generated successfully");

    Ok(SolveOutcome {
        assignments: best_assignments,
        sessions,
        metadata: SolveMetadata {
            generated_at: chrono::Utc::now(),
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
            nodes_explored: solver.nodes_explored(),
            backtracking_time_ms,
            annealing_time_ms,
            final_cost: best_cost,
        },
        warnings,
    })
}

pub fn sessions_by_id(sessions: &[Session]) -> HashMap<SessionId, Session> {
    sessions.iter().cloned().map(|s| (s.id, s)).collect()
}
