//! University timetable generator
//!
//! This library assigns course sessions to time slots, rooms, and
//! instructors using a two-phase solver.
//!
//! # Algorithm Overview
//!
//! The solver works in two phases:
//! 1. **Backtracking search**: a feasible assignment is found via
//!    depth-first search over statically MRV-ordered sessions, each
//!    tried against a precomputed domain of admissible (time, room,
//!    instructor) triples.
//! 2. **Simulated annealing**: the feasible solution is perturbed with
//!    swap/move neighbors and improved against a weighted soft-cost
//!    function (bad-time, building-change, gap, and daily-load
//!    penalties), accepting worse moves under a cooling Metropolis
//!    criterion.
//!
//! # Example
//!
//! ```no_run
//! use timetable_solver::parser::load_catalog_from_dir;
//! use timetable_solver::scheduler::generate_timetable;
//! use timetable_solver::types::SolverConfig;
//! use timetable_solver::validator::validate_solution;
//! use std::path::Path;
//!
//! let catalog = load_catalog_from_dir(Path::new("./data/demo")).unwrap();
//! let config = SolverConfig::default();
//! let outcome = generate_timetable(&catalog, &config, false).unwrap();
//! let validation = validate_solution(&catalog, &outcome.sessions, &outcome.assignments, &config);
//! println!("Final cost: {}", validation.total_cost);
//! ```

pub mod error;
pub mod parser;
pub mod reporter;
pub mod scheduler;
pub mod types;
pub mod validator;

pub use error::{Result, SolverError};
