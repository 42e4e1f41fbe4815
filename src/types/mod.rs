mod assignment;
mod catalog;
mod config;
mod course;
mod domain;
mod instructor;
mod offering;
mod room;
mod section;
mod session;
mod time_slot;

pub use assignment::Assignment;
pub use catalog::Catalog;
pub use config::{AnnealingParams, CostWeights, SolverConfig};
pub use course::{Course, CourseId};
pub use domain::Domain;
pub use instructor::{Instructor, InstructorId};
pub use offering::CourseOffering;
pub use room::{Room, RoomId, RoomKind};
pub use section::{Section, SectionId};
pub use session::{Session, SessionId, SessionKind};
pub use time_slot::{day_rank, NaiveTimeOfDay, SlotId, TimeSlot};

use serde::{Deserialize, Serialize};

/// Stamped onto a solved timetable: when it was produced and how the solve went.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveMetadata {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub algorithm_version: String,
    pub nodes_explored: u64,
    pub backtracking_time_ms: u64,
    pub annealing_time_ms: u64,
    pub final_cost: i64,
}
