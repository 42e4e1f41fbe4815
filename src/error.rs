use thiserror::Error;

/// Domain-specific errors for the solver core. Each variant is a distinct
/// tag so callers can branch on failure kind rather than parsing messages.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in '{file}': {message}")]
    JsonParse { file: String, message: String },

    /// Malformed input tables: missing courses, non-positive capacity, bad
    /// durations. Detected pre-solve; aborts.
    #[error("catalog validation failed: {message}")]
    CatalogValidation { message: String },

    /// A session has no admissible time sequences, rooms, or instructors.
    #[error("session {session_id} has an empty domain ({coordinate})")]
    EmptyDomain {
        session_id: String,
        coordinate: &'static str,
    },

    /// Backtracking exhausted the search tree.
    #[error("no feasible solution found after exploring {nodes_explored} nodes")]
    Infeasible { nodes_explored: u64 },

    /// Negative weight, non-positive iterations, cooling_rate outside
    /// (0,1). Rejected at optimizer construction.
    #[error("invalid solver configuration: {message}")]
    InvalidConfiguration { message: String },

    /// A consistency check failed that should be impossible given the data
    /// model's invariants. Indicates a bug, not a recoverable condition.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;
