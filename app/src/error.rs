//! Application error handling
//!
//! Store mutations never fail; these types cover the edges around the
//! store: persistence adapters, plan generation, and the edit flow.

use gym_planner_shared::{PlanIssue, ProfileError};
use thiserror::Error;

/// Persistence adapter and document codec errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored document is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Stored document version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Write-behind worker is not running")]
    WorkerStopped,

    #[error("Background write of '{key}' failed: {reason}")]
    WriteFailed { key: String, reason: String },
}

/// Plan generation failed.
///
/// Deliberately opaque: network failures, service errors and unparseable
/// responses all surface as the same error. The cause is kept only for logs.
#[derive(Error, Debug)]
#[error("Failed to generate plan. Please check your API key and try again.")]
pub struct GenerationError {
    detail: String,
}

impl GenerationError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    /// Underlying cause, for logging only
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

/// Reasons an edit session refuses to commit
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("You must have at least one exercise.")]
    NoExercises,

    #[error("Day name cannot be empty")]
    EmptyDayName,

    #[error("Another day is already named '{0}'")]
    DayNameTaken(String),

    #[error("Exercise id '{0}' is already used elsewhere in the plan")]
    DuplicateExerciseId(String),

    #[error("No active plan")]
    NoActivePlan,

    #[error("Day '{0}' is no longer in the plan")]
    DayNotFound(String),

    #[error("Exercise '{0}' is not in this day")]
    UnknownExercise(String),

    #[error("Invalid exercise: {0}")]
    InvalidExercise(PlanIssue),
}

/// Top-level error for services and the binary
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error("Not onboarded yet")]
    NotOnboarded,
}

/// Result type alias for app services
pub type AppResult<T> = Result<T, AppError>;
