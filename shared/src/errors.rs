//! Error types for the Gym Planner domain

use crate::validation::ValidationError;
use thiserror::Error;

/// A profile failed validation on one or more fields
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid profile: {}", join_messages(.0))]
pub struct ProfileError(pub Vec<ValidationError>);

impl ProfileError {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Whether `field` (technical name) is among the failures
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ValidationError::user_message)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Structural problems found by `validation::audit_plan`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanIssue {
    #[error("Plan has no days")]
    EmptyPlan,

    #[error("Day name '{0}' appears more than once")]
    DuplicateDay(String),

    #[error("Exercise id '{0}' appears more than once")]
    DuplicateExerciseId(String),

    #[error("Day '{0}' has no exercises")]
    EmptyDay(String),

    #[error("Exercise '{0}' must have at least one set")]
    NoSets(String),

    #[error("Exercise '{0}' must have a positive rest period")]
    NoRest(String),
}
