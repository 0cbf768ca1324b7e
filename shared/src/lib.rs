//! Gym Planner Shared Library
//!
//! This crate contains the domain model (profile, weekly plan, set progress,
//! language), the pure snapshot reducer, and validation used by the app and
//! the WASM bindings. It performs no I/O.

pub mod errors;
pub mod language;
pub mod models;
pub mod plan;
pub mod progress;
pub mod snapshot;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use language::Language;
pub use models::{Gender, Goal, StressLevel, UserProfile};
pub use plan::{ActivePlan, DaySchedule, DayStatus, Exercise};
pub use progress::WorkoutProgress;
pub use snapshot::{Action, Phase, Snapshot};
