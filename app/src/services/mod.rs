//! Screen-level flows on top of the store
//!
//! Each service drives [`crate::state::GymStore`] the way one screen of the
//! app does: onboarding, plan generation, day editing, the active workout
//! with its rest timer, and settings.

pub mod editor;
pub mod onboarding;
pub mod planning;
pub mod rest_timer;
pub mod settings;
pub mod workout;

pub use editor::{EditSession, ExerciseEdit};
pub use onboarding::{OnboardingDraft, OnboardingStep};
pub use planning::{PendingPlan, PlanOutcome, PlanRequest, PlanRequests, RequestToken};
pub use rest_timer::{RestTimer, TimerState};
pub use workout::{ActiveWorkout, SetToggle};
