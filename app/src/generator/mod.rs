//! Workout plan generation
//!
//! A [`PlanGenerator`] turns a profile into a weekly plan in the requested
//! language. The production implementation calls Gemini; tests script one.

pub mod gemini;
pub mod prompt;

use crate::error::GenerationError;
use async_trait::async_trait;
use gym_planner_shared::{ActivePlan, Language, UserProfile};

pub use gemini::{looks_like_api_key, GeminiPlanGenerator};

#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Produce a plan for `profile`, with all user-facing text in `language`
    async fn generate(
        &self,
        profile: &UserProfile,
        language: Language,
    ) -> Result<ActivePlan, GenerationError>;
}
