//! Application snapshot and its reducer
//!
//! A [`Snapshot`] is the complete value of language, profile, plan and
//! progress at one point in time. Every mutation is expressed as an
//! [`Action`] and applied by [`Snapshot::apply`], which consumes the old
//! snapshot and returns the new one. The reducer never fails: actions whose
//! precondition is missing (e.g. editing a day without a plan) return the
//! snapshot unchanged.

use crate::language::Language;
use crate::models::UserProfile;
use crate::plan::{ActivePlan, DaySchedule};
use crate::progress::WorkoutProgress;
use serde::{Deserialize, Serialize};

/// Coarse lifecycle phase of the whole snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No profile yet (fresh install or after a reset)
    Unonboarded,
    /// Profile and plan are both present
    Active,
}

/// A state transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    SetLanguage {
        language: Language,
    },
    SetUserProfile {
        profile: UserProfile,
    },
    SetActivePlan {
        plan: ActivePlan,
    },
    /// Replace the first day named `day` with `schedule`
    UpdateDaySchedule {
        day: String,
        schedule: DaySchedule,
    },
    ToggleSetComplete {
        exercise_id: String,
        set_index: u32,
    },
    /// Clear profile, plan and progress; keep the language
    Reset,
}

impl Action {
    /// Stable name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetLanguage { .. } => "set_language",
            Action::SetUserProfile { .. } => "set_user_profile",
            Action::SetActivePlan { .. } => "set_active_plan",
            Action::UpdateDaySchedule { .. } => "update_day_schedule",
            Action::ToggleSetComplete { .. } => "toggle_set_complete",
            Action::Reset => "reset",
        }
    }
}

/// The complete persisted application state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub language: Language,
    pub user_profile: Option<UserProfile>,
    pub active_plan: Option<ActivePlan>,
    #[serde(default)]
    pub workout_progress: WorkoutProgress,
}

impl Snapshot {
    /// Empty snapshot for a fresh install
    pub fn initial(language: Language) -> Self {
        Self {
            language,
            user_profile: None,
            active_plan: None,
            workout_progress: WorkoutProgress::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        match (&self.user_profile, &self.active_plan) {
            (Some(_), Some(_)) => Phase::Active,
            _ => Phase::Unonboarded,
        }
    }

    /// Whether `UpdateDaySchedule { day, .. }` would replace a day
    pub fn has_day(&self, day: &str) -> bool {
        self.active_plan
            .as_ref()
            .is_some_and(|plan| plan.day(day).is_some())
    }

    /// Apply one action, producing the next snapshot
    pub fn apply(self, action: Action) -> Snapshot {
        match action {
            Action::SetLanguage { language } => Snapshot { language, ..self },
            Action::SetUserProfile { profile } => Snapshot {
                user_profile: Some(profile),
                ..self
            },
            Action::SetActivePlan { plan } => Snapshot {
                active_plan: Some(plan),
                ..self
            },
            Action::UpdateDaySchedule { day, schedule } => self.replace_day(&day, schedule),
            Action::ToggleSetComplete {
                exercise_id,
                set_index,
            } => {
                let mut workout_progress = self.workout_progress;
                workout_progress.toggle(&exercise_id, set_index);
                Snapshot {
                    workout_progress,
                    ..self
                }
            }
            Action::Reset => Snapshot::initial(self.language),
        }
    }

    fn replace_day(mut self, day: &str, schedule: DaySchedule) -> Snapshot {
        if let Some(plan) = self.active_plan.as_mut() {
            if let Some(slot) = plan.week_schedule.iter_mut().find(|d| d.day == day) {
                *slot = schedule;
            }
        }
        self
    }
}
