//! Process-owned application store
//!
//! [`GymStore`] owns the current [`Snapshot`] and a persistence adapter.
//! Every mutation applies one [`Action`] through the shared reducer and then
//! writes the whole snapshot back under the configured key. Mutations never
//! fail: a persistence error is logged and the in-memory state stays
//! authoritative.

use crate::storage::{document, KeyValueStore};
use gym_planner_shared::{
    Action, ActivePlan, DaySchedule, Language, Phase, Snapshot, UserProfile, WorkoutProgress,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub struct GymStore {
    snapshot: Snapshot,
    storage: Arc<dyn KeyValueStore>,
    key: String,
}

impl GymStore {
    /// Rehydrate from `storage`, or start fresh in the language of `device_locale`.
    ///
    /// A stored document always wins over the device locale. A document that
    /// cannot be read or decoded is logged and treated as a fresh install.
    pub fn open(
        storage: Arc<dyn KeyValueStore>,
        key: impl Into<String>,
        device_locale: Option<&str>,
    ) -> Self {
        let key = key.into();
        let detected = Language::from_locale(device_locale.unwrap_or_default());

        let snapshot = match storage.read(&key) {
            Ok(Some(bytes)) => match document::decode(&bytes, detected) {
                Ok(snapshot) => {
                    info!(key = %key, phase = ?snapshot.phase(), "Rehydrated stored snapshot");
                    snapshot
                }
                Err(e) => {
                    error!(key = %key, error = %e, "Stored snapshot unusable, starting fresh");
                    Snapshot::initial(detected)
                }
            },
            Ok(None) => {
                info!(key = %key, language = %detected, "No stored snapshot, fresh install");
                Snapshot::initial(detected)
            }
            Err(e) => {
                error!(key = %key, error = %e, "Failed to read stored snapshot, starting fresh");
                Snapshot::initial(detected)
            }
        };

        Self {
            snapshot,
            storage,
            key,
        }
    }

    #[inline]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    #[inline]
    pub fn language(&self) -> Language {
        self.snapshot.language
    }

    #[inline]
    pub fn user_profile(&self) -> Option<&UserProfile> {
        self.snapshot.user_profile.as_ref()
    }

    #[inline]
    pub fn active_plan(&self) -> Option<&ActivePlan> {
        self.snapshot.active_plan.as_ref()
    }

    #[inline]
    pub fn progress(&self) -> &WorkoutProgress {
        &self.snapshot.workout_progress
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.snapshot.phase()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn set_language(&mut self, language: Language) {
        self.dispatch(Action::SetLanguage { language });
    }

    pub fn set_user_profile(&mut self, profile: UserProfile) {
        self.dispatch(Action::SetUserProfile { profile });
    }

    /// Replace the whole plan. Progress recorded against the old plan is kept.
    pub fn set_active_plan(&mut self, plan: ActivePlan) {
        self.dispatch(Action::SetActivePlan { plan });
    }

    /// Replace the first day named `day`. Returns whether a day was replaced;
    /// without a plan or a matching day the snapshot is left as it was.
    pub fn update_day_schedule(&mut self, day: &str, schedule: DaySchedule) -> bool {
        let replaced = self.snapshot.has_day(day);
        if !replaced {
            debug!(day, "No matching day to replace");
        }
        self.dispatch(Action::UpdateDaySchedule {
            day: day.to_string(),
            schedule,
        });
        replaced
    }

    /// Flip one set. Returns `true` when the set is now complete.
    pub fn toggle_set_complete(&mut self, exercise_id: &str, set_index: u32) -> bool {
        self.dispatch(Action::ToggleSetComplete {
            exercise_id: exercise_id.to_string(),
            set_index,
        });
        self.snapshot
            .workout_progress
            .is_completed(exercise_id, set_index)
    }

    /// Clear profile, plan and progress. The language is kept.
    pub fn reset(&mut self) {
        self.dispatch(Action::Reset);
    }

    /// Apply an action and persist the result
    pub fn dispatch(&mut self, action: Action) {
        debug!(action = action.name(), "Applying action");
        let previous = std::mem::take(&mut self.snapshot);
        self.snapshot = previous.apply(action);
        self.persist();
    }

    fn persist(&self) {
        let bytes = match document::encode(&self.snapshot) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to encode snapshot");
                return;
            }
        };
        if let Err(e) = self.storage.write(&self.key, &bytes) {
            warn!(key = %self.key, error = %e, "Failed to persist snapshot");
        }
    }
}
