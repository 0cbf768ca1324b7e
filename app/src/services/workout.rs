//! Active workout view over one day

use crate::state::GymStore;
use chrono::Weekday;
use gym_planner_shared::DaySchedule;
use std::time::Duration;

/// Result of tapping a set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetToggle {
    /// Whether the set is now marked done
    pub completed: bool,
    /// Rest to start, present only when the set was just completed
    pub rest: Option<Duration>,
}

/// One day's workout, addressed by day name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveWorkout {
    day: String,
}

impl ActiveWorkout {
    /// Open the first day named `day`, if the plan has one
    pub fn for_day(store: &GymStore, day: &str) -> Option<Self> {
        store.active_plan()?.day(day)?;
        Some(Self {
            day: day.to_string(),
        })
    }

    /// Open the day matching `weekday` in the store's language
    pub fn today(store: &GymStore, weekday: Weekday) -> Option<Self> {
        let schedule = store.active_plan()?.today(store.language(), weekday)?;
        Some(Self {
            day: schedule.day.clone(),
        })
    }

    pub fn day_name(&self) -> &str {
        &self.day
    }

    pub fn schedule<'a>(&self, store: &'a GymStore) -> Option<&'a DaySchedule> {
        store.active_plan()?.day(&self.day)
    }

    pub fn toggle_set(&self, store: &mut GymStore, exercise_id: &str, set_index: u32) -> SetToggle {
        let rest = self
            .schedule(store)
            .and_then(|day| day.exercise(exercise_id))
            .map(|exercise| exercise.rest());
        let completed = store.toggle_set_complete(exercise_id, set_index);
        SetToggle {
            completed,
            rest: rest.filter(|_| completed),
        }
    }

    pub fn completed_sets(&self, store: &GymStore, exercise_id: &str) -> Vec<u32> {
        store.progress().completed_sets(exercise_id)
    }

    /// Every exercise has exactly its prescribed sets done; an empty day never is
    pub fn is_complete(&self, store: &GymStore) -> bool {
        self.schedule(store)
            .is_some_and(|day| day.is_complete(store.progress()))
    }
}
