//! Gym Planner WASM Module
//!
//! Exposes the snapshot reducer and the dashboard helpers to a JavaScript
//! host. Values cross the boundary as JSON strings in the same shape the
//! app persists; functions return `undefined` when an input does not parse.

use chrono::Weekday;
use gym_planner_shared::{Action, ActivePlan, DaySchedule, Language, Snapshot, WorkoutProgress};
use wasm_bindgen::prelude::*;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Fresh-install snapshot for a device locale such as "it-IT"
#[wasm_bindgen]
pub fn initial_snapshot(locale: &str) -> Option<String> {
    serde_json::to_string(&Snapshot::initial(Language::from_locale(locale))).ok()
}

/// Apply one action (`{"type": "toggle_set_complete", ...}`) to a snapshot
#[wasm_bindgen]
pub fn apply_action(snapshot_json: &str, action_json: &str) -> Option<String> {
    let snapshot: Snapshot = serde_json::from_str(snapshot_json).ok()?;
    let action: Action = serde_json::from_str(action_json).ok()?;
    serde_json::to_string(&snapshot.apply(action)).ok()
}

/// Muscle groups parsed from a day title, as a JSON array
#[wasm_bindgen]
pub fn muscle_groups(title: &str) -> Option<String> {
    let day = DaySchedule {
        day: String::new(),
        title: title.to_string(),
        exercises: Vec::new(),
    };
    serde_json::to_string(&day.muscle_groups()).ok()
}

/// "not_started", "in_progress" or "complete"
#[wasm_bindgen]
pub fn day_status(day_json: &str, progress_json: &str) -> Option<String> {
    let day: DaySchedule = serde_json::from_str(day_json).ok()?;
    let progress: WorkoutProgress = serde_json::from_str(progress_json).ok()?;
    serde_json::to_value(day.status(&progress))
        .ok()?
        .as_str()
        .map(str::to_string)
}

/// Today's day of the plan. `weekday` counts from Monday = 0.
#[wasm_bindgen]
pub fn today_schedule(plan_json: &str, language: &str, weekday: u8) -> Option<String> {
    let plan: ActivePlan = serde_json::from_str(plan_json).ok()?;
    let language: Language = language.parse().ok()?;
    let weekday = *WEEK.get(usize::from(weekday))?;
    let day = plan.today(language, weekday)?;
    serde_json::to_string(day).ok()
}

/// Drop progress entries for exercises no longer in the plan.
///
/// Opt-in for hosts that want to purge stale progress; the reducer keeps it.
#[wasm_bindgen]
pub fn prune_progress(progress_json: &str, plan_json: &str) -> Option<String> {
    let mut progress: WorkoutProgress = serde_json::from_str(progress_json).ok()?;
    let plan: ActivePlan = serde_json::from_str(plan_json).ok()?;
    progress.retain_exercises(&plan);
    serde_json::to_string(&progress).ok()
}
