//! Per-exercise set completion tracking

use crate::plan::ActivePlan;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Completed set indices keyed by exercise id.
///
/// Entries are never purged implicitly: an entry whose exercise disappears
/// from the plan simply becomes unreachable. An entry whose last set was
/// un-toggled stays in the map with an empty set, and equality treats such
/// an entry the same as an absent one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutProgress(BTreeMap<String, BTreeSet<u32>>);

impl WorkoutProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `set_index` for `exercise_id`.
    ///
    /// Returns `true` when the set is now marked complete.
    pub fn toggle(&mut self, exercise_id: &str, set_index: u32) -> bool {
        let sets = self.0.entry(exercise_id.to_string()).or_default();
        if sets.remove(&set_index) {
            false
        } else {
            sets.insert(set_index);
            true
        }
    }

    pub fn is_completed(&self, exercise_id: &str, set_index: u32) -> bool {
        self.0
            .get(exercise_id)
            .is_some_and(|sets| sets.contains(&set_index))
    }

    /// Completed set indices for an exercise, ascending. Unknown ids have none.
    pub fn completed_sets(&self, exercise_id: &str) -> Vec<u32> {
        self.0
            .get(exercise_id)
            .map(|sets| sets.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn completed_count(&self, exercise_id: &str) -> usize {
        self.0.get(exercise_id).map_or(0, BTreeSet::len)
    }

    /// Raw entry for an exercise, including entries whose set is empty
    pub fn entry(&self, exercise_id: &str) -> Option<&BTreeSet<u32>> {
        self.0.get(exercise_id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeSet::is_empty)
    }

    /// Number of stored entries, empty ones included
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn exercise_ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Ids with recorded progress that no longer exist in `plan`
    pub fn orphaned_ids<'a>(&'a self, plan: &'a ActivePlan) -> impl Iterator<Item = &'a str> {
        self.exercise_ids()
            .filter(move |id| !plan.contains_exercise(id))
    }

    /// Drop entries whose exercise is not in `plan`. Returns how many were removed.
    ///
    /// The store never calls this; plan replacement keeps orphaned progress.
    pub fn retain_exercises(&mut self, plan: &ActivePlan) -> usize {
        let before = self.0.len();
        self.0.retain(|id, _| plan.contains_exercise(id));
        before - self.0.len()
    }

    fn non_empty(&self) -> impl Iterator<Item = (&String, &BTreeSet<u32>)> {
        self.0.iter().filter(|(_, sets)| !sets.is_empty())
    }
}

impl PartialEq for WorkoutProgress {
    fn eq(&self, other: &Self) -> bool {
        self.non_empty().eq(other.non_empty())
    }
}

impl Eq for WorkoutProgress {}

impl<I, S> FromIterator<(S, I)> for WorkoutProgress
where
    S: Into<String>,
    I: IntoIterator<Item = u32>,
{
    fn from_iter<T: IntoIterator<Item = (S, I)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(id, sets)| (id.into(), sets.into_iter().collect()))
                .collect(),
        )
    }
}
