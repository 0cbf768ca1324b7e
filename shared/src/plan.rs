//! Weekly workout plan model
//!
//! An [`ActivePlan`] is an ordered week of [`DaySchedule`]s, each holding an
//! ordered list of [`Exercise`]s. Day names are the lookup key for a day and
//! exercise ids are expected to be unique across the whole week; neither is
//! enforced structurally (see `validation::audit_plan`).

use crate::language::Language;
use crate::progress::WorkoutProgress;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One prescribed exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub sets: u32,
    /// Free-form repetition target, e.g. "8-10"
    pub reps: String,
    /// Rest between sets, in seconds
    pub rest_sec: u32,
    #[serde(default)]
    pub tips: String,
}

impl Exercise {
    pub fn rest(&self) -> Duration {
        Duration::from_secs(u64::from(self.rest_sec))
    }
}

/// Progress state of a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    NotStarted,
    InProgress,
    Complete,
}

/// One training day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    /// Day label, e.g. "Monday" (or its translation); unique within a plan
    pub day: String,
    /// Free title such as "Day 1: Chest & Triceps"
    pub title: String,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl DaySchedule {
    pub fn exercise(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    /// Muscle-group tags parsed from the title.
    ///
    /// A leading `Day N:` is dropped, then the rest is split on `,`, `&`,
    /// `+` and the word `and`.
    pub fn muscle_groups(&self) -> Vec<String> {
        strip_day_prefix(self.title.trim())
            .split([',', '&', '+'])
            .flat_map(split_on_and)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Whether every exercise has exactly its prescribed number of sets done.
    /// A day without exercises is never complete.
    pub fn is_complete(&self, progress: &WorkoutProgress) -> bool {
        !self.exercises.is_empty()
            && self
                .exercises
                .iter()
                .all(|e| progress.completed_count(&e.id) == e.sets as usize)
    }

    pub fn status(&self, progress: &WorkoutProgress) -> DayStatus {
        if self.is_complete(progress) {
            DayStatus::Complete
        } else if self
            .exercises
            .iter()
            .any(|e| progress.completed_count(&e.id) > 0)
        {
            DayStatus::InProgress
        } else {
            DayStatus::NotStarted
        }
    }
}

fn strip_day_prefix(title: &str) -> &str {
    let Some((head, rest)) = title.split_once(':') else {
        return title;
    };
    let mut words = head.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some(label), Some(number), None)
            if label.eq_ignore_ascii_case("day")
                && number.chars().all(|c| c.is_ascii_digit()) =>
        {
            rest
        }
        _ => title,
    }
}

fn split_on_and(part: &str) -> Vec<String> {
    let mut groups = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for word in part.split_whitespace() {
        if word.eq_ignore_ascii_case("and") {
            groups.push(current.join(" "));
            current.clear();
        } else {
            current.push(word);
        }
    }
    groups.push(current.join(" "));
    groups
}

/// The user's active weekly plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActivePlan {
    pub week_schedule: Vec<DaySchedule>,
}

impl ActivePlan {
    /// First day whose name equals `name`
    pub fn day(&self, name: &str) -> Option<&DaySchedule> {
        self.week_schedule.iter().find(|d| d.day == name)
    }

    /// The day scheduled for `weekday`, matched on the localised weekday name
    pub fn today(&self, language: Language, weekday: Weekday) -> Option<&DaySchedule> {
        self.day(language.weekday_name(weekday))
    }

    pub fn exercises(&self) -> impl Iterator<Item = &Exercise> {
        self.week_schedule.iter().flat_map(|d| d.exercises.iter())
    }

    pub fn find_exercise(&self, id: &str) -> Option<&Exercise> {
        self.exercises().find(|e| e.id == id)
    }

    pub fn contains_exercise(&self, id: &str) -> bool {
        self.find_exercise(id).is_some()
    }
}
