//! Day editing
//!
//! An [`EditSession`] stages a copy of one day. Nothing reaches the store
//! until [`EditSession::commit`], which re-checks the staged day against
//! the store's current plan before replacing it.

use crate::error::EditError;
use crate::state::GymStore;
use gym_planner_shared::{ActivePlan, DaySchedule, Exercise, PlanIssue};
use std::collections::HashSet;
use tracing::info;

/// Field changes for one exercise; `None` leaves a field as it is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseEdit {
    pub name: Option<String>,
    pub sets: Option<u32>,
    pub reps: Option<String>,
    pub rest_sec: Option<u32>,
    pub tips: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EditSession {
    original: DaySchedule,
    day_name: String,
    exercises: Vec<Exercise>,
    /// Exercise ids used by the other days when the session was opened
    reserved_ids: HashSet<String>,
    next_custom: u64,
}

impl EditSession {
    /// Stage the first day named `day`
    pub fn open(plan: &ActivePlan, day: &str) -> Result<Self, EditError> {
        let original = plan
            .day(day)
            .cloned()
            .ok_or_else(|| EditError::DayNotFound(day.to_string()))?;
        let reserved_ids = plan
            .exercises()
            .map(|e| e.id.clone())
            .filter(|id| original.exercise(id).is_none())
            .collect();
        Ok(Self {
            day_name: original.day.clone(),
            exercises: original.exercises.clone(),
            original,
            reserved_ids,
            next_custom: 1,
        })
    }

    /// Name of the day being edited, as it is in the store
    pub fn original_day(&self) -> &str {
        &self.original.day
    }

    pub fn day_name(&self) -> &str {
        &self.day_name
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn rename_day(&mut self, name: impl Into<String>) {
        self.day_name = name.into();
    }

    pub fn update_exercise(&mut self, id: &str, edit: ExerciseEdit) -> Result<(), EditError> {
        if edit.sets == Some(0) {
            return Err(EditError::InvalidExercise(PlanIssue::NoSets(id.to_string())));
        }
        if edit.rest_sec == Some(0) {
            return Err(EditError::InvalidExercise(PlanIssue::NoRest(id.to_string())));
        }
        let exercise = self
            .exercises
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| EditError::UnknownExercise(id.to_string()))?;
        if let Some(name) = edit.name {
            exercise.name = name;
        }
        if let Some(sets) = edit.sets {
            exercise.sets = sets;
        }
        if let Some(reps) = edit.reps {
            exercise.reps = reps;
        }
        if let Some(rest_sec) = edit.rest_sec {
            exercise.rest_sec = rest_sec;
        }
        if let Some(tips) = edit.tips {
            exercise.tips = tips;
        }
        Ok(())
    }

    /// Append a template exercise with an id unused anywhere in the plan
    pub fn add_exercise(&mut self) -> &Exercise {
        let id = loop {
            let candidate = format!("custom_{}", self.next_custom);
            self.next_custom += 1;
            if !self.is_id_taken(&candidate) {
                break candidate;
            }
        };
        self.exercises.push(Exercise {
            id,
            name: "New Exercise".to_string(),
            sets: 3,
            reps: "10-12".to_string(),
            rest_sec: 60,
            tips: "Added manually".to_string(),
        });
        &self.exercises[self.exercises.len() - 1]
    }

    pub fn remove_exercise(&mut self, id: &str) -> Result<Exercise, EditError> {
        let pos = self
            .exercises
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| EditError::UnknownExercise(id.to_string()))?;
        Ok(self.exercises.remove(pos))
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.day_name != self.original.day || self.exercises != self.original.exercises
    }

    /// The day as it would be written
    pub fn staged(&self) -> DaySchedule {
        DaySchedule {
            day: self.day_name.trim().to_string(),
            title: self.original.title.clone(),
            exercises: self.exercises.clone(),
        }
    }

    /// Validate the staged day against the store's current plan and write it
    pub fn commit(self, store: &mut GymStore) -> Result<DaySchedule, EditError> {
        let staged = self.staged();
        let plan = store.active_plan().ok_or(EditError::NoActivePlan)?;
        check_commit(plan, &self.original.day, &staged)?;

        if !store.update_day_schedule(&self.original.day, staged.clone()) {
            return Err(EditError::DayNotFound(self.original.day));
        }
        info!(
            day = %self.original.day,
            renamed_to = %staged.day,
            exercises = staged.exercises.len(),
            "Saved day edits"
        );
        Ok(staged)
    }

    fn is_id_taken(&self, id: &str) -> bool {
        self.reserved_ids.contains(id) || self.exercises.iter().any(|e| e.id == id)
    }
}

fn check_commit(plan: &ActivePlan, original: &str, staged: &DaySchedule) -> Result<(), EditError> {
    if staged.exercises.is_empty() {
        return Err(EditError::NoExercises);
    }
    if staged.day.is_empty() {
        return Err(EditError::EmptyDayName);
    }
    if plan.day(original).is_none() {
        return Err(EditError::DayNotFound(original.to_string()));
    }
    if staged.day != original && plan.day(&staged.day).is_some() {
        return Err(EditError::DayNameTaken(staged.day.clone()));
    }

    // The first day named `original` is the one being replaced
    let replaced = plan.week_schedule.iter().position(|d| d.day == original);
    let mut seen: HashSet<&str> = plan
        .week_schedule
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != replaced)
        .flat_map(|(_, d)| d.exercises.iter().map(|e| e.id.as_str()))
        .collect();
    for exercise in &staged.exercises {
        if exercise.sets == 0 {
            return Err(EditError::InvalidExercise(PlanIssue::NoSets(
                exercise.id.clone(),
            )));
        }
        if exercise.rest_sec == 0 {
            return Err(EditError::InvalidExercise(PlanIssue::NoRest(
                exercise.id.clone(),
            )));
        }
        if !seen.insert(exercise.id.as_str()) {
            return Err(EditError::DuplicateExerciseId(exercise.id.clone()));
        }
    }
    Ok(())
}
