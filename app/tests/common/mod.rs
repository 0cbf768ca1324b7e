//! Common test utilities for integration tests
//!
//! In-memory storage, a scripted plan generator, and profile/plan fixtures.

#![allow(dead_code)]

use async_trait::async_trait;
use fake::faker::name::en::FirstName;
use fake::Fake;
use gym_planner_app::error::GenerationError;
use gym_planner_app::generator::PlanGenerator;
use gym_planner_app::state::GymStore;
use gym_planner_app::storage::MemoryStore;
use gym_planner_shared::{
    ActivePlan, DaySchedule, Exercise, Gender, Goal, Language, StressLevel, UserProfile,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const KEY: &str = "gym-storage";

/// One scripted response, optionally delayed
pub struct Scripted {
    pub delay: Duration,
    pub result: Result<ActivePlan, GenerationError>,
}

/// Generator that replays queued responses in call order
#[derive(Default)]
pub struct ScriptedGenerator {
    responses: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<(UserProfile, Language)>>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn returning(plan: ActivePlan) -> Self {
        let generator = Self::new();
        generator.push(Duration::ZERO, Ok(plan));
        generator
    }

    pub fn failing(detail: &str) -> Self {
        let generator = Self::new();
        generator.push(Duration::ZERO, Err(GenerationError::new(detail)));
        generator
    }

    pub fn push(&self, delay: Duration, result: Result<ActivePlan, GenerationError>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Scripted { delay, result });
    }

    pub fn calls(&self) -> Vec<(UserProfile, Language)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlanGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        profile: &UserProfile,
        language: Language,
    ) -> Result<ActivePlan, GenerationError> {
        self.calls.lock().unwrap().push((profile.clone(), language));
        let next = self.responses.lock().unwrap().pop_front();
        let Some(scripted) = next else {
            return Err(GenerationError::new("no scripted response left"));
        };
        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }
        scripted.result
    }
}

pub fn open_store(memory: &MemoryStore, locale: Option<&str>) -> GymStore {
    GymStore::open(Arc::new(memory.clone()), KEY, locale)
}

pub fn sample_profile() -> UserProfile {
    UserProfile {
        name: FirstName().fake(),
        birth_year: 1994,
        height_cm: 176.0,
        weight_kg: 74.0,
        goal: Goal::Muscle,
        days: 3,
        gender: Gender::Male,
        focus_areas: vec!["Arms".to_string()],
        water_intake: "2L".to_string(),
        sleep_hours: 7.5,
        stress_level: StressLevel::Medium,
        diet_type: "Omnivore".to_string(),
        bad_habits: vec![],
        experience_years: 4,
        other_activities: "Cycling".to_string(),
        other_sports_frequency: 1,
    }
}

pub fn exercise(id: &str, sets: u32, rest_sec: u32) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: format!("Exercise {id}"),
        sets,
        reps: "8-12".to_string(),
        rest_sec,
        tips: String::new(),
    }
}

/// Plan with one day per name; day N holds exercises `dN_e1` and `dN_e2`
pub fn sample_plan(days: &[&str]) -> ActivePlan {
    ActivePlan {
        week_schedule: days
            .iter()
            .enumerate()
            .map(|(i, day)| DaySchedule {
                day: day.to_string(),
                title: format!("Day {}: Chest & Back", i + 1),
                exercises: vec![
                    exercise(&format!("d{}_e1", i + 1), 3, 90),
                    exercise(&format!("d{}_e2", i + 1), 2, 60),
                ],
            })
            .collect(),
    }
}
