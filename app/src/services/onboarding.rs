//! Onboarding questionnaire
//!
//! Collects the profile over five steps. Only the bio step blocks on input
//! (a name is required); the full profile is validated when it is built.

use gym_planner_shared::validation::{validate_name, validate_profile, ValidationError};
use gym_planner_shared::{Gender, Goal, ProfileError, StressLevel, UserProfile};

/// Questionnaire step, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OnboardingStep {
    Bio,
    Stats,
    Lifestyle,
    Experience,
    Goals,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 5] = [
        OnboardingStep::Bio,
        OnboardingStep::Stats,
        OnboardingStep::Lifestyle,
        OnboardingStep::Experience,
        OnboardingStep::Goals,
    ];

    /// 1-based position, for progress dots
    pub fn number(&self) -> usize {
        *self as usize + 1
    }

    pub fn next(&self) -> Option<Self> {
        Self::ALL.get(self.number()).copied()
    }

    pub fn previous(&self) -> Option<Self> {
        (*self as usize).checked_sub(1).map(|i| Self::ALL[i])
    }
}

/// In-progress answers with the questionnaire's starting values
#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingDraft {
    step: OnboardingStep,
    pub name: String,
    pub gender: Gender,
    pub birth_year: i32,
    pub height_cm: f64,
    pub weight_kg: f64,
    /// Liters per day; stored on the profile as e.g. "2L"
    pub water_liters: f64,
    pub sleep_hours: f64,
    pub stress_level: StressLevel,
    pub diet_type: String,
    pub bad_habits: Vec<String>,
    pub experience_years: u32,
    pub other_activities: String,
    pub other_sports_frequency: u32,
    pub days: u8,
    pub goal: Goal,
    pub focus_areas: Vec<String>,
}

impl Default for OnboardingDraft {
    fn default() -> Self {
        Self {
            step: OnboardingStep::Bio,
            name: String::new(),
            gender: Gender::Male,
            birth_year: 2000,
            height_cm: 175.0,
            weight_kg: 70.0,
            water_liters: 2.0,
            sleep_hours: 7.0,
            stress_level: StressLevel::Medium,
            diet_type: "Omnivore".to_string(),
            bad_habits: Vec::new(),
            experience_years: 1,
            other_activities: String::new(),
            other_sports_frequency: 0,
            days: 4,
            goal: Goal::Muscle,
            focus_areas: Vec::new(),
        }
    }
}

impl OnboardingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn is_last_step(&self) -> bool {
        self.step.next().is_none()
    }

    /// Move to the next step if the current one is filled in.
    ///
    /// On the last step this is a no-op; call [`Self::build_profile`] instead.
    pub fn advance(&mut self) -> Result<OnboardingStep, ProfileError> {
        if self.step == OnboardingStep::Bio {
            if let Err(message) = validate_name(&self.name) {
                return Err(ProfileError(vec![ValidationError::new("name", &message)]));
            }
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    pub fn back(&mut self) -> OnboardingStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Add or remove a focus area; returns whether it is now selected
    pub fn toggle_focus_area(&mut self, area: &str) -> bool {
        toggle(&mut self.focus_areas, area)
    }

    /// Add or remove a bad habit; returns whether it is now selected
    pub fn toggle_bad_habit(&mut self, habit: &str) -> bool {
        toggle(&mut self.bad_habits, habit)
    }

    /// Assemble and validate the profile as of `current_year`
    pub fn build_profile(&self, current_year: i32) -> Result<UserProfile, ProfileError> {
        let profile = UserProfile {
            name: self.name.trim().to_string(),
            birth_year: self.birth_year,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            goal: self.goal,
            days: self.days,
            gender: self.gender,
            focus_areas: self.focus_areas.clone(),
            water_intake: format!("{}L", self.water_liters),
            sleep_hours: self.sleep_hours,
            stress_level: self.stress_level,
            diet_type: self.diet_type.clone(),
            bad_habits: self.bad_habits.clone(),
            experience_years: self.experience_years,
            other_activities: self.other_activities.trim().to_string(),
            other_sports_frequency: self.other_sports_frequency,
        };
        validate_profile(&profile, current_year)?;
        Ok(profile)
    }
}

fn toggle(items: &mut Vec<String>, item: &str) -> bool {
    if let Some(pos) = items.iter().position(|i| i == item) {
        items.remove(pos);
        false
    } else {
        items.push(item.to_string());
        true
    }
}
