//! User profile model and its closed enumerations

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Diet suggestions offered during onboarding (free text is still accepted)
pub const DIET_SUGGESTIONS: &[&str] = &["Omnivore", "Vegetarian", "Vegan", "Keto", "Paleo"];

/// Bad-habit suggestions offered during onboarding
pub const BAD_HABIT_SUGGESTIONS: &[&str] = &["Smoker", "Alcohol", "Junk Food", "Late Night Snacks"];

/// Focus-area suggestions ("where do you want to get bigger?")
pub const FOCUS_AREA_SUGGESTIONS: &[&str] = &[
    "Glutes",
    "Arms (Bi/Tri)",
    "Chest",
    "Back",
    "Legs (Quads)",
    "V-Taper",
    "Abs / Core",
];

/// Gender used for programming the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// Primary training goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    #[default]
    Muscle,
    Strength,
    WeightLoss,
    Endurance,
    Health,
}

impl Goal {
    /// Wire identifier, also used inside the generation prompt
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Muscle => "muscle",
            Goal::Strength => "strength",
            Goal::WeightLoss => "weight_loss",
            Goal::Endurance => "endurance",
            Goal::Health => "health",
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Goal::Muscle => "Muscle Building",
            Goal::Strength => "Strength",
            Goal::WeightLoss => "Weight Loss",
            Goal::Endurance => "Endurance",
            Goal::Health => "General Health",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '-'], "_").as_str() {
            "muscle" | "muscle_building" => Ok(Goal::Muscle),
            "strength" => Ok(Goal::Strength),
            "weight_loss" => Ok(Goal::WeightLoss),
            "endurance" => Ok(Goal::Endurance),
            "health" | "general_health" => Ok(Goal::Health),
            _ => Err(format!("Unknown goal: {}", s)),
        }
    }
}

/// Self-reported stress level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StressLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StressLevel::Low => write!(f, "Low"),
            StressLevel::Medium => write!(f, "Medium"),
            StressLevel::High => write!(f, "High"),
        }
    }
}

/// Onboarding questionnaire result; one per installation.
///
/// Field names on the wire follow the persisted document written by earlier
/// app versions (`birthYear`, `height`, `weight`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[validate(length(min = 1, max = 64, message = "Name must be between 1 and 64 characters"))]
    pub name: String,
    pub birth_year: i32,
    /// Height in centimeters
    #[serde(rename = "height")]
    #[validate(range(min = 50.0, max = 300.0, message = "Height must be between 50 and 300 cm"))]
    pub height_cm: f64,
    /// Weight in kilograms
    #[serde(rename = "weight")]
    #[validate(range(min = 20.0, max = 500.0, message = "Weight must be between 20 and 500 kg"))]
    pub weight_kg: f64,
    pub goal: Goal,
    /// Training days per week
    #[validate(range(min = 2, max = 7, message = "Training days must be between 2 and 7"))]
    pub days: u8,
    pub gender: Gender,
    #[serde(default)]
    pub focus_areas: Vec<String>,
    /// Descriptive daily water intake, e.g. "2L"
    pub water_intake: String,
    #[validate(range(min = 1.0, max = 24.0, message = "Sleep must be between 1 and 24 hours"))]
    pub sleep_hours: f64,
    pub stress_level: StressLevel,
    pub diet_type: String,
    #[serde(default)]
    pub bad_habits: Vec<String>,
    #[validate(range(max = 80, message = "Experience cannot exceed 80 years"))]
    pub experience_years: u32,
    #[serde(default)]
    pub other_activities: String,
    /// Sessions per week of other sports
    #[validate(range(max = 21, message = "Other sports frequency cannot exceed 21 per week"))]
    pub other_sports_frequency: u32,
}

impl UserProfile {
    /// Age in the given calendar year
    pub fn age_in(&self, year: i32) -> i32 {
        year - self.birth_year
    }

    /// Comma-joined focus areas, as sent to the plan generator
    pub fn hypertrophy_focus(&self) -> String {
        self.focus_areas.join(", ")
    }
}
