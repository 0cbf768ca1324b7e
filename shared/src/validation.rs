//! Input validation functions
//!
//! This module provides validation utilities for onboarding input and
//! generated or edited plans. Range checks on [`UserProfile`] come from the
//! `validator` derive; the rest are custom validators.

use crate::errors::{PlanIssue, ProfileError};
use crate::models::UserProfile;
use crate::plan::ActivePlan;
use std::collections::HashSet;
use validator::Validate;

/// Youngest accepted user, in years
pub const MIN_AGE_YEARS: i32 = 10;
/// Oldest accepted user, in years
pub const MAX_AGE_YEARS: i32 = 100;

/// Validate display name (must contain something besides whitespace)
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name.chars().count() > 64 {
        return Err("Name too long".to_string());
    }
    Ok(())
}

/// Validate birth year against the current calendar year
pub fn validate_birth_year(birth_year: i32, current_year: i32) -> Result<(), String> {
    let age = current_year - birth_year;
    if age < MIN_AGE_YEARS {
        return Err(format!("Age must be at least {} years", MIN_AGE_YEARS));
    }
    if age > MAX_AGE_YEARS {
        return Err(format!("Age cannot exceed {} years", MAX_AGE_YEARS));
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 20.0 {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate a complete profile.
///
/// All failing fields are reported, sorted by field name.
pub fn validate_profile(profile: &UserProfile, current_year: i32) -> Result<(), ProfileError> {
    let mut errors = Vec::new();

    if let Err(field_errors) = profile.validate() {
        for (field, failures) in field_errors.field_errors() {
            for failure in failures {
                let message = failure
                    .message
                    .as_deref()
                    .map(str::to_string)
                    .unwrap_or_else(|| failure.code.to_string());
                errors.push(ValidationError::new(&field, &message));
            }
        }
    }

    // `length(min = 1)` accepts whitespace-only names
    if profile.name.trim().is_empty() && !profile.name.is_empty() {
        errors.push(ValidationError::new("name", "Name cannot be empty"));
    }
    if let Err(message) = validate_birth_year(profile.birth_year, current_year) {
        errors.push(ValidationError::new("birth_year", &message));
    }
    // NaN slips through range checks
    for (field, value) in [
        ("height_cm", profile.height_cm),
        ("weight_kg", profile.weight_kg),
        ("sleep_hours", profile.sleep_hours),
    ] {
        if value.is_nan() {
            errors.push(ValidationError::new(field, "Must be a valid number"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        errors.sort_by(|a, b| a.field.cmp(&b.field));
        Err(ProfileError(errors))
    }
}

/// Report structural problems in a plan: duplicate day names, exercise ids
/// repeated anywhere in the week, empty days, zero sets or rest.
pub fn audit_plan(plan: &ActivePlan) -> Vec<PlanIssue> {
    let mut issues = Vec::new();
    if plan.week_schedule.is_empty() {
        issues.push(PlanIssue::EmptyPlan);
    }

    let mut days = HashSet::new();
    let mut ids = HashSet::new();
    for day in &plan.week_schedule {
        if !days.insert(day.day.as_str()) {
            issues.push(PlanIssue::DuplicateDay(day.day.clone()));
        }
        if day.exercises.is_empty() {
            issues.push(PlanIssue::EmptyDay(day.day.clone()));
        }
        for exercise in &day.exercises {
            if !ids.insert(exercise.id.as_str()) {
                issues.push(PlanIssue::DuplicateExerciseId(exercise.id.clone()));
            }
            if exercise.sets == 0 {
                issues.push(PlanIssue::NoSets(exercise.id.clone()));
            }
            if exercise.rest_sec == 0 {
                issues.push(PlanIssue::NoRest(exercise.id.clone()));
            }
        }
    }
    issues
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "name" => "Name",
        "birth_year" | "birthYear" => "Year of Birth",
        "height" | "height_cm" => "Height",
        "weight" | "weight_kg" => "Weight",
        "days" => "Training Days",
        "sleep_hours" | "sleepHours" => "Sleep",
        "experience_years" | "experienceYears" => "Experience",
        "other_sports_frequency" | "otherSportsFrequency" => "Other Sports Frequency",
        "day" => "Day Name",
        "exercises" => "Exercises",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, Goal, StressLevel};
    use crate::plan::{DaySchedule, Exercise};
    use fake::faker::name::en::Name;
    use fake::Fake;
    use proptest::prelude::*;

    const YEAR: i32 = 2026;

    fn profile() -> UserProfile {
        UserProfile {
            name: Name().fake(),
            birth_year: 1995,
            height_cm: 175.0,
            weight_kg: 70.0,
            goal: Goal::Muscle,
            days: 4,
            gender: Gender::Female,
            focus_areas: vec![],
            water_intake: "2L".to_string(),
            sleep_hours: 7.0,
            stress_level: StressLevel::Medium,
            diet_type: "Omnivore".to_string(),
            bad_habits: vec![],
            experience_years: 1,
            other_activities: String::new(),
            other_sports_frequency: 0,
        }
    }

    fn exercise(id: &str) -> Exercise {
        Exercise {
            id: id.to_string(),
            name: "Lunge".to_string(),
            sets: 3,
            reps: "12".to_string(),
            rest_sec: 60,
            tips: String::new(),
        }
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Ada").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_birth_year() {
        assert!(validate_birth_year(2000, YEAR).is_ok());
        assert!(validate_birth_year(YEAR - 10, YEAR).is_ok());
        assert!(validate_birth_year(YEAR - 9, YEAR).is_err());
        assert!(validate_birth_year(1900, YEAR).is_err());
    }

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight(70.0).is_ok());
        assert!(validate_weight(20.0).is_ok());
        assert!(validate_weight(500.0).is_ok());
        assert!(validate_weight(10.0).is_err());
        assert!(validate_weight(600.0).is_err());
        assert!(validate_weight(f64::NAN).is_err());
        assert!(validate_weight(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_profile_ok() {
        assert!(validate_profile(&profile(), YEAR).is_ok());
    }

    #[test]
    fn test_validate_profile_reports_every_field() {
        let mut bad = profile();
        bad.name = "   ".to_string();
        bad.days = 9;
        bad.height_cm = 20.0;
        bad.birth_year = YEAR;

        let err = validate_profile(&bad, YEAR).unwrap_err();
        assert!(err.has_field("name"));
        assert!(err.has_field("days"));
        assert!(err.has_field("birth_year"));
        assert!(err
            .errors()
            .iter()
            .any(|e| e.display_label == "Height"));
        assert!(err.to_string().contains("Training Days"));
    }

    #[test]
    fn test_empty_name_fails_length_check() {
        let mut bad = profile();
        bad.name = String::new();
        let err = validate_profile(&bad, YEAR).unwrap_err();
        assert!(err.has_field("name"));
        assert_eq!(err.errors().len(), 1);
    }

    #[test]
    fn test_audit_plan_clean() {
        let plan = ActivePlan {
            week_schedule: vec![
                DaySchedule {
                    day: "Monday".to_string(),
                    title: "Legs".to_string(),
                    exercises: vec![exercise("d1_e1"), exercise("d1_e2")],
                },
                DaySchedule {
                    day: "Wednesday".to_string(),
                    title: "Push".to_string(),
                    exercises: vec![exercise("d2_e1")],
                },
            ],
        };
        assert!(audit_plan(&plan).is_empty());
    }

    #[test]
    fn test_audit_plan_finds_cross_day_duplicates() {
        let mut zero = exercise("d2_e2");
        zero.sets = 0;
        zero.rest_sec = 0;
        let plan = ActivePlan {
            week_schedule: vec![
                DaySchedule {
                    day: "Monday".to_string(),
                    title: "Legs".to_string(),
                    exercises: vec![exercise("d1_e1")],
                },
                DaySchedule {
                    day: "Monday".to_string(),
                    title: "Push".to_string(),
                    exercises: vec![exercise("d1_e1"), zero],
                },
                DaySchedule {
                    day: "Friday".to_string(),
                    title: "Rest".to_string(),
                    exercises: vec![],
                },
            ],
        };
        let issues = audit_plan(&plan);
        assert!(issues.contains(&PlanIssue::DuplicateDay("Monday".to_string())));
        assert!(issues.contains(&PlanIssue::DuplicateExerciseId("d1_e1".to_string())));
        assert!(issues.contains(&PlanIssue::EmptyDay("Friday".to_string())));
        assert!(issues.contains(&PlanIssue::NoSets("d2_e2".to_string())));
        assert!(issues.contains(&PlanIssue::NoRest("d2_e2".to_string())));
    }

    #[test]
    fn test_audit_empty_plan() {
        assert_eq!(audit_plan(&ActivePlan::default()), vec![PlanIssue::EmptyPlan]);
    }

    #[test]
    fn test_field_display_labels() {
        assert_eq!(get_field_display_label("birth_year"), "Year of Birth");
        assert_eq!(get_field_display_label("height_cm"), "Height");
        assert_eq!(get_field_display_label("unknown_field"), "unknown_field");
    }

    #[test]
    fn test_validation_error() {
        let err = ValidationError::new("height_cm", "must be at least 50 cm");
        assert_eq!(err.field, "height_cm");
        assert_eq!(err.display_label, "Height");
        assert_eq!(err.user_message(), "Height: must be at least 50 cm");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_weight_range(weight in 20.0f64..=500.0) {
            prop_assert!(validate_weight(weight).is_ok());
        }

        #[test]
        fn prop_invalid_weight_below_min(weight in 0.0f64..20.0) {
            prop_assert!(validate_weight(weight).is_err());
        }

        #[test]
        fn prop_valid_height_range(height in 50.0f64..=300.0) {
            let mut p = profile();
            p.height_cm = height;
            prop_assert!(validate_profile(&p, YEAR).is_ok(),
                "Height {} should be valid", height);
        }

        #[test]
        fn prop_valid_training_days(days in 2u8..=7) {
            let mut p = profile();
            p.days = days;
            prop_assert!(validate_profile(&p, YEAR).is_ok());
        }

        #[test]
        fn prop_invalid_training_days(days in 8u8..=u8::MAX) {
            let mut p = profile();
            p.days = days;
            let err = validate_profile(&p, YEAR).unwrap_err();
            prop_assert!(err.has_field("days"));
        }
    }
}
