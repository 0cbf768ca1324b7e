//! Generation prompt

use gym_planner_shared::{Language, UserProfile};

const OUTPUT_SCHEMA: &str = r#"{
  "weekSchedule": [
    {
      "day": "Monday",
      "title": "Glute & Hamstring Focus",
      "exercises": [
        { "id": "d1_e1", "name": "Barbell Hip Thrust", "sets": 4, "reps": "8-10", "restSec": 120, "tips": "Chin tucked, pause at top." }
      ]
    }
  ]
}"#;

/// Build the plan request for `profile` as of `current_year`
pub fn build_prompt(profile: &UserProfile, language: Language, current_year: i32) -> String {
    let focus = profile.hypertrophy_focus();
    let focus = if focus.is_empty() { "balanced" } else { &focus };
    let bad_habits = if profile.bad_habits.is_empty() {
        "none".to_string()
    } else {
        profile.bad_habits.join(", ")
    };
    let other_activities = if profile.other_activities.trim().is_empty() {
        "none"
    } else {
        profile.other_activities.trim()
    };

    format!(
        r#"You are an elite personal trainer and physiologist (PhD).
Create the scientifically "Perfect Gym Schedule" (JSON) for:

**CLIENT PROFILE**
- Name: {name}
- Age/Gender: {age} / {gender}
- Stats: {height}cm / {weight}kg
- Goal: {goal} (Focus: {focus})
- Schedule: {days} days/week

**LIFESTYLE & RECOVERY**
- Experience: {experience} years
- Sleep: {sleep} hrs/night
- Stress: {stress}
- Diet: {diet}
- Hydration: {water}
- Other Sports: {other_activities} ({other_frequency}x/week) --> MUST ACCOUNT FOR THIS FATIGUE!
- Bad Habits: {bad_habits}

**INSTRUCTIONS**
1. **Focus Areas:** Select exercises that prioritise the focus areas. For Glutes program Hip Thrusts (2-3x/week), RDLs and Kickbacks. For Arms add dedicated arm work or high frequency.
2. **Recovery Match:**
   - If Sleep < 6h or High Stress -> Reduce total sets, increase rest.
   - If Experience > 3y -> Increase volume/intensity.
3. **Habits:** Account for the listed bad habits (e.g. extra conditioning for smokers, hydration cues for low water intake).
4. **Rest Timing:** Precise, in seconds (e.g. 180 for heavy squats, 60 for isolations).
5. **LANGUAGE:** {language}
6. **IDs:** MUST be unique across the whole week. Use format "d{{dayNum}}_e{{exNum}}" (e.g. "d1_e1", "d1_e2", "d2_e1").

**OUTPUT SCHEMA (STRICT JSON)**
{schema}

Generate exactly {days} workout days."#,
        name = profile.name.trim(),
        age = profile.age_in(current_year),
        gender = profile.gender,
        height = profile.height_cm,
        weight = profile.weight_kg,
        goal = profile.goal.as_str(),
        focus = focus,
        days = profile.days,
        experience = profile.experience_years,
        sleep = profile.sleep_hours,
        stress = profile.stress_level,
        diet = profile.diet_type,
        water = profile.water_intake,
        other_activities = other_activities,
        other_frequency = profile.other_sports_frequency,
        bad_habits = bad_habits,
        language = language.plan_instruction(),
        schema = OUTPUT_SCHEMA,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gym_planner_shared::{Gender, Goal, StressLevel};

    fn profile() -> UserProfile {
        UserProfile {
            name: " Giulia ".to_string(),
            birth_year: 1998,
            height_cm: 165.0,
            weight_kg: 58.5,
            goal: Goal::WeightLoss,
            days: 4,
            gender: Gender::Female,
            focus_areas: vec!["Glutes".to_string(), "Legs".to_string()],
            water_intake: "1.5L".to_string(),
            sleep_hours: 5.5,
            stress_level: StressLevel::High,
            diet_type: "Vegetarian".to_string(),
            bad_habits: vec!["Smoker".to_string()],
            experience_years: 0,
            other_activities: "Tennis".to_string(),
            other_sports_frequency: 2,
        }
    }

    #[test]
    fn test_prompt_embeds_profile() {
        let prompt = build_prompt(&profile(), Language::En, 2026);
        assert!(prompt.contains("- Name: Giulia\n"));
        assert!(prompt.contains("Age/Gender: 28 / female"));
        assert!(prompt.contains("Stats: 165cm / 58.5kg"));
        assert!(prompt.contains("Goal: weight_loss (Focus: Glutes, Legs)"));
        assert!(prompt.contains("Sleep: 5.5 hrs/night"));
        assert!(prompt.contains("Stress: High"));
        assert!(prompt.contains("Other Sports: Tennis (2x/week)"));
        assert!(prompt.contains("Bad Habits: Smoker"));
        assert!(prompt.contains("\"d{dayNum}_e{exNum}\""));
        assert!(prompt.ends_with("Generate exactly 4 workout days."));
    }

    #[test]
    fn test_prompt_carries_language_instruction() {
        let prompt = build_prompt(&profile(), Language::It, 2026);
        assert!(prompt.contains(Language::It.plan_instruction()));
        let prompt = build_prompt(&profile(), Language::En, 2026);
        assert!(prompt.contains("Output in English."));
    }

    #[test]
    fn test_empty_lists_are_spelled_out() {
        let mut profile = profile();
        profile.focus_areas.clear();
        profile.bad_habits.clear();
        profile.other_activities = "  ".to_string();
        let prompt = build_prompt(&profile, Language::Pl, 2026);
        assert!(prompt.contains("(Focus: balanced)"));
        assert!(prompt.contains("Bad Habits: none"));
        assert!(prompt.contains("Other Sports: none (2x/week)"));
    }
}
