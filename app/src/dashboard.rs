//! Plain-text week overview

use chrono::Weekday;
use gym_planner_shared::{DayStatus, Snapshot};
use std::fmt::Write;

/// Render the week for `snapshot`, marking the day that matches `weekday`
pub fn render(snapshot: &Snapshot, weekday: Weekday) -> String {
    let (Some(profile), Some(plan)) = (&snapshot.user_profile, &snapshot.active_plan) else {
        return "Not onboarded yet. Complete onboarding to generate a plan.\n".to_string();
    };
    let language = snapshot.language;
    let today = language.weekday_name(weekday);

    let mut out = String::new();
    let _ = writeln!(out, "{}, {}!", language.greeting(), profile.name);
    for day in &plan.week_schedule {
        let status = match day.status(&snapshot.workout_progress) {
            DayStatus::NotStarted => "not started",
            DayStatus::InProgress => "in progress",
            DayStatus::Complete => "complete",
        };
        let badge = if day.day == today {
            format!(" [{}]", language.today_badge())
        } else {
            String::new()
        };
        let _ = writeln!(
            out,
            "{}{} - {} ({} exercises, {})",
            day.day,
            badge,
            day.muscle_groups().join(" / "),
            day.exercises.len(),
            status
        );
    }
    let _ = writeln!(
        out,
        "{} - {} days/week - {}",
        profile.goal.description(),
        profile.days,
        language.display_name()
    );
    out
}
