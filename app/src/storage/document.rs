//! Persisted snapshot document
//!
//! The snapshot is stored as `{"state": <snapshot>, "version": N}`. Older
//! versions are migrated on load; newer versions are refused.

use crate::error::StorageError;
use gym_planner_shared::{Language, Snapshot};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

/// Version written by this build
pub const CURRENT_VERSION: u32 = 1;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    state: &'a Snapshot,
    version: u32,
}

#[derive(Deserialize)]
struct RawEnvelope {
    state: Value,
    #[serde(default)]
    version: u32,
}

/// Encode a snapshot at [`CURRENT_VERSION`]
pub fn encode(snapshot: &Snapshot) -> Result<Vec<u8>, StorageError> {
    let envelope = EnvelopeRef {
        state: snapshot,
        version: CURRENT_VERSION,
    };
    Ok(serde_json::to_vec(&envelope)?)
}

/// Decode a stored document, migrating it to the current shape.
///
/// `fallback_language` fills in a document that never recorded a language.
pub fn decode(bytes: &[u8], fallback_language: Language) -> Result<Snapshot, StorageError> {
    let envelope: RawEnvelope = serde_json::from_slice(bytes)?;
    if envelope.version > CURRENT_VERSION {
        return Err(StorageError::UnsupportedVersion {
            found: envelope.version,
            supported: CURRENT_VERSION,
        });
    }

    let mut state = match envelope.state {
        Value::Object(map) => map,
        other => {
            return Err(StorageError::Malformed(serde::de::Error::custom(format!(
                "expected state object, found {}",
                type_name(&other)
            ))))
        }
    };

    if envelope.version == 0 {
        info!("Migrating stored document from version 0");
        migrate_v0(&mut state);
    }

    if !state.get("language").is_some_and(|v| !v.is_null()) {
        state.insert(
            "language".to_string(),
            Value::String(fallback_language.code().to_string()),
        );
    }
    if state.get("workoutProgress").is_some_and(Value::is_null) {
        state.remove("workoutProgress");
    }

    Ok(serde_json::from_value(Value::Object(state))?)
}

/// Version 0 stored `hypertrophyFocus` next to (or instead of) `focusAreas`
fn migrate_v0(state: &mut Map<String, Value>) {
    let Some(Value::Object(profile)) = state.get_mut("userProfile") else {
        return;
    };
    let legacy = profile.remove("hypertrophyFocus");
    let has_focus_areas = profile.get("focusAreas").is_some_and(Value::is_array);
    if has_focus_areas {
        return;
    }
    let focus_areas: Vec<Value> = match legacy {
        Some(Value::String(joined)) => joined
            .split(',')
            .map(str::trim)
            .filter(|area| !area.is_empty())
            .map(|area| Value::String(area.to_string()))
            .collect(),
        _ => Vec::new(),
    };
    profile.insert("focusAreas".to_string(), Value::Array(focus_areas));
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gym_planner_shared::{ActivePlan, DaySchedule, Exercise, Phase};
    use proptest::prelude::*;
    use serde_json::json;

    fn v0_document() -> Value {
        json!({
            "state": {
                "language": "pl",
                "userProfile": {
                    "name": "Ania",
                    "birthYear": 1995,
                    "height": 168,
                    "weight": 60,
                    "goal": "weight_loss",
                    "days": 3,
                    "gender": "female",
                    "hypertrophyFocus": "Glutes, Legs ,",
                    "waterIntake": "2L",
                    "sleepHours": 7,
                    "stressLevel": "Medium",
                    "dietType": "Vegan",
                    "badHabits": ["Junk Food"],
                    "experienceYears": 1,
                    "otherActivities": "",
                    "otherSportsFrequency": 0
                },
                "activePlan": {
                    "weekSchedule": [{
                        "day": "Poniedziałek",
                        "title": "Day 1: Legs",
                        "exercises": [{
                            "id": "d1_e1",
                            "name": "Squat",
                            "sets": 3,
                            "reps": "8-10",
                            "restSec": 90,
                            "tips": "Brace"
                        }]
                    }]
                },
                "workoutProgress": { "d1_e1": [0, 2] }
            },
            "version": 0
        })
    }

    #[test]
    fn test_v0_document_migrates() {
        let bytes = serde_json::to_vec(&v0_document()).unwrap();
        let snapshot = decode(&bytes, Language::En).unwrap();

        assert_eq!(snapshot.language, Language::Pl);
        assert_eq!(snapshot.phase(), Phase::Active);
        let profile = snapshot.user_profile.as_ref().unwrap();
        assert_eq!(profile.focus_areas, vec!["Glutes", "Legs"]);
        assert_eq!(profile.hypertrophy_focus(), "Glutes, Legs");
        assert_eq!(snapshot.workout_progress.completed_sets("d1_e1"), vec![0, 2]);
    }

    #[test]
    fn test_v0_keeps_existing_focus_areas() {
        let mut doc = v0_document();
        doc["state"]["userProfile"]["focusAreas"] = json!(["Chest"]);
        let snapshot = decode(&serde_json::to_vec(&doc).unwrap(), Language::En).unwrap();
        let profile = snapshot.user_profile.unwrap();
        assert_eq!(profile.focus_areas, vec!["Chest"]);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let doc = json!({ "state": { "userProfile": null, "activePlan": null }, "version": 1 });
        let snapshot = decode(&serde_json::to_vec(&doc).unwrap(), Language::It).unwrap();
        assert_eq!(snapshot, Snapshot::initial(Language::It));
    }

    #[test]
    fn test_newer_version_is_refused() {
        let doc = json!({ "state": {}, "version": CURRENT_VERSION + 1 });
        let err = decode(&serde_json::to_vec(&doc).unwrap(), Language::En).unwrap_err();
        assert!(matches!(
            err,
            StorageError::UnsupportedVersion { found: 2, supported: 1 }
        ));
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert!(matches!(
            decode(b"not json", Language::En),
            Err(StorageError::Malformed(_))
        ));
        let doc = json!({ "state": [1, 2], "version": 1 });
        assert!(matches!(
            decode(&serde_json::to_vec(&doc).unwrap(), Language::En),
            Err(StorageError::Malformed(_))
        ));
    }

    #[test]
    fn test_encode_writes_envelope() {
        let bytes = encode(&Snapshot::initial(Language::It)).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["version"], json!(1));
        assert_eq!(value["state"]["language"], json!("it"));
        assert_eq!(value["state"]["workoutProgress"], json!({}));
        assert!(value["state"]["userProfile"].is_null());
    }

    proptest! {
        #[test]
        fn prop_plan_and_progress_survive_encoding(
            sets in 1u32..8,
            rest in 0u32..300,
            toggles in proptest::collection::vec(0u32..8, 0..16),
        ) {
            let plan = ActivePlan {
                week_schedule: vec![DaySchedule {
                    day: "Monday".to_string(),
                    title: "Day 1: Push".to_string(),
                    exercises: vec![Exercise {
                        id: "d1_e1".to_string(),
                        name: "Bench".to_string(),
                        sets,
                        reps: "5".to_string(),
                        rest_sec: rest,
                        tips: String::new(),
                    }],
                }],
            };
            let mut snapshot = Snapshot::initial(Language::En)
                .apply(gym_planner_shared::Action::SetActivePlan { plan });
            for index in toggles {
                snapshot = snapshot.apply(gym_planner_shared::Action::ToggleSetComplete {
                    exercise_id: "d1_e1".to_string(),
                    set_index: index,
                });
            }
            let decoded = decode(&encode(&snapshot).unwrap(), Language::Pl).unwrap();
            prop_assert_eq!(decoded, snapshot);
        }
    }
}
