//! Settings actions

use super::planning::{PlanRequest, PlanRequests};
use crate::error::{AppError, AppResult};
use crate::state::GymStore;
use gym_planner_shared::validation::{validate_weight, ValidationError};
use gym_planner_shared::{Language, ProfileError};
use tracing::info;

/// Start regenerating the plan for the current profile with an updated weight.
///
/// Run the returned request and hand its result to [`PlanRequests::finish`];
/// the new profile is stored only together with a successfully generated plan.
pub fn regenerate_with_weight(
    store: &GymStore,
    requests: &PlanRequests,
    weight_kg: f64,
) -> AppResult<PlanRequest> {
    let mut profile = store.user_profile().cloned().ok_or(AppError::NotOnboarded)?;
    if let Err(message) = validate_weight(weight_kg) {
        return Err(ProfileError(vec![ValidationError::new("weight_kg", &message)]).into());
    }
    profile.weight_kg = weight_kg;
    info!(weight_kg, "Regenerating plan");
    Ok(requests.start(profile, store.language()))
}

/// Wipe profile, plan and progress. The language is kept.
///
/// In-flight plan requests are cancelled so a late result cannot re-create
/// the wiped profile.
pub fn factory_reset(store: &mut GymStore, requests: &PlanRequests) {
    info!("Factory reset");
    requests.cancel();
    store.reset();
}

/// Switch to the next language (en → it → pl → en)
pub fn cycle_language(store: &mut GymStore) -> Language {
    let next = store.language().next();
    store.set_language(next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn store() -> GymStore {
        GymStore::open(Arc::new(MemoryStore::new()), "gym-storage", Some("en"))
    }

    #[test]
    fn test_cycle_language() {
        let mut store = store();
        assert_eq!(cycle_language(&mut store), Language::It);
        assert_eq!(cycle_language(&mut store), Language::Pl);
        assert_eq!(cycle_language(&mut store), Language::En);
        assert_eq!(store.language(), Language::En);
    }

    #[test]
    fn test_factory_reset_keeps_language() {
        let mut store = store();
        cycle_language(&mut store);
        factory_reset(&mut store, &PlanRequests::new());
        assert_eq!(store.language(), Language::It);
        assert!(store.user_profile().is_none());
    }

    #[test]
    fn test_factory_reset_cancels_requests() {
        let mut store = store();
        let requests = PlanRequests::new();
        let token = requests.begin();
        factory_reset(&mut store, &requests);
        assert!(!requests.is_current(token));
    }
}
