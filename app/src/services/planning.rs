//! Plan generation requests
//!
//! Generation is slow and may be started more than once (onboarding retry,
//! regeneration from settings). Each request takes a [`RequestToken`]; only
//! a result carrying the latest token is written, so a slow earlier request
//! can never overwrite a newer plan.
//!
//! The store is not borrowed while the generator runs: [`PlanRequests::start`]
//! captures the profile and language, [`PlanRequest::run`] awaits the
//! generator, and [`PlanRequests::finish`] enters the store with the result.

use crate::error::GenerationError;
use crate::generator::PlanGenerator;
use crate::state::GymStore;
use gym_planner_shared::{ActivePlan, Language, UserProfile};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

/// Identifies one generation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// What happened to a finished request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanOutcome {
    /// Profile and plan were written to the store
    Applied,
    /// A newer request (or a cancel) made this result irrelevant
    Superseded,
}

/// A request that has its token but has not called the generator yet
#[derive(Debug, Clone)]
pub struct PlanRequest {
    token: RequestToken,
    profile: UserProfile,
    language: Language,
}

impl PlanRequest {
    pub fn token(&self) -> RequestToken {
        self.token
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Call the generator. Holds no reference to the store.
    pub async fn run(self, generator: &dyn PlanGenerator) -> PendingPlan {
        let result = generator.generate(&self.profile, self.language).await;
        PendingPlan {
            token: self.token,
            profile: self.profile,
            result,
        }
    }
}

/// A generator result waiting to be written
#[derive(Debug)]
pub struct PendingPlan {
    token: RequestToken,
    profile: UserProfile,
    result: Result<ActivePlan, GenerationError>,
}

impl PendingPlan {
    pub fn token(&self) -> RequestToken {
        self.token
    }
}

#[derive(Debug, Default)]
pub struct PlanRequests {
    latest: AtomicU64,
}

impl PlanRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request; every earlier token becomes stale
    pub fn begin(&self) -> RequestToken {
        let token = RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1);
        debug!(token = token.0, "Plan request started");
        token
    }

    /// Start a request for `profile`, generated in `language`
    pub fn start(&self, profile: UserProfile, language: Language) -> PlanRequest {
        PlanRequest {
            token: self.begin(),
            profile,
            language,
        }
    }

    /// Invalidate every in-flight request
    pub fn cancel(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
        debug!("Plan requests cancelled");
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }

    /// Write `profile` then the generated plan, if `token` is still current.
    ///
    /// A failed generation writes nothing and returns the error. A stale
    /// result, successful or not, is dropped as `Superseded`.
    pub fn apply(
        &self,
        store: &mut GymStore,
        token: RequestToken,
        profile: UserProfile,
        result: Result<ActivePlan, GenerationError>,
    ) -> Result<PlanOutcome, GenerationError> {
        if !self.is_current(token) {
            info!(token = token.0, "Dropping superseded plan result");
            return Ok(PlanOutcome::Superseded);
        }
        let plan = result.map_err(|e| {
            warn!(token = token.0, detail = e.detail(), "Plan generation failed");
            e
        })?;
        store.set_user_profile(profile);
        store.set_active_plan(plan);
        info!(token = token.0, "Applied generated plan");
        Ok(PlanOutcome::Applied)
    }

    /// [`Self::apply`] for the result of [`PlanRequest::run`]
    pub fn finish(
        &self,
        store: &mut GymStore,
        pending: PendingPlan,
    ) -> Result<PlanOutcome, GenerationError> {
        self.apply(store, pending.token, pending.profile, pending.result)
    }
}
