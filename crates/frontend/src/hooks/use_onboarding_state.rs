//! Onboarding state reflector
//!
//! The backend owns the onboarding state machine; this hook only fetches the
//! latest snapshot and replaces it wholesale. Transitions are never computed
//! locally. Two synthesized snapshots cover the degraded cases: a fixed
//! default when nobody is signed in, and a documented fallback when the
//! identity exists but the state endpoint fails.

use crate::api;
use crate::auth::{use_session, SessionHandle};
use crate::client::create_client;
use ding_http::types::{OnboardingState, StepKey, UserInfo};
use yew::prelude::*;

/// Reflector hook handle
#[derive(Clone)]
pub struct OnboardingStateHandle {
    session: SessionHandle,
    state: UseStateHandle<Option<OnboardingState>>,
    loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<String>>,
}

impl PartialEq for OnboardingStateHandle {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.loading == other.loading && self.error == other.error
    }
}

impl OnboardingStateHandle {
    /// Latest snapshot, if any fetch has settled
    pub fn snapshot(&self) -> Option<OnboardingState> {
        (*self.state).clone()
    }

    /// Whether a fetch is in flight
    pub fn loading(&self) -> bool {
        *self.loading
    }

    /// Message recorded alongside a fallback snapshot, for a retry affordance
    pub fn error(&self) -> Option<String> {
        (*self.error).clone()
    }

    /// Current step and its index, defaulting to the first step
    pub fn current_step_info(&self) -> (StepKey, usize) {
        match &*self.state {
            Some(state) => (state.current_step, state.current_index()),
            None => (StepKey::PersonalDetails, 0),
        }
    }

    /// Fetch the snapshot for the identity known at call time. Returns what
    /// was stored so callers can act on it right after the await point.
    pub async fn fetch(&self) -> Option<OnboardingState> {
        self.fetch_for(self.session.user()).await
    }

    /// Identity refresh followed by a snapshot re-fetch, in that order: the
    /// snapshot may depend on identity fields (fallback seeding), so the
    /// identity must be current first.
    pub async fn refresh_after_mutation(&self) -> Option<OnboardingState> {
        let refreshed = self.session.refresh().await;
        let user = refreshed.or_else(|| self.session.user());
        self.fetch_for(user).await
    }

    async fn fetch_for(&self, user: Option<UserInfo>) -> Option<OnboardingState> {
        // No identity: a fixed, deterministic default. No network call.
        let Some(user) = user else {
            let snapshot = OnboardingState::signed_out_default();
            self.state.set(Some(snapshot.clone()));
            self.error.set(None);
            self.loading.set(false);
            return Some(snapshot);
        };

        self.loading.set(true);
        self.error.set(None);

        let snapshot = match fetch_remote().await {
            Ok(state) => state,
            Err(message) => {
                gloo::console::warn!("onboarding state fetch failed:", &message);
                self.error.set(Some(message));
                // Keep the wizard usable: assume the account step is done
                // and seed it from local identity fields. May understate
                // real progress; the next successful fetch corrects it.
                OnboardingState::service_unavailable_fallback(&user)
            }
        };

        self.state.set(Some(snapshot.clone()));
        self.loading.set(false);
        Some(snapshot)
    }
}

async fn fetch_remote() -> Result<OnboardingState, String> {
    let client = create_client().map_err(|e| e.to_string())?;
    match api::call(client.onboarding_state()).await {
        Ok(response) if response.success => response
            .state
            .ok_or_else(|| "Onboarding state missing from response".to_string()),
        Ok(response) => Err(response
            .message
            .unwrap_or_else(|| "Failed to fetch onboarding state".to_string())),
        Err(error) => Err(error.to_string()),
    }
}

/// Hook exposing the server-declared onboarding snapshot
///
/// Re-fetches automatically whenever the identity changes (login, logout,
/// refresh). A superseding fetch is not cancelled; the last response to
/// resolve wins.
#[hook]
pub fn use_onboarding_state() -> OnboardingStateHandle {
    let session = use_session();
    let state = use_state(|| None::<OnboardingState>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    let handle = OnboardingStateHandle {
        session: session.clone(),
        state,
        loading,
        error,
    };

    {
        let handle = handle.clone();
        use_effect_with(session.user(), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                handle.fetch().await;
            });
            || ()
        });
    }

    handle
}
