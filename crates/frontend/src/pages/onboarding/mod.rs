//! Onboarding wizard flow controller
//!
//! The backend decides which step is current; this component only decides
//! which step is on screen. Visitors may revisit completed steps via the
//! indicator, so the on-screen step is view-local state layered over the
//! server snapshot. Completing the current step advances the view to the
//! new server-declared current step, but only if the visitor was actually
//! looking at the old current step; saving an edit never moves the view.

pub mod complete;
pub mod menu_preview;
pub mod personal_details;
pub mod pos_integration;
pub mod restaurant_info;

use crate::auth::use_session;
use crate::components::{PageSpinner, StepIndicator};
use crate::hooks::use_onboarding_state;
use complete::CompleteStep;
use ding_http::types::{OnboardingState, StepKey};
use menu_preview::MenuPreviewStep;
use personal_details::PersonalDetailsStep;
use pos_integration::PosIntegrationStep;
use restaurant_info::RestaurantInfoStep;
use yew::prelude::*;

/// String field out of a step's saved prior input, if present.
pub(crate) fn prefill(data: &Option<serde_json::Value>, key: &str) -> Option<String> {
    data.as_ref()
        .and_then(|v| v.get(key))
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

/// Step shown on screen: an explicit selection if the visitor made one,
/// otherwise the server-declared current step.
pub fn active_step(selected: Option<StepKey>, snapshot: Option<&OnboardingState>) -> StepKey {
    selected
        .or(snapshot.map(|s| s.current_step))
        .unwrap_or(StepKey::PersonalDetails)
}

/// Whether the on-screen step renders in first-time mode rather than edit
/// mode.
pub fn renders_as_current(active: StepKey, snapshot: &OnboardingState) -> bool {
    active == snapshot.current_step
}

/// View position after a completion re-fetch: follow the server forward
/// only if the visitor was on the step that just completed.
pub fn next_active_step(active: StepKey, old_current: StepKey, new_current: StepKey) -> StepKey {
    if active == old_current {
        new_current
    } else {
        active
    }
}

#[function_component(OnboardingFlow)]
pub fn onboarding_flow() -> Html {
    let session = use_session();
    let onboarding = use_onboarding_state();
    let selected = use_state(|| None::<StepKey>);

    let snapshot = onboarding.snapshot();

    if session.is_loading() || (onboarding.loading() && snapshot.is_none()) {
        return html! { <PageSpinner /> };
    }

    let Some(snapshot) = snapshot else {
        // The reflector always settles on some snapshot; until then keep
        // the spinner up rather than flashing an empty wizard.
        return html! { <PageSpinner /> };
    };

    let active = active_step(*selected, Some(&snapshot));
    let is_current = renders_as_current(active, &snapshot);
    let old_current = snapshot.current_step;

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |key: StepKey| selected.set(Some(key)))
    };

    // First-time completion: re-sync identity and snapshot, then follow the
    // server to its new current step unless the visitor had wandered off.
    let on_complete = {
        let onboarding = onboarding.clone();
        let selected = selected.clone();
        Callback::from(move |_: ()| {
            let onboarding = onboarding.clone();
            let selected = selected.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(fresh) = onboarding.refresh_after_mutation().await {
                    selected.set(Some(next_active_step(
                        active,
                        old_current,
                        fresh.current_step,
                    )));
                }
            });
        })
    };

    // Edit save: re-sync only, the view stays where it is.
    let on_edit = {
        let onboarding = onboarding.clone();
        Callback::from(move |_: ()| {
            let onboarding = onboarding.clone();
            wasm_bindgen_futures::spawn_local(async move {
                onboarding.refresh_after_mutation().await;
            });
        })
    };

    let on_retry = {
        let onboarding = onboarding.clone();
        Callback::from(move |_: MouseEvent| {
            let onboarding = onboarding.clone();
            wasm_bindgen_futures::spawn_local(async move {
                onboarding.fetch().await;
            });
        })
    };

    let existing_data = snapshot.step_data.get(&active).cloned();
    let restaurant_id = snapshot.restaurant_id.clone();

    let step_view = match active {
        StepKey::PersonalDetails => html! {
            <PersonalDetailsStep
                existing_data={existing_data}
                {is_current}
                on_complete={on_complete.clone()}
                on_edit={on_edit.clone()}
            />
        },
        StepKey::RestaurantInfo => html! {
            <RestaurantInfoStep
                existing_data={existing_data}
                {is_current}
                restaurant_id={restaurant_id.clone()}
                on_complete={on_complete.clone()}
                on_edit={on_edit.clone()}
            />
        },
        StepKey::PosIntegration => html! {
            <PosIntegrationStep
                existing_data={existing_data}
                {is_current}
                restaurant_id={restaurant_id.clone()}
                on_complete={on_complete.clone()}
                on_edit={on_edit.clone()}
            />
        },
        StepKey::MenuPreview => html! {
            <MenuPreviewStep
                {is_current}
                restaurant_id={restaurant_id.clone()}
                on_complete={on_complete.clone()}
                on_edit={on_edit.clone()}
            />
        },
        StepKey::Complete => html! {
            <CompleteStep snapshot={snapshot.clone()} />
        },
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <header class="bg-white shadow-sm">
                <div class="max-w-3xl mx-auto px-4 py-4">
                    <h1 class="text-xl font-bold text-red-600 m-0">{"Ding Partner"}</h1>
                </div>
            </header>

            <main class="max-w-3xl mx-auto px-4 py-8">
                <h2 class="text-2xl font-bold text-gray-900 mb-1">{"Restaurant Onboarding"}</h2>
                <p class="text-gray-500 mb-6">
                    {"Set up your restaurant in a few guided steps."}
                </p>

                if let Some(message) = onboarding.error() {
                    <div class="bg-yellow-50 border border-yellow-300 rounded-lg p-4 mb-6 flex justify-between items-center">
                        <p class="text-sm text-yellow-800 m-0">
                            {format!("Could not load your saved progress ({message}). Showing an offline estimate.")}
                        </p>
                        <button
                            class="px-3 py-1 text-sm bg-yellow-600 hover:bg-yellow-700 text-white rounded-lg"
                            onclick={on_retry}
                        >
                            {"Retry"}
                        </button>
                    </div>
                }

                <div class="w-full bg-gray-200 rounded-full h-2 mb-6">
                    <div
                        class="bg-red-600 h-2 rounded-full transition-all"
                        style={format!("width: {}%", snapshot.progress.min(100))}
                    />
                </div>

                <StepIndicator
                    steps={snapshot.available_steps.clone()}
                    {active}
                    on_select={on_select}
                />

                if !is_current && active != StepKey::Complete {
                    <div class="inline-block px-3 py-1 mb-4 bg-blue-50 border border-blue-200 text-blue-700 text-xs rounded-full">
                        {"Editing a completed step"}
                    </div>
                }

                <div class="bg-white rounded-xl shadow p-8">
                    {step_view}
                </div>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_step_defaults_to_server_current() {
        let snapshot = OnboardingState::signed_out_default();
        assert_eq!(
            active_step(None, Some(&snapshot)),
            StepKey::PersonalDetails
        );
        assert_eq!(active_step(None, None), StepKey::PersonalDetails);
        // An explicit selection wins over the snapshot.
        assert_eq!(
            active_step(Some(StepKey::MenuPreview), Some(&snapshot)),
            StepKey::MenuPreview
        );
    }

    #[test]
    fn mode_derivation_follows_server_current() {
        let mut snapshot = OnboardingState::signed_out_default();
        snapshot.current_step = StepKey::PosIntegration;
        assert!(renders_as_current(StepKey::PosIntegration, &snapshot));
        assert!(!renders_as_current(StepKey::PersonalDetails, &snapshot));
    }

    #[test]
    fn completion_advances_only_from_the_old_current_step() {
        // Visitor was on the step that completed: follow the server.
        assert_eq!(
            next_active_step(
                StepKey::RestaurantInfo,
                StepKey::RestaurantInfo,
                StepKey::PosIntegration
            ),
            StepKey::PosIntegration
        );
        // Visitor had navigated elsewhere: the view stays put.
        assert_eq!(
            next_active_step(
                StepKey::PersonalDetails,
                StepKey::RestaurantInfo,
                StepKey::PosIntegration
            ),
            StepKey::PersonalDetails
        );
        // Server did not move (edit-style save acknowledged as current).
        assert_eq!(
            next_active_step(
                StepKey::RestaurantInfo,
                StepKey::RestaurantInfo,
                StepKey::RestaurantInfo
            ),
            StepKey::RestaurantInfo
        );
    }
}
