//! Terminal onboarding step

use super::prefill;
use crate::app::Route;
use ding_http::types::{OnboardingState, StepKey};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CompleteProps {
    pub snapshot: OnboardingState,
}

#[function_component(CompleteStep)]
pub fn complete_step(props: &CompleteProps) -> Html {
    let restaurant_name = prefill(
        &props.snapshot.step_data.get(&StepKey::RestaurantInfo).cloned(),
        "restaurantName",
    )
    .unwrap_or_else(|| "your restaurant".to_string());

    html! {
        <div class="text-center py-8">
            <div class="w-16 h-16 bg-green-100 text-green-600 rounded-full flex items-center justify-center text-3xl mx-auto mb-4">
                {"✓"}
            </div>
            <h3 class="text-xl font-bold text-gray-900 mb-2">{"You're all set!"}</h3>
            <p class="text-gray-500 mb-6">
                {format!("{restaurant_name} is registered and its menu is live. \
                          Orders will show up on your dashboard.")}
            </p>
            <Link<Route>
                to={Route::Dashboard}
                classes="inline-block px-8 py-3 bg-red-600 hover:bg-red-700 text-white rounded-lg font-medium"
            >
                {"Go to Dashboard"}
            </Link<Route>>
        </div>
    }
}
