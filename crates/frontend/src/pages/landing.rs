//! Public landing page

use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    html! {
        <div class="min-h-screen bg-gray-50">
            <header class="bg-white shadow-sm">
                <div class="max-w-5xl mx-auto px-4 py-4 flex justify-between items-center">
                    <h1 class="text-xl font-bold text-red-600 m-0">{"Ding Partner"}</h1>
                    <Link<Route> to={Route::Login} classes="text-gray-600 hover:text-gray-900">
                        {"Partner Login"}
                    </Link<Route>>
                </div>
            </header>

            <main class="max-w-5xl mx-auto px-4 py-20 text-center">
                <h2 class="text-4xl font-bold text-gray-900 mb-4">
                    {"Grow your restaurant with Ding"}
                </h2>
                <p class="text-lg text-gray-500 mb-8 max-w-2xl mx-auto">
                    {"Register your restaurant, connect your POS system and start \
                      receiving online orders in minutes."}
                </p>
                <Link<Route>
                    to={Route::Onboarding}
                    classes="inline-block px-8 py-3 bg-red-600 hover:bg-red-700 text-white rounded-lg font-medium"
                >
                    {"Become a Partner"}
                </Link<Route>>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mt-16 text-left">
                    <div class="bg-white rounded-lg shadow p-6">
                        <h3 class="font-semibold text-gray-900 mb-2">{"Quick onboarding"}</h3>
                        <p class="text-gray-500 text-sm m-0">
                            {"A guided five-step setup takes you from sign-up to a live menu."}
                        </p>
                    </div>
                    <div class="bg-white rounded-lg shadow p-6">
                        <h3 class="font-semibold text-gray-900 mb-2">{"POS integration"}</h3>
                        <p class="text-gray-500 text-sm m-0">
                            {"Sync your existing Petpooja menu instead of retyping it."}
                        </p>
                    </div>
                    <div class="bg-white rounded-lg shadow p-6">
                        <h3 class="font-semibold text-gray-900 mb-2">{"Live dashboard"}</h3>
                        <p class="text-gray-500 text-sm m-0">
                            {"Track orders, revenue and pending work from one place."}
                        </p>
                    </div>
                </div>
            </main>
        </div>
    }
}
