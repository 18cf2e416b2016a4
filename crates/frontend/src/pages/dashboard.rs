//! Partner dashboard
//!
//! Shows order statistics once a restaurant exists. While onboarding is
//! unfinished the page stays reachable but leads with a setup reminder.

use crate::app::Route;
use crate::auth::use_session;
use crate::components::PageSpinner;
use crate::hooks::use_onboarding_state;
use crate::services::DashboardApiService;
use ding_http::types::DashboardStats;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let session = use_session();
    let onboarding = use_onboarding_state();

    let stats = use_state(|| None::<DashboardStats>);
    let stats_error = use_state(|| None::<String>);

    let restaurant_id = onboarding
        .snapshot()
        .and_then(|s| s.restaurant_id)
        .or_else(|| session.user().and_then(|u| u.restaurant_id));

    {
        let stats = stats.clone();
        let stats_error = stats_error.clone();
        use_effect_with(restaurant_id.clone(), move |restaurant_id| {
            if let Some(id) = restaurant_id.clone() {
                wasm_bindgen_futures::spawn_local(async move {
                    match DashboardApiService::new().stats(&id).await {
                        Ok(fetched) => {
                            stats.set(Some(fetched));
                            stats_error.set(None);
                        }
                        Err(message) => {
                            gloo::console::warn!("dashboard stats fetch failed:", &message);
                            stats_error.set(Some(message));
                        }
                    }
                });
            }
            || ()
        });
    }

    if onboarding.loading() && onboarding.snapshot().is_none() {
        return html! { <PageSpinner /> };
    }

    let setup_pending = onboarding.snapshot().is_some_and(|s| !s.is_terminal());
    let progress = onboarding.snapshot().map(|s| s.progress).unwrap_or(0);
    let user_name = session.user().map(|u| u.name).unwrap_or_default();

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let session = session.clone();
            wasm_bindgen_futures::spawn_local(async move {
                session.logout().await;
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <header class="bg-white shadow-sm">
                <div class="max-w-5xl mx-auto px-4 py-4 flex justify-between items-center">
                    <h1 class="text-xl font-bold text-red-600 m-0">{"Ding Partner"}</h1>
                    <div class="flex items-center gap-4">
                        <span class="text-gray-600 text-sm">{&user_name}</span>
                        <button
                            class="text-sm text-gray-500 hover:text-gray-900"
                            onclick={on_logout}
                        >
                            {"Log out"}
                        </button>
                    </div>
                </div>
            </header>

            <main class="max-w-5xl mx-auto px-4 py-8">
                if setup_pending {
                    <div class="bg-yellow-50 border border-yellow-300 rounded-lg p-4 mb-6 flex justify-between items-center">
                        <div>
                            <p class="font-medium text-yellow-800 m-0">
                                {"Complete Your Restaurant Setup"}
                            </p>
                            <p class="text-sm text-yellow-700 m-0">
                                {format!("Your onboarding is {progress}% complete. Finish it to start receiving orders.")}
                            </p>
                        </div>
                        <Link<Route>
                            to={Route::Onboarding}
                            classes="px-4 py-2 bg-yellow-600 hover:bg-yellow-700 text-white rounded-lg text-sm whitespace-nowrap"
                        >
                            {"Continue Setup"}
                        </Link<Route>>
                    </div>
                }

                <h2 class="text-2xl font-bold text-gray-900 mb-6">{"Overview"}</h2>

                if restaurant_id.is_none() {
                    <p class="text-gray-500">
                        {"Statistics appear here once your restaurant is registered."}
                    </p>
                } else if let Some(message) = &*stats_error {
                    <div class="bg-red-50 border border-red-300 rounded-lg p-4 text-red-700">
                        {message}
                    </div>
                } else {
                    {stat_cards(stats.as_ref())}
                }
            </main>
        </div>
    }
}

fn stat_cards(stats: Option<&DashboardStats>) -> Html {
    let stats = stats.cloned().unwrap_or_default();
    let cards = [
        ("Total Orders", stats.total_orders.to_string()),
        ("Total Revenue", format!("₹{:.2}", stats.total_revenue)),
        ("Avg Order Value", format!("₹{:.2}", stats.avg_order_value)),
        ("Pending Orders", stats.pending_orders.to_string()),
    ];
    html! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
            {for cards.into_iter().map(|(label, value)| html! {
                <div class="bg-white rounded-lg shadow p-6">
                    <p class="text-sm text-gray-500 mb-1 m-0">{label}</p>
                    <p class="text-2xl font-bold text-gray-900 m-0">{value}</p>
                </div>
            })}
        </div>
    }
}
