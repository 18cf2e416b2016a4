//! Partner login page

use crate::app::Route;
use crate::auth::use_session;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();

    let phone = use_state(String::new);
    let password = use_state(String::new);
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_phone_input = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            phone.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    // On success the stored identity flips the surrounding public-route
    // guard, which redirects to the dashboard; no imperative navigation.
    let on_submit = {
        let session = session.clone();
        let phone = phone.clone();
        let password = password.clone();
        let submitting = submitting.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let session = session.clone();
            let submitting = submitting.clone();
            let error = error.clone();
            let phone_value = (*phone).clone();
            let password_value = (*password).clone();

            wasm_bindgen_futures::spawn_local(async move {
                submitting.set(true);
                error.set(None);
                let outcome = session.login(phone_value, password_value).await;
                submitting.set(false);
                if !outcome.success {
                    error.set(outcome.message);
                }
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <div class="max-w-md w-full">
                <div class="text-center mb-8">
                    <h1 class="text-2xl font-bold text-red-600 mb-1">{"Ding Partner"}</h1>
                    <p class="text-gray-500 m-0">{"Sign in to your partner account"}</p>
                </div>

                <form class="bg-white rounded-xl shadow p-8 space-y-4" onsubmit={on_submit}>
                    if let Some(message) = &*error {
                        <div class="bg-red-50 border border-red-300 rounded-lg p-3 text-red-700 text-sm">
                            {message}
                        </div>
                    }

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">
                            {"Phone Number"}
                        </label>
                        <input
                            type="tel"
                            class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:border-red-500"
                            placeholder="10-digit phone number"
                            value={(*phone).clone()}
                            oninput={on_phone_input}
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">
                            {"Password"}
                        </label>
                        <input
                            type="password"
                            class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:border-red-500"
                            placeholder="Your password"
                            value={(*password).clone()}
                            oninput={on_password_input}
                        />
                    </div>

                    <button
                        type="submit"
                        class="w-full px-4 py-2 bg-red-600 hover:bg-red-700 text-white rounded-lg font-medium disabled:opacity-50"
                        disabled={*submitting || phone.is_empty() || password.is_empty()}
                    >
                        {if *submitting { "Signing in..." } else { "Sign In" }}
                    </button>

                    <p class="text-center text-sm text-gray-500 m-0">
                        {"New to Ding? "}
                        <Link<Route> to={Route::Onboarding} classes="text-red-600 hover:underline">
                            {"Register your restaurant"}
                        </Link<Route>>
                    </p>
                </form>
            </div>
        </div>
    }
}
