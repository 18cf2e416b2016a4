//! POS integration step
//!
//! Petpooja is the only supported POS system today; the select is kept so
//! the form shape survives adding a second provider.

use super::prefill;
use crate::notify;
use crate::services::RestaurantApiService;
use ding_http::types::PosIntegrationRequest;
use serde_json::Value;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PosIntegrationProps {
    #[prop_or_default]
    pub existing_data: Option<Value>,
    pub is_current: bool,
    #[prop_or_default]
    pub restaurant_id: Option<String>,
    pub on_complete: Callback<()>,
    pub on_edit: Callback<()>,
}

#[function_component(PosIntegrationStep)]
pub fn pos_integration_step(props: &PosIntegrationProps) -> Html {
    let sharing_code =
        use_state(|| prefill(&props.existing_data, "menuSharingCode").unwrap_or_default());
    let api_key = use_state(|| prefill(&props.existing_data, "apiKey").unwrap_or_default());
    let api_secret = use_state(|| prefill(&props.existing_data, "apiSecret").unwrap_or_default());
    let access_token =
        use_state(|| prefill(&props.existing_data, "accessToken").unwrap_or_default());

    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);

    let Some(restaurant_id) = props.restaurant_id.clone() else {
        return html! {
            <div class="text-gray-500">
                <h3 class="text-lg font-semibold text-gray-900 mb-2">{"POS Integration"}</h3>
                <p class="m-0">
                    {"Finish the restaurant information step first; the POS \
                      account is linked to your restaurant record."}
                </p>
            </div>
        };
    };

    let on_submit = {
        let is_current = props.is_current;
        let on_complete = props.on_complete.clone();
        let on_edit = props.on_edit.clone();
        let sharing_code = sharing_code.clone();
        let api_key = api_key.clone();
        let api_secret = api_secret.clone();
        let access_token = access_token.clone();
        let submitting = submitting.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let restaurant_id = restaurant_id.clone();
            let on_complete = on_complete.clone();
            let on_edit = on_edit.clone();
            let submitting = submitting.clone();
            let error = error.clone();

            let request = PosIntegrationRequest {
                pos_system: "petpooja".to_string(),
                restaurant_id: restaurant_id.clone(),
                menu_sharing_code: (*sharing_code).clone(),
                api_key: (*api_key).clone(),
                api_secret: (*api_secret).clone(),
                access_token: (*access_token).clone(),
            };

            wasm_bindgen_futures::spawn_local(async move {
                submitting.set(true);
                error.set(None);
                let api = RestaurantApiService::new();
                let result = if is_current {
                    api.create_pos_integration(&restaurant_id, &request).await
                } else {
                    api.update_pos_integration(&restaurant_id, &request).await
                };
                submitting.set(false);
                match result {
                    Ok(()) => {
                        if is_current {
                            notify::success("POS system connected!");
                            on_complete.emit(());
                        } else {
                            notify::success("POS credentials updated");
                            on_edit.emit(());
                        }
                    }
                    Err(message) => {
                        notify::error(&message);
                        error.set(Some(message));
                    }
                }
            });
        })
    };

    let text_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let field_class =
        "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:border-red-500";

    html! {
        <form class="space-y-4" onsubmit={on_submit}>
            <h3 class="text-lg font-semibold text-gray-900 m-0">{"POS Integration"}</h3>
            <p class="text-sm text-gray-500 m-0">
                {"Connect your Petpooja account so your menu can be imported \
                  automatically. The credentials are in your Petpooja \
                  dashboard under API access."}
            </p>

            if let Some(message) = &*error {
                <div class="bg-red-50 border border-red-300 rounded-lg p-3 text-red-700 text-sm">
                    {message}
                </div>
            }

            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">{"POS System"}</label>
                <select class={field_class} disabled=true>
                    <option selected=true>{"Petpooja"}</option>
                </select>
            </div>

            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">{"Menu Sharing Code"}</label>
                <input type="text" class={field_class} value={(*sharing_code).clone()} oninput={text_input(&sharing_code)} />
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"API Key"}</label>
                    <input type="text" class={field_class} value={(*api_key).clone()} oninput={text_input(&api_key)} />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"API Secret"}</label>
                    <input type="password" class={field_class} value={(*api_secret).clone()} oninput={text_input(&api_secret)} />
                </div>
            </div>

            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">{"Access Token"}</label>
                <input type="password" class={field_class} value={(*access_token).clone()} oninput={text_input(&access_token)} />
            </div>

            <button
                type="submit"
                class="px-6 py-2 bg-red-600 hover:bg-red-700 text-white rounded-lg font-medium disabled:opacity-50"
                disabled={
                    *submitting
                        || sharing_code.is_empty()
                        || api_key.is_empty()
                        || api_secret.is_empty()
                        || access_token.is_empty()
                }
            >
                {if *submitting {
                    "Connecting..."
                } else if props.is_current {
                    "Connect & Continue"
                } else {
                    "Update Credentials"
                }}
            </button>
        </form>
    }
}
