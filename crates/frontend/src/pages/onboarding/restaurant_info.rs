//! Restaurant information step

use super::prefill;
use crate::auth::use_session;
use crate::notify;
use crate::services::RestaurantApiService;
use ding_http::types::OnboardRestaurantRequest;
use serde_json::Value;
use yew::prelude::*;

const CUISINES: [&str; 8] = [
    "North Indian",
    "South Indian",
    "Chinese",
    "Italian",
    "Fast Food",
    "Desserts",
    "Multi-cuisine",
    "Other",
];

#[derive(Properties, PartialEq)]
pub struct RestaurantInfoProps {
    #[prop_or_default]
    pub existing_data: Option<Value>,
    pub is_current: bool,
    #[prop_or_default]
    pub restaurant_id: Option<String>,
    pub on_complete: Callback<()>,
    pub on_edit: Callback<()>,
}

#[function_component(RestaurantInfoStep)]
pub fn restaurant_info_step(props: &RestaurantInfoProps) -> Html {
    let session = use_session();

    let name = use_state(|| prefill(&props.existing_data, "restaurantName").unwrap_or_default());
    let address = use_state(|| prefill(&props.existing_data, "address").unwrap_or_default());
    let city = use_state(|| prefill(&props.existing_data, "city").unwrap_or_default());
    let state =
        use_state(|| prefill(&props.existing_data, "state").unwrap_or_else(|| "India".to_string()));
    let zip_code = use_state(|| {
        prefill(&props.existing_data, "zipCode").unwrap_or_else(|| "000000".to_string())
    });
    let contact = use_state(|| {
        prefill(&props.existing_data, "contact")
            .or_else(|| session.user().map(|u| u.phone_number))
            .unwrap_or_default()
    });
    let cuisine =
        use_state(|| prefill(&props.existing_data, "cuisineType").unwrap_or_default());
    let description =
        use_state(|| prefill(&props.existing_data, "description").unwrap_or_default());

    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_submit = {
        let is_current = props.is_current;
        let restaurant_id = props.restaurant_id.clone();
        let on_complete = props.on_complete.clone();
        let on_edit = props.on_edit.clone();
        let name = name.clone();
        let address = address.clone();
        let city = city.clone();
        let state = state.clone();
        let zip_code = zip_code.clone();
        let contact = contact.clone();
        let cuisine = cuisine.clone();
        let description = description.clone();
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

            let described = if description.is_empty() {
                format!("A {} restaurant", *cuisine)
            } else {
                (*description).clone()
            };
            let request = OnboardRestaurantRequest {
                restaurant_name: (*name).clone(),
                address: (*address).clone(),
                city: (*city).clone(),
                state: (*state).clone(),
                zip_code: (*zip_code).clone(),
                contact: (*contact).clone(),
                cuisine_type: (*cuisine).clone(),
                description: described,
            };

            wasm_bindgen_futures::spawn_local(async move {
                submitting.set(true);
                error.set(None);
                let api = RestaurantApiService::new();
                let result = match (is_current, restaurant_id) {
                    (true, _) => api.create_restaurant(&request).await,
                    (false, Some(id)) => api.update_restaurant(&id, &request).await,
                    (false, None) => {
                        Err("Restaurant record not found yet; reload and try again".to_string())
                    }
                };
                submitting.set(false);
                match result {
                    Ok(()) => {
                        if is_current {
                            notify::success("Restaurant created!");
                            on_complete.emit(());
                        } else {
                            notify::success("Restaurant details updated");
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

    let on_cuisine_change = {
        let cuisine = cuisine.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            cuisine.set(select.value());
        })
    };

    let on_description_input = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            description.set(area.value());
        })
    };

    let field_class =
        "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:border-red-500";

    html! {
        <form class="space-y-4" onsubmit={on_submit}>
            <h3 class="text-lg font-semibold text-gray-900 m-0">{"Restaurant Information"}</h3>

            if let Some(message) = &*error {
                <div class="bg-red-50 border border-red-300 rounded-lg p-3 text-red-700 text-sm">
                    {message}
                </div>
            }

            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">{"Restaurant Name"}</label>
                <input type="text" class={field_class} value={(*name).clone()} oninput={text_input(&name)} />
            </div>

            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">{"Address"}</label>
                <input type="text" class={field_class} value={(*address).clone()} oninput={text_input(&address)} />
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"City"}</label>
                    <input type="text" class={field_class} value={(*city).clone()} oninput={text_input(&city)} />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"State"}</label>
                    <input type="text" class={field_class} value={(*state).clone()} oninput={text_input(&state)} />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"PIN Code"}</label>
                    <input type="text" class={field_class} value={(*zip_code).clone()} oninput={text_input(&zip_code)} />
                </div>
            </div>

            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">{"Contact Number"}</label>
                <input type="tel" class={field_class} value={(*contact).clone()} oninput={text_input(&contact)} />
            </div>

            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">{"Cuisine Type"}</label>
                <select class={field_class} onchange={on_cuisine_change}>
                    <option value="" selected={cuisine.is_empty()}>{"Select a cuisine"}</option>
                    {for CUISINES.iter().map(|c| html! {
                        <option value={*c} selected={*cuisine == *c}>{c}</option>
                    })}
                </select>
            </div>

            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">{"Description"}</label>
                <textarea
                    class={field_class}
                    rows="3"
                    placeholder="Optional; a short description is generated if left empty"
                    value={(*description).clone()}
                    oninput={on_description_input}
                />
            </div>

            <button
                type="submit"
                class="px-6 py-2 bg-red-600 hover:bg-red-700 text-white rounded-lg font-medium disabled:opacity-50"
                disabled={
                    *submitting
                        || name.is_empty()
                        || address.is_empty()
                        || city.is_empty()
                        || contact.is_empty()
                        || cuisine.is_empty()
                }
            >
                {if *submitting {
                    "Saving..."
                } else if props.is_current {
                    "Create Restaurant & Continue"
                } else {
                    "Save Changes"
                }}
            </button>
        </form>
    }
}
