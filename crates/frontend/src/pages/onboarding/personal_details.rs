//! Personal details step
//!
//! First-time mode doubles as account registration. Once an identity
//! exists the form edits profile fields instead; the password field is
//! only shown during registration.

use super::prefill;
use crate::auth::{use_session, UserPatch};
use crate::notify;
use ding_http::types::RegisterRequest;
use serde_json::Value;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PersonalDetailsProps {
    #[prop_or_default]
    pub existing_data: Option<Value>,
    pub is_current: bool,
    pub on_complete: Callback<()>,
    pub on_edit: Callback<()>,
}

#[function_component(PersonalDetailsStep)]
pub fn personal_details_step(props: &PersonalDetailsProps) -> Html {
    let session = use_session();
    let user = session.user();
    let registering = user.is_none();

    let name = use_state(|| {
        prefill(&props.existing_data, "name")
            .or_else(|| user.as_ref().map(|u| u.name.clone()))
            .unwrap_or_default()
    });
    let email = use_state(|| {
        prefill(&props.existing_data, "email")
            .or_else(|| user.as_ref().map(|u| u.email.clone()))
            .unwrap_or_default()
    });
    let phone = use_state(|| {
        prefill(&props.existing_data, "phone")
            .or_else(|| user.as_ref().map(|u| u.phone_number.clone()))
            .unwrap_or_default()
    });
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let submitting = use_state(|| false);

    let passwords_mismatch =
        registering && !confirm_password.is_empty() && *password != *confirm_password;

    let on_submit = {
        let session = session.clone();
        let is_current = props.is_current;
        let on_complete = props.on_complete.clone();
        let on_edit = props.on_edit.clone();
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let password = password.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let session = session.clone();
            let on_complete = on_complete.clone();
            let on_edit = on_edit.clone();
            let submitting = submitting.clone();
            let name_value = (*name).clone();
            let email_value = (*email).clone();
            let phone_value = (*phone).clone();
            let password_value = (*password).clone();

            wasm_bindgen_futures::spawn_local(async move {
                submitting.set(true);
                if session.user().is_none() {
                    let outcome = session
                        .register(RegisterRequest {
                            name: name_value,
                            email: email_value,
                            phone_number: phone_value,
                            password: password_value,
                            role: "RESTAURANT_OWNER".to_string(),
                        })
                        .await;
                    submitting.set(false);
                    if outcome.success {
                        on_complete.emit(());
                    }
                } else {
                    // TODO: wire to a profile-update endpoint once the
                    // backend exposes one; for now edits stay local.
                    session.patch_local(UserPatch {
                        name: Some(name_value),
                        phone_number: Some(phone_value),
                        ..UserPatch::default()
                    });
                    notify::success("Details updated");
                    submitting.set(false);
                    if is_current {
                        on_complete.emit(());
                    } else {
                        on_edit.emit(());
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

    let submit_label = if registering {
        "Create Account & Continue"
    } else if props.is_current {
        "Save & Continue"
    } else {
        "Save Changes"
    };

    html! {
        <form class="space-y-4" onsubmit={on_submit}>
            <h3 class="text-lg font-semibold text-gray-900 m-0">{"Personal Details"}</h3>

            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">{"Full Name"}</label>
                <input
                    type="text"
                    class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:border-red-500"
                    value={(*name).clone()}
                    oninput={text_input(&name)}
                />
            </div>

            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">{"Email"}</label>
                <input
                    type="email"
                    class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:border-red-500 disabled:bg-gray-100 disabled:text-gray-500"
                    value={(*email).clone()}
                    oninput={text_input(&email)}
                    disabled={!registering}
                />
                if !registering {
                    <p class="text-xs text-gray-400 mt-1 m-0">
                        {"Email cannot be changed after registration."}
                    </p>
                }
            </div>

            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">{"Phone Number"}</label>
                <input
                    type="tel"
                    class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:border-red-500"
                    placeholder="10-digit phone number"
                    value={(*phone).clone()}
                    oninput={text_input(&phone)}
                />
            </div>

            if registering {
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Password"}</label>
                    <input
                        type="password"
                        class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:border-red-500"
                        placeholder="At least 8 characters"
                        value={(*password).clone()}
                        oninput={text_input(&password)}
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Confirm Password"}</label>
                    <input
                        type="password"
                        class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:border-red-500"
                        value={(*confirm_password).clone()}
                        oninput={text_input(&confirm_password)}
                    />
                    if passwords_mismatch {
                        <p class="text-xs text-red-600 mt-1 m-0">{"Passwords do not match."}</p>
                    }
                </div>
            }

            <button
                type="submit"
                class="px-6 py-2 bg-red-600 hover:bg-red-700 text-white rounded-lg font-medium disabled:opacity-50"
                disabled={
                    *submitting
                        || name.is_empty()
                        || email.is_empty()
                        || phone.is_empty()
                        || (registering
                            && (password.is_empty() || *password != *confirm_password))
                }
            >
                {if *submitting { "Saving..." } else { submit_label }}
            </button>
        </form>
    }
}
