//! Loading spinner component

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub text: Option<String>,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="text-center p-10">
            <div class="w-10 h-10 border-4 border-gray-200 border-t-red-600 rounded-full animate-spin mx-auto mb-5"></div>
            if let Some(text) = &props.text {
                <p class="text-gray-500 text-sm m-0">{text}</p>
            }
        </div>
    }
}

/// Full-viewport spinner used while route-level state resolves
#[function_component(PageSpinner)]
pub fn page_spinner() -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <Spinner text={Some("Loading...".to_string())} />
        </div>
    }
}
