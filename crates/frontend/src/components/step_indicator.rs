//! Wizard step indicator
//!
//! Renders the server-declared step list; clicking is only wired for steps
//! the backend marked editable, and selecting a step never mutates server
//! state.

use ding_http::types::{StepDescriptor, StepKey};
use yew::prelude::*;

/// Visual status of one indicator entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Finish,
    Process,
    Wait,
}

/// Status derivation: completion wins over currency
pub fn step_status(descriptor: &StepDescriptor) -> StepStatus {
    if descriptor.completed {
        StepStatus::Finish
    } else if descriptor.is_current {
        StepStatus::Process
    } else {
        StepStatus::Wait
    }
}

#[derive(Properties, PartialEq)]
pub struct StepIndicatorProps {
    pub steps: Vec<StepDescriptor>,
    pub active: StepKey,
    pub on_select: Callback<StepKey>,
}

#[function_component(StepIndicator)]
pub fn step_indicator(props: &StepIndicatorProps) -> Html {
    html! {
        <ol class="flex flex-wrap gap-2 mb-8">
            {for props.steps.iter().map(|descriptor| {
                let status = step_status(descriptor);
                let key = descriptor.key;
                let badge = match status {
                    StepStatus::Finish => "bg-green-100 text-green-700 border-green-300",
                    StepStatus::Process => "bg-red-50 text-red-700 border-red-300",
                    StepStatus::Wait => "bg-gray-100 text-gray-400 border-gray-200",
                };
                let active_ring = if key == props.active { " ring-2 ring-red-400" } else { "" };
                let clickable = if descriptor.editable { " cursor-pointer" } else { "" };
                let onclick = descriptor.editable.then(|| {
                    props.on_select.reform(move |_: MouseEvent| key)
                });
                html! {
                    <li
                        key={descriptor.title.clone()}
                        class={format!("px-3 py-2 border rounded-lg text-sm {badge}{active_ring}{clickable}")}
                        {onclick}
                    >
                        <span class="mr-1">
                            {match status {
                                StepStatus::Finish => "✓",
                                StepStatus::Process => "●",
                                StepStatus::Wait => "○",
                            }}
                        </span>
                        {&descriptor.title}
                    </li>
                }
            })}
        </ol>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(completed: bool, is_current: bool) -> StepDescriptor {
        StepDescriptor {
            key: StepKey::RestaurantInfo,
            title: StepKey::RestaurantInfo.title().to_string(),
            description: None,
            completed,
            editable: true,
            is_current,
        }
    }

    #[test]
    fn status_derivation() {
        assert_eq!(step_status(&descriptor(true, false)), StepStatus::Finish);
        assert_eq!(step_status(&descriptor(false, true)), StepStatus::Process);
        assert_eq!(step_status(&descriptor(false, false)), StepStatus::Wait);
        // A completed step stays "finish" even if the backend also flags it
        // current.
        assert_eq!(step_status(&descriptor(true, true)), StepStatus::Finish);
    }
}
