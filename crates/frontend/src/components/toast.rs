//! Toast notifications
//!
//! `ToastProvider` owns the visible toast list and registers itself as the
//! global sink in [`crate::notify`], so services can raise notifications
//! without any UI context.

use crate::config::UiConfig;
use crate::notify::{self, ToastKind};
use gloo::timers::callback::Timeout;
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct Toast {
    id: u32,
    kind: ToastKind,
    message: String,
}

#[derive(Clone, Debug, PartialEq, Default)]
struct ToastList {
    toasts: Vec<Toast>,
}

enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push(toast) => {
                let mut toasts = self.toasts.clone();
                toasts.push(toast);
                Rc::new(Self { toasts })
            }
            ToastAction::Dismiss(id) => Rc::new(Self {
                toasts: self.toasts.iter().filter(|t| t.id != id).cloned().collect(),
            }),
        }
    }
}

thread_local! {
    static NEXT_TOAST_ID: Cell<u32> = const { Cell::new(0) };
}

fn next_toast_id() -> u32 {
    NEXT_TOAST_ID.with(|cell| {
        let id = cell.get();
        cell.set(id.wrapping_add(1));
        id
    })
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);

    {
        let dispatcher = toasts.dispatcher();
        use_effect_with((), move |_| {
            let sink_dispatcher = dispatcher.clone();
            notify::set_toast_sink(Rc::new(move |kind, message| {
                let id = next_toast_id();
                sink_dispatcher.dispatch(ToastAction::Push(Toast { id, kind, message }));
                let dismiss_dispatcher = sink_dispatcher.clone();
                Timeout::new(UiConfig::TOAST_AUTO_DISMISS_MS, move || {
                    dismiss_dispatcher.dispatch(ToastAction::Dismiss(id));
                })
                .forget();
            }));

            // Unregister on unmount
            notify::clear_toast_sink
        });
    }

    let on_dismiss = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <>
            {props.children.clone()}
            <div class="fixed top-4 right-4 z-50 space-y-2">
                {for toasts.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let on_dismiss = on_dismiss.clone();
                    let accent = match toast.kind {
                        ToastKind::Success => "bg-green-50 border-green-300 text-green-800",
                        ToastKind::Error => "bg-red-50 border-red-300 text-red-800",
                    };
                    html! {
                        <div
                            key={id}
                            class={format!("px-4 py-3 border rounded-lg shadow-md cursor-pointer {accent}")}
                            onclick={on_dismiss.reform(move |_| id)}
                        >
                            {&toast.message}
                        </div>
                    }
                })}
            </div>
        </>
    }
}
