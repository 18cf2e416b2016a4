//! Menu preview step
//!
//! Pulls the menu from the connected POS account for review. The portal
//! renders it read-only; corrections happen in the POS system itself, then
//! a re-fetch picks them up.

use crate::components::Spinner;
use crate::notify;
use crate::services::RestaurantApiService;
use ding_http::types::{MenuCategory, MenuItem, PosMenu};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MenuPreviewProps {
    pub is_current: bool,
    #[prop_or_default]
    pub restaurant_id: Option<String>,
    pub on_complete: Callback<()>,
    pub on_edit: Callback<()>,
}

#[function_component(MenuPreviewStep)]
pub fn menu_preview_step(props: &MenuPreviewProps) -> Html {
    let menu = use_state(|| None::<PosMenu>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let fetch = {
        let menu = menu.clone();
        let loading = loading.clone();
        let error = error.clone();
        let restaurant_id = props.restaurant_id.clone();
        move || {
            let menu = menu.clone();
            let loading = loading.clone();
            let error = error.clone();
            let Some(id) = restaurant_id.clone() else {
                loading.set(false);
                error.set(Some("Restaurant record not found yet".to_string()));
                return;
            };
            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                error.set(None);
                match RestaurantApiService::new().menu_preview(&id).await {
                    Ok(fetched) => menu.set(Some(fetched)),
                    Err(message) => {
                        gloo::console::warn!("menu preview fetch failed:", &message);
                        error.set(Some(message));
                    }
                }
                loading.set(false);
            });
        }
    };

    {
        let fetch = fetch.clone();
        use_effect_with(props.restaurant_id.clone(), move |_| {
            fetch();
            || ()
        });
    }

    let on_retry = {
        let fetch = fetch.clone();
        Callback::from(move |_: MouseEvent| fetch())
    };

    let on_save = {
        let is_current = props.is_current;
        let restaurant_id = props.restaurant_id.clone();
        let on_complete = props.on_complete.clone();
        let on_edit = props.on_edit.clone();
        let saving = saving.clone();
        Callback::from(move |_: MouseEvent| {
            if *saving {
                return;
            }
            let Some(id) = restaurant_id.clone() else {
                return;
            };
            let on_complete = on_complete.clone();
            let on_edit = on_edit.clone();
            let saving = saving.clone();
            wasm_bindgen_futures::spawn_local(async move {
                saving.set(true);
                match RestaurantApiService::new().save_menu(&id).await {
                    Ok(()) => {
                        notify::success("Menu saved!");
                        if is_current {
                            on_complete.emit(());
                        } else {
                            on_edit.emit(());
                        }
                    }
                    Err(message) => notify::error(&message),
                }
                saving.set(false);
            });
        })
    };

    html! {
        <div>
            <h3 class="text-lg font-semibold text-gray-900 mb-2">{"Menu Preview"}</h3>
            <p class="text-sm text-gray-500 mb-4">
                {"This is the menu reported by your POS system. Fix anything \
                  that looks wrong in Petpooja, then retry the preview."}
            </p>

            if *loading {
                <Spinner text="Fetching menu from your POS system..." />
            } else if let Some(message) = &*error {
                <div class="bg-red-50 border border-red-300 rounded-lg p-4">
                    <p class="text-red-700 text-sm mb-3 m-0">{message}</p>
                    <button
                        class="px-4 py-2 text-sm bg-red-600 hover:bg-red-700 text-white rounded-lg"
                        onclick={on_retry}
                    >
                        {"Retry"}
                    </button>
                </div>
            } else if let Some(menu) = &*menu {
                <div class="space-y-6">
                    {for menu.categories.iter().map(category_view)}
                    <button
                        class="px-6 py-2 bg-red-600 hover:bg-red-700 text-white rounded-lg font-medium disabled:opacity-50"
                        onclick={on_save}
                        disabled={*saving}
                    >
                        {if *saving {
                            "Saving..."
                        } else if props.is_current {
                            "Save Menu & Continue"
                        } else {
                            "Save Menu"
                        }}
                    </button>
                </div>
            }
        </div>
    }
}

/// Variation and add-on counts for an item, when it has any.
fn item_extras(item: &MenuItem) -> Option<String> {
    let mut parts = Vec::new();
    if !item.variations.is_empty() {
        parts.push(format!("{} variations", item.variations.len()));
    }
    if !item.addons.is_empty() {
        parts.push(format!("{} add-ons", item.addons.len()));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

fn category_view(category: &MenuCategory) -> Html {
    html! {
        <div key={category.name.clone()}>
            <h4 class="font-semibold text-gray-900 mb-2">{&category.name}</h4>
            <ul class="divide-y divide-gray-100 border border-gray-100 rounded-lg">
                {for category.items.iter().map(|item| html! {
                    <li key={item.name.clone()} class="flex justify-between items-center px-4 py-2">
                        <div>
                            <span class={if item.is_veg {
                                "inline-block w-2 h-2 rounded-full bg-green-600 mr-2"
                            } else {
                                "inline-block w-2 h-2 rounded-full bg-red-600 mr-2"
                            }} />
                            <span class={if item.is_available {
                                "text-gray-900"
                            } else {
                                "text-gray-400 line-through"
                            }}>
                                {&item.name}
                            </span>
                            if let Some(extras) = item_extras(item) {
                                <span class="text-xs text-gray-400 ml-2">{extras}</span>
                            }
                            if let Some(description) = &item.description {
                                <p class="text-xs text-gray-500 mt-1 m-0">{description}</p>
                            }
                        </div>
                        <span class="text-gray-700">{format!("₹{:.2}", item.price)}</span>
                    </li>
                })}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(variations: usize, addons: usize) -> MenuItem {
        MenuItem {
            name: "Paneer Tikka".to_string(),
            price: 240.0,
            is_veg: true,
            is_available: true,
            variations: vec![json!({}); variations],
            addons: vec![json!({}); addons],
            description: Some("Char-grilled cottage cheese".to_string()),
        }
    }

    #[test]
    fn extras_cover_variations_and_addons() {
        assert_eq!(
            item_extras(&item(2, 3)).as_deref(),
            Some("2 variations, 3 add-ons")
        );
        assert_eq!(item_extras(&item(1, 0)).as_deref(), Some("1 variations"));
        assert_eq!(item_extras(&item(0, 2)).as_deref(), Some("2 add-ons"));
        assert_eq!(item_extras(&item(0, 0)), None);
    }
}
