//! Shop Card Component
//!
//! One entry in the shop list panel: name, city, description, pre-baked average,
//! a clickable star row, a tasting-note input and the Save Take button.

use coffee_snob::ratings::RatingStore;
use coffee_snob::views::{average_label, PanelEntry, NOTE_PLACEHOLDER, SAVE_TAKE_MESSAGE};
use coffee_snob::{RatingError, Shop};
use leptos::*;

use crate::state::global::GlobalState;
use crate::state::LocalStorage;

const ACTIVE_STAR: &str = "#FF4500";
const INACTIVE_STAR: &str = "#FFD700";

/// Ratings shared by every card on the list
pub type Ratings = RwSignal<RatingStore<LocalStorage>>;

#[component]
pub fn ShopCard(
    shop: Shop,
    ratings: Ratings,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let id = shop.id;
    let average = average_label(&shop);
    let shop = store_value(shop);

    // Write failures only reach the console; the in-memory change stays visible
    let report = move |result: Option<Result<(), RatingError>>| {
        if let Some(Err(err)) = result {
            web_sys::console::error_1(
                &format!("Failed to save rating for shop {}: {}", id, err).into(),
            );
        }
    };

    let stars = (1..=5u8)
        .map(|k| {
            let color = move || {
                let active = shop.with_value(|s| {
                    ratings.with(|store| PanelEntry { shop: s }.stars(store.book()).is_active(k))
                });
                format!("color: {};", if active { ACTIVE_STAR } else { INACTIVE_STAR })
            };
            view! {
                <button
                    type="button"
                    class="text-2xl mr-1 leading-none hover:scale-110 transition-transform"
                    style=color
                    aria-label=format!("Rate {} of 5", k)
                    on:click=move |_| report(ratings.try_update(|store| store.set_rating(id, k)))
                >
                    "★"
                </button>
            }
        })
        .collect_view();

    let note = move || {
        shop.with_value(|s| ratings.with(|store| PanelEntry { shop: s }.note(store.book()).to_string()))
    };
    let on_note = move |ev: ev::Event| {
        let text = event_target_value(&ev);
        report(ratings.try_update(|store| store.set_note(id, text)));
    };

    view! {
        <div class="bg-white/90 text-amber-950 rounded-lg shadow p-4 space-y-2">
            <h3 class="text-lg font-bold">{shop.with_value(|s| s.name.clone())}</h3>
            <p class="text-sm text-gray-600">{shop.with_value(|s| s.city.clone())}</p>
            <p class="text-sm">{shop.with_value(|s| s.desc.clone())}</p>
            <p class="text-sm">{average}</p>

            <div class="flex items-center">{stars}</div>

            <input
                type="text"
                class="w-full border border-amber-300 rounded px-2 py-1 text-sm"
                placeholder=NOTE_PLACEHOLDER
                prop:value=note
                on:input=on_note
            />

            <button
                type="button"
                class="px-3 py-1 bg-amber-700 hover:bg-amber-800 text-white rounded text-sm font-medium"
                on:click=move |_| state.show_success(SAVE_TAKE_MESSAGE)
            >
                "Save Take"
            </button>
        </div>
    }
}
