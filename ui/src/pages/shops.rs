//! Shop List Page
//!
//! Map plus side panel. Asks for the device position once on mount and
//! shows a loading screen until the request settles.

use coffee_snob::ratings::RatingStore;
use coffee_snob::views::ShopListView;
use coffee_snob::LocationState;
use leptos::*;

use crate::components::{ErrorBanner, HomeLink, Loading, ShopCard, ShopMap};
use crate::state::geolocation::current_position;
use crate::state::global::GlobalState;
use crate::state::LocalStorage;

#[component]
pub fn Shops() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let location = create_rw_signal(LocationState::Locating);
    let ratings = create_rw_signal(RatingStore::load(LocalStorage::new()));

    spawn_local(async move {
        let outcome = current_position().await;
        // The page may have been left before the browser answered
        location.try_set(LocationState::resolve(outcome));
    });

    move || {
        location.with(|loc| match ShopListView::build(&state.catalog, loc) {
            None => view! { <Loading message="Finding your location..." /> }.into_view(),
            Some(list) => {
                let banner = list.banner.map(|msg| view! { <ErrorBanner message=msg /> });
                let cards = list
                    .panel
                    .iter()
                    .map(|entry| view! { <ShopCard shop=entry.shop.clone() ratings=ratings /> })
                    .collect_view();

                view! {
                    <div class="flex flex-col md:flex-row h-screen">
                        {banner}
                        <ShopMap map=list.map />
                        <aside class="w-full md:w-96 h-full overflow-y-auto bg-amber-50 p-4 space-y-4">
                            <div class="flex items-center justify-between">
                                <h2 class="text-2xl font-bold text-amber-900">"Coffee Shops"</h2>
                                <HomeLink />
                            </div>
                            {cards}
                        </aside>
                    </div>
                }
                .into_view()
            }
        })
    }
}
