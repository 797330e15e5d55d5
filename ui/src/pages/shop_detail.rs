//! Shop Detail Page

use coffee_snob::views::{average_label, ShopDetailView, SHOP_NOT_FOUND_MESSAGE};
use leptos::*;
use leptos_router::*;

use crate::components::ShopsLink;
use crate::state::global::GlobalState;

/// `/shops/:id`
#[component]
pub fn ShopDetail() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let params = use_params_map();

    move || {
        let segment = params.with(|p| p.get("id").cloned().unwrap_or_default());

        match ShopDetailView::resolve(&state.catalog, &segment) {
            ShopDetailView::Found(shop) => view! {
                <div class="max-w-2xl mx-auto px-4 py-12 space-y-4 text-amber-950">
                    <h1 class="text-4xl font-bold">{shop.name.clone()}</h1>
                    <p class="text-lg">{shop.city.clone()}</p>
                    <p class="text-gray-700">{shop.address.clone()}</p>
                    <p>{shop.desc.clone()}</p>
                    <p class="font-medium">{average_label(shop)}</p>
                    <div class="flex items-center space-x-4">
                        <a
                            href=shop.website.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-blue-600 hover:underline"
                        >
                            "Visit Website"
                        </a>
                        <ShopsLink />
                    </div>
                </div>
            }
            .into_view(),
            ShopDetailView::NotFound => view! {
                <div class="flex flex-col items-center justify-center min-h-screen text-center space-y-6">
                    <div class="text-6xl">"🔍"</div>
                    <h1 class="text-3xl font-bold text-amber-900">{SHOP_NOT_FOUND_MESSAGE}</h1>
                    <ShopsLink label="Browse all shops" />
                </div>
            }
            .into_view(),
        }
    }
}
