//! Error Banner Component
//!
//! Shown on the shop list after a geolocation failure.

use leptos::*;

/// Fixed banner with the failure text and a Retry button that reloads the page
#[component]
pub fn ErrorBanner(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    let retry = move |_| {
        if let Err(err) = window().location().reload() {
            web_sys::console::error_1(&format!("Reload failed: {:?}", err).into());
        }
    };

    view! {
        <div
            role="alert"
            class="fixed top-4 left-1/2 -translate-x-1/2 z-40 flex items-center space-x-4 bg-red-600 text-white px-4 py-3 rounded-lg shadow-lg"
        >
            <span>{message}</span>
            <button
                type="button"
                class="px-3 py-1 bg-white text-red-600 rounded font-medium hover:bg-red-50"
                on:click=retry
            >
                "Retry"
            </button>
        </div>
    }
}
