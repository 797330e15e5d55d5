//! Loading Component

use leptos::*;

/// Full-screen placeholder shown while the device position is resolved
#[component]
pub fn Loading(
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center h-screen space-y-4 text-amber-900">
            <div class="loading-spinner w-8 h-8" />
            <p class="text-lg">{message}</p>
        </div>
    }
}
