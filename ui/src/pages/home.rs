//! Home Page

use leptos::*;
use leptos_router::*;

/// Landing screen with a single call to action
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-screen text-center space-y-6">
            <h1 class="text-5xl font-bold text-amber-900">"☕ Coffee SNOB"</h1>
            <p class="text-lg text-amber-800">"Specialty coffee near you, rated by you."</p>
            <A
                href="/shops"
                class="px-6 py-3 bg-amber-700 hover:bg-amber-800 text-white rounded-lg font-medium text-lg transition-colors"
            >
                "Find Coffee Shops"
            </A>
        </div>
    }
}
