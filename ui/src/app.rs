//! App Root Component
//!
//! Routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Toast;
use crate::pages::{Home, ShopDetail, Shops};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <main class="min-h-screen bg-amber-50">
                <Routes>
                    <Route path="/" view=Home />
                    <Route path="/shops" view=Shops />
                    <Route path="/shops/:id" view=ShopDetail />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>

            // Toast notifications
            <Toast />
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"☕"</div>
            <h1 class="text-3xl font-bold mb-2 text-amber-900">"Page Not Found"</h1>
            <p class="text-amber-800 mb-6">"Nothing brewing at this address."</p>
            <A
                href="/"
                class="px-6 py-3 bg-amber-700 hover:bg-amber-800 text-white rounded-lg font-medium transition-colors"
            >
                "Go Home"
            </A>
        </div>
    }
}
