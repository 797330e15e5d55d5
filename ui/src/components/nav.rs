//! Navigation Links
//!
//! Small "back" links shared by the shop screens.

use leptos::*;
use leptos_router::*;

/// Link back to the home screen
#[component]
pub fn HomeLink() -> impl IntoView {
    view! {
        <BackLink href="/" label="← Home" />
    }
}

/// Link back to the shop list
#[component]
pub fn ShopsLink(
    #[prop(default = "Back to Shops")]
    label: &'static str,
) -> impl IntoView {
    view! {
        <BackLink href="/shops" label=label />
    }
}

#[component]
fn BackLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="inline-block px-4 py-2 rounded-lg bg-amber-700 hover:bg-amber-800 text-white font-medium transition-colors"
        >
            {label}
        </A>
    }
}
