//! Coffee SNOB Frontend
//!
//! Client-side rendered Leptos app (WASM) for finding and rating coffee
//! shops.
//!
//! # Features
//!
//! - Map of the bundled shops centered on the visitor's position
//! - Per-shop stars and tasting notes kept in `localStorage`
//! - Shop detail pages with deep links
//!
//! # Architecture
//!
//! Everything runs in the browser. The shop dataset and all view logic
//! come from the `coffee-snob` library built without its `native` feature.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
