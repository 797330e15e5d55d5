//! Global Application State
//!
//! The shop catalog and the toast message, provided to every component.

use coffee_snob::ShopCatalog;
use leptos::*;
use std::rc::Rc;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Bundled shop dataset, parsed once at startup
    pub catalog: Rc<ShopCatalog>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let catalog = ShopCatalog::bundled().unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("Shop dataset failed to load: {}", e).into());
        ShopCatalog::default()
    });

    let state = GlobalState {
        catalog: Rc::new(catalog),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.try_set(None);
        })
        .forget();
    }
}
