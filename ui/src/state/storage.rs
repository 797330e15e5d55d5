//! Browser Local Storage
//!
//! `window.localStorage` behind the shared `KeyValueStore` trait.

use coffee_snob::ratings::{KeyValueStore, StoreError};
use wasm_bindgen::JsValue;

/// `KeyValueStore` over `window.localStorage`
///
/// When storage is disabled (private mode, sandboxed iframe) reads return
/// nothing and writes fail with `StoreError::Unavailable`.
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            web_sys::console::warn_1(&"localStorage unavailable; ratings will not persist".into());
        }
        Self { storage }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn backend_error(err: JsValue) -> StoreError {
    StoreError::Backend(format!("{:?}", err))
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match &self.storage {
            Some(storage) => storage.get_item(key).map_err(backend_error),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage.set_item(key, value).map_err(backend_error)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage.remove_item(key).map_err(backend_error)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use coffee_snob::ratings::{RatingStore, STORAGE_KEY};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_ratings_round_trip_through_local_storage() {
        let mut backend = LocalStorage::new();
        backend.remove(STORAGE_KEY).unwrap();

        let mut ratings = RatingStore::load(backend);
        ratings.set_rating(2, 4).unwrap();
        ratings.set_note(2, "silky").unwrap();

        let reloaded = RatingStore::load(LocalStorage::new());
        assert_eq!(reloaded.rating(2).map(|s| s.get()), Some(4));
        assert_eq!(reloaded.note(2), Some("silky"));

        let raw = LocalStorage::new().get(STORAGE_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"{"2":4,"2-note":"silky"}"#);
    }
}
