//! Rating Store
//!
//! Write-through persistence of a [`RatingBook`] into a key-value backend.
//! In the browser the backend is `window.localStorage`; natively it is a
//! [`MemoryStore`] or a file-backed store.

use std::collections::HashMap;

use super::error::{RatingResult, StoreError};
use super::types::{RatingBook, RatingEntry, Stars};
use crate::shops::ShopId;

/// Key under which the whole rating mapping is persisted
pub const STORAGE_KEY: &str = "coffeeRatings";

/// String key-value persistence, shaped after the Web Storage API
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory backend
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, as if written by an earlier session
    pub fn with_item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.items.insert(key.into(), value.into());
        self
    }

    /// Number of `set` calls made so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.writes += 1;
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.items.remove(key);
        Ok(())
    }
}

/// Ratings loaded from a backend, persisted on every mutation
#[derive(Debug)]
pub struct RatingStore<S> {
    backend: S,
    book: RatingBook,
}

impl<S: KeyValueStore> RatingStore<S> {
    /// Load ratings from the backend
    ///
    /// Missing, unreadable or corrupt data yields an empty book.
    pub fn load(backend: S) -> Self {
        let book = match backend.get(STORAGE_KEY) {
            Ok(Some(json)) => RatingBook::from_json_str(&json).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Discarding unreadable ratings");
                RatingBook::new()
            }),
            Ok(None) => RatingBook::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Rating storage unavailable, starting empty");
                RatingBook::new()
            }
        };

        tracing::debug!(entries = book.len(), "Loaded ratings");
        Self { backend, book }
    }

    /// Set the star value for a shop and persist
    ///
    /// An out-of-range value is rejected without touching the book. When the
    /// write fails, the in-memory change is kept and the error is returned.
    pub fn set_rating(&mut self, id: ShopId, stars: u8) -> RatingResult<()> {
        let stars = Stars::new(stars)?;
        self.book.set_rating(id, stars);
        self.persist()
    }

    /// Set the note for a shop and persist
    pub fn set_note(&mut self, id: ShopId, note: impl Into<String>) -> RatingResult<()> {
        self.book.set_note(id, note);
        self.persist()
    }

    /// Drop every entry and remove the persisted key
    pub fn clear(&mut self) -> RatingResult<()> {
        self.book.clear();
        self.backend.remove(STORAGE_KEY)?;
        Ok(())
    }

    pub fn rating(&self, id: ShopId) -> Option<Stars> {
        self.book.rating(id)
    }

    pub fn note(&self, id: ShopId) -> Option<&str> {
        self.book.note(id)
    }

    pub fn entry(&self, id: ShopId) -> Option<&RatingEntry> {
        self.book.entry(id)
    }

    pub fn book(&self) -> &RatingBook {
        &self.book
    }

    /// The persisted representation, as written to the backend
    pub fn export_json(&self) -> String {
        self.book.to_json_string()
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    fn persist(&mut self) -> RatingResult<()> {
        let json = self.book.to_json_string();
        self.backend.set(STORAGE_KEY, &json).map_err(|e| {
            tracing::error!(error = %e, "Failed to persist ratings");
            e
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ratings::RatingError;

    /// Backend whose writes always fail
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Backend("quota exceeded".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }

    /// Backend whose reads always fail
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Ok(())
        }

        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Ok(())
        }
    }

    #[test]
    fn test_load_empty_when_absent() {
        let store = RatingStore::load(MemoryStore::new());
        assert!(store.book().is_empty());
    }

    #[test]
    fn test_load_empty_when_corrupt() {
        let backend = MemoryStore::new().with_item(STORAGE_KEY, "{{{ definitely not json");
        let store = RatingStore::load(backend);
        assert!(store.book().is_empty());

        let store = RatingStore::load(BrokenStore);
        assert!(store.book().is_empty());
    }

    #[test]
    fn test_load_existing_session() {
        let backend = MemoryStore::new().with_item(STORAGE_KEY, r#"{"2": 5, "2-note": "wow"}"#);
        let store = RatingStore::load(backend);
        assert_eq!(store.rating(2).map(Stars::get), Some(5));
        assert_eq!(store.note(2), Some("wow"));
    }

    #[test]
    fn test_set_rating_then_reread() {
        for k in 1..=5u8 {
            let mut store = RatingStore::load(MemoryStore::new());
            store.set_note(9, "keep me").unwrap();
            store.set_rating(9, k).unwrap();

            let reloaded = RatingStore::load(store.into_backend());
            assert_eq!(reloaded.rating(9).map(Stars::get), Some(k));
            assert_eq!(reloaded.note(9), Some("keep me"));
        }
    }

    #[test]
    fn test_set_note_leaves_rating() {
        let mut store = RatingStore::load(MemoryStore::new());
        store.set_rating(1, 3).unwrap();
        store.set_note(1, "nutty").unwrap();
        store.set_note(1, "chocolatey").unwrap();

        let reloaded = RatingStore::load(store.into_backend());
        assert_eq!(reloaded.rating(1).map(Stars::get), Some(3));
        assert_eq!(reloaded.note(1), Some("chocolatey"));
    }

    #[test]
    fn test_every_mutation_writes_through() {
        let mut store = RatingStore::load(MemoryStore::new());
        store.set_rating(1, 4).unwrap();
        store.set_note(1, "a").unwrap();
        store.set_note(1, "ab").unwrap();
        assert_eq!(store.backend().writes(), 3);

        let persisted = store.backend().get(STORAGE_KEY).unwrap().unwrap();
        assert_eq!(persisted, store.export_json());
    }

    #[test]
    fn test_invalid_stars_not_written() {
        let mut store = RatingStore::load(MemoryStore::new());
        assert!(matches!(
            store.set_rating(1, 0),
            Err(RatingError::InvalidStars(0))
        ));
        assert!(store.rating(1).is_none());
        assert_eq!(store.backend().writes(), 0);
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let mut store = RatingStore::load(ReadOnlyStore);
        let result = store.set_rating(1, 5);
        assert!(matches!(result, Err(RatingError::Store(_))));
        assert_eq!(store.rating(1).map(Stars::get), Some(5));
    }

    #[test]
    fn test_clear_removes_key() {
        let mut store = RatingStore::load(MemoryStore::new());
        store.set_rating(1, 2).unwrap();
        store.clear().unwrap();

        assert!(store.book().is_empty());
        assert!(store.backend().get(STORAGE_KEY).unwrap().is_none());
    }
}
