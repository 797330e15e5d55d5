//! User ratings and notes
//!
//! - [`types`]: `Stars`, `RatingEntry`, `RatingBook` and the flat wire format
//! - [`store`]: the `KeyValueStore` seam and the write-through `RatingStore`
//! - `file`: a JSON-file backend for native builds

pub mod error;
#[cfg(feature = "native")]
pub mod file;
pub mod store;
pub mod types;

pub use error::{RatingError, RatingResult, StoreError};
#[cfg(feature = "native")]
pub use file::FileStore;
pub use store::{KeyValueStore, MemoryStore, RatingStore, STORAGE_KEY};
pub use types::{RatingBook, RatingEntry, Stars};
