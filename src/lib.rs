//! # Coffee SNOB
//!
//! Find specialty coffee shops on a map and keep your own star ratings and
//! tasting notes for them. Ratings stay on the visitor's device.
//!
//! ## Modules
//!
//! - [`shops`]: the bundled, read-only shop dataset
//! - [`ratings`]: per-shop stars and notes with write-through persistence
//! - [`location`]: device position and the list view's state machine
//! - [`map`]: map framing, markers, Web Mercator and tile math
//! - [`views`]: view models for the home, list and detail screens
//! - `api`: Axum server hosting the frontend (feature `native`)
//!
//! ## Quick Start
//!
//! ```rust
//! use coffee_snob::ratings::{MemoryStore, RatingStore};
//! use coffee_snob::shops::ShopCatalog;
//!
//! let catalog = ShopCatalog::bundled().unwrap();
//! let first = catalog.shops()[0].id;
//!
//! let mut ratings = RatingStore::load(MemoryStore::new());
//! ratings.set_rating(first, 5).unwrap();
//! ratings.set_note(first, "Bold & balanced!").unwrap();
//!
//! assert_eq!(ratings.rating(first).map(|s| s.get()), Some(5));
//! ```

pub mod location;
pub mod map;
pub mod ratings;
pub mod shops;
pub mod views;

#[cfg(feature = "native")]
pub mod api;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;

// Re-export top-level types for convenience
pub use location::{
    Coordinate, GeoOutcome, LocationState, PositionSource, ViewPhase, FALLBACK_COORDINATE,
};

pub use map::{MapView, Marker, MarkerKind, TileLayer, Viewport};

pub use ratings::{
    KeyValueStore, MemoryStore, RatingBook, RatingEntry, RatingError, RatingStore, Stars,
    StoreError,
};

pub use shops::{CatalogError, Shop, ShopCatalog, ShopId};

pub use views::{PanelEntry, ShopDetailView, ShopListView, StarRow};

#[cfg(feature = "native")]
pub use api::{build_router, serve, ApiError, AppState};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig, RatingsConfig, ServerConfig};
