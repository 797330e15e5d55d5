//! View models for the three screens
//!
//! The frontend renders these; keeping them free of DOM types lets the
//! routing and rendering decisions be tested natively.

use crate::location::LocationState;
use crate::map::MapView;
use crate::ratings::{RatingBook, Stars};
use crate::shops::{Shop, ShopCatalog, ShopId};

pub const SHOP_NOT_FOUND_MESSAGE: &str = "Shop not found";

/// Acknowledgment for the decorative "Save Take" button
pub const SAVE_TAKE_MESSAGE: &str = "Saved! Your snob cred ↑ ☕";

pub const NOTE_PLACEHOLDER: &str = "Quick note (e.g., 'Bold & balanced!')";

/// Outcome of the `/shops/{id}` route
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShopDetailView<'a> {
    Found(&'a Shop),
    NotFound,
}

impl<'a> ShopDetailView<'a> {
    /// Resolve a raw path segment against the catalog
    ///
    /// Anything that is not an exact integer id, or an id missing from the
    /// catalog, is `NotFound`.
    pub fn resolve(catalog: &'a ShopCatalog, segment: &str) -> Self {
        match segment.parse::<ShopId>() {
            Ok(id) => Self::for_id(catalog, id),
            Err(_) => {
                tracing::debug!(segment, "Non-numeric shop id");
                ShopDetailView::NotFound
            }
        }
    }

    pub fn for_id(catalog: &'a ShopCatalog, id: ShopId) -> Self {
        catalog
            .find(id)
            .map(ShopDetailView::Found)
            .unwrap_or(ShopDetailView::NotFound)
    }

    pub fn shop(&self) -> Option<&'a Shop> {
        match self {
            ShopDetailView::Found(shop) => Some(shop),
            ShopDetailView::NotFound => None,
        }
    }
}

/// Five star toggles; `active[i]` is star `i + 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRow {
    pub active: [bool; 5],
}

impl StarRow {
    pub fn new(stored: Option<Stars>) -> Self {
        let value = stored.map(Stars::get).unwrap_or(0);
        let mut active = [false; 5];
        for (i, slot) in active.iter_mut().enumerate() {
            *slot = (i as u8) < value;
        }
        Self { active }
    }

    /// Whether star `k` (1-based) is lit
    pub fn is_active(&self, k: u8) -> bool {
        (1..=5).contains(&k) && self.active[usize::from(k - 1)]
    }
}

/// One shop in the side panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelEntry<'a> {
    pub shop: &'a Shop,
}

impl<'a> PanelEntry<'a> {
    pub fn stars(&self, book: &RatingBook) -> StarRow {
        StarRow::new(book.rating(self.shop.id))
    }

    /// Stored note, empty when none
    pub fn note<'b>(&self, book: &'b RatingBook) -> &'b str {
        book.note(self.shop.id).unwrap_or("")
    }
}

/// The `/shops` screen once location has resolved
#[derive(Debug, Clone, PartialEq)]
pub struct ShopListView<'a> {
    pub map: MapView,
    pub panel: Vec<PanelEntry<'a>>,
    /// Error banner text; present only after a geolocation failure
    pub banner: Option<&'a str>,
}

impl<'a> ShopListView<'a> {
    /// `None` while the location is still being resolved
    pub fn build(catalog: &'a ShopCatalog, location: &'a LocationState) -> Option<Self> {
        let source = location.source()?;

        Some(Self {
            map: MapView::build(catalog, source),
            panel: catalog.iter().map(|shop| PanelEntry { shop }).collect(),
            banner: location.error_message(),
        })
    }
}

/// Pre-baked rating label used in popups and the panel
pub fn average_label(shop: &Shop) -> String {
    format!("Avg: {}/5", shop.rating)
}

/// Client route for a shop's detail page
pub fn detail_path(id: ShopId) -> String {
    format!("/shops/{}", id)
}
