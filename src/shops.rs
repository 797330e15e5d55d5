//! Shop Dataset
//!
//! The fixed collection of coffee shops bundled with the application.
//! The catalog is parsed once from JSON and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Dataset embedded at build time
const BUNDLED_SHOPS: &str = include_str!("../data/shops.json");

/// Shop identifier, unique within a catalog
pub type ShopId = u32;

/// A specialty coffee venue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Shop {
    pub id: ShopId,
    pub name: String,
    pub city: String,
    pub address: String,
    pub website: String,
    pub lat: f64,
    pub lng: f64,
    /// Short description shown in popups and the side panel
    pub desc: String,
    /// Pre-baked average rating, display only
    pub rating: f64,
}

/// Errors raised while loading a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Dataset is not a JSON array of shops
    #[error("Invalid shop dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share an id
    #[error("Duplicate shop id: {0}")]
    DuplicateId(ShopId),

    /// Latitude or longitude is NaN, infinite, or out of range
    #[error("Shop {id} has invalid coordinates ({lat}, {lng})")]
    InvalidCoordinate { id: ShopId, lat: f64, lng: f64 },
}

/// Read-only collection of shops, in dataset order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShopCatalog {
    shops: Vec<Shop>,
}

impl ShopCatalog {
    /// Parse and validate a catalog from a JSON array
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let shops: Vec<Shop> = serde_json::from_str(json)?;
        Self::new(shops)
    }

    /// Build a catalog, rejecting duplicate ids and bad coordinates
    pub fn new(shops: Vec<Shop>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(shops.len());
        for shop in &shops {
            if !seen.insert(shop.id) {
                return Err(CatalogError::DuplicateId(shop.id));
            }
            let lat_ok = shop.lat.is_finite() && (-90.0..=90.0).contains(&shop.lat);
            let lng_ok = shop.lng.is_finite() && (-180.0..=180.0).contains(&shop.lng);
            if !lat_ok || !lng_ok {
                return Err(CatalogError::InvalidCoordinate {
                    id: shop.id,
                    lat: shop.lat,
                    lng: shop.lng,
                });
            }
        }

        tracing::debug!(count = shops.len(), "Loaded shop catalog");
        Ok(Self { shops })
    }

    /// The dataset shipped with the application
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_SHOPS)
    }

    /// Look up a shop by exact id
    pub fn find(&self, id: ShopId) -> Option<&Shop> {
        self.shops.iter().find(|shop| shop.id == id)
    }

    pub fn shops(&self) -> &[Shop] {
        &self.shops
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shop> {
        self.shops.iter()
    }

    pub fn len(&self) -> usize {
        self.shops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shops.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn test_shop(id: ShopId, name: &str, lat: f64, lng: f64) -> Shop {
    Shop {
        id,
        name: name.to_string(),
        city: "Atlanta".to_string(),
        address: format!("{} Peachtree St", id),
        website: format!("https://example.com/{}", id),
        lat,
        lng,
        desc: "Test shop".to_string(),
        rating: 4.0,
    }
}
