//! Map model
//!
//! Everything the map widget needs that does not touch the DOM: where to
//! center, how far to zoom, which markers to place, and the tile math for
//! drawing a raster slippy map.

pub mod projection;
pub mod viewport;

pub use projection::{Point, TILE_SIZE};
pub use viewport::{PlacedTile, TileId, TileLayer, Viewport, MAX_ZOOM, MIN_ZOOM};

use serde::Serialize;

use crate::location::{Coordinate, PositionSource, FALLBACK_COORDINATE};
use crate::shops::{ShopCatalog, ShopId};

/// Zoom when the device position is known
pub const LOCATED_ZOOM: u8 = 12;

/// Zoom when showing the fallback region
pub const OVERVIEW_ZOOM: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum MarkerKind {
    Shop(ShopId),
    /// "You are here"
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    pub kind: MarkerKind,
    pub position: Coordinate,
}

/// Initial map framing plus markers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: Coordinate,
    pub zoom: u8,
    pub markers: Vec<Marker>,
}

impl MapView {
    /// Frame the map for a resolved position
    ///
    /// Only a real device position zooms in and gets a "you are here"
    /// marker; the fallback is framed like an unknown position.
    pub fn build(catalog: &ShopCatalog, source: PositionSource) -> Self {
        let device = source.device();

        let mut markers: Vec<Marker> = catalog
            .iter()
            .map(|shop| Marker {
                kind: MarkerKind::Shop(shop.id),
                position: Coordinate::new(shop.lat, shop.lng),
            })
            .collect();

        if let Some(position) = device {
            markers.push(Marker {
                kind: MarkerKind::User,
                position,
            });
        }

        Self {
            center: source.coordinate().unwrap_or(FALLBACK_COORDINATE),
            zoom: if device.is_some() { LOCATED_ZOOM } else { OVERVIEW_ZOOM },
            markers,
        }
    }

    /// A viewport of the given screen size showing this framing
    pub fn viewport(&self, width: f64, height: f64) -> Viewport {
        Viewport::new(self.center, self.zoom, width, height)
    }

    pub fn shop_markers(&self) -> impl Iterator<Item = (ShopId, Coordinate)> + '_ {
        self.markers.iter().filter_map(|m| match m.kind {
            MarkerKind::Shop(id) => Some((id, m.position)),
            MarkerKind::User => None,
        })
    }

    pub fn user_marker(&self) -> Option<Coordinate> {
        self.markers
            .iter()
            .find(|m| m.kind == MarkerKind::User)
            .map(|m| m.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shops::test_shop;

    fn catalog() -> ShopCatalog {
        ShopCatalog::new(vec![test_shop(1, "Test Roast", 10.0, 20.0)]).unwrap()
    }

    #[test]
    fn test_device_position_centers_and_zooms() {
        let view = MapView::build(&catalog(), PositionSource::Device(Coordinate::new(40.0, -75.0)));
        assert_eq!(view.center, Coordinate::new(40.0, -75.0));
        assert_eq!(view.zoom, 12);
        assert_eq!(view.user_marker(), Some(Coordinate::new(40.0, -75.0)));
    }

    #[test]
    fn test_fallback_is_wide() {
        let view = MapView::build(&catalog(), PositionSource::Fallback);
        assert_eq!(view.center, FALLBACK_COORDINATE);
        assert_eq!(view.zoom, 6);
        assert!(view.user_marker().is_none());

        let view = MapView::build(&catalog(), PositionSource::Unknown);
        assert_eq!(view.center, FALLBACK_COORDINATE);
        assert_eq!(view.zoom, 6);
    }

    #[test]
    fn test_one_marker_per_shop() {
        let view = MapView::build(&catalog(), PositionSource::Unknown);
        let shops: Vec<_> = view.shop_markers().collect();
        assert_eq!(shops, vec![(1, Coordinate::new(10.0, 20.0))]);
        assert_eq!(view.markers.len(), 1);
    }

    #[test]
    fn test_marker_serialization() {
        let marker = Marker {
            kind: MarkerKind::Shop(3),
            position: Coordinate::new(1.0, 2.0),
        };
        let json = serde_json::to_value(marker).unwrap();
        assert_eq!(json["kind"]["kind"], "shop");
        assert_eq!(json["kind"]["id"], 3);
    }
}
