//! Map viewport: what part of the world is on screen and which tiles cover it

use serde::{Deserialize, Serialize};

use super::projection::{self, Point, TILE_SIZE};
use crate::location::Coordinate;

pub const MIN_ZOOM: u8 = 2;
pub const MAX_ZOOM: u8 = 18;

/// Slippy-map tile address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

/// A tile and where its top-left corner lands on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedTile {
    pub id: TileId,
    pub left: f64,
    pub top: f64,
}

/// Raster tile source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayer {
    /// URL with `{z}`, `{x}`, `{y}` placeholders
    pub url_template: String,
    /// HTML attribution that must be displayed with the tiles
    pub attribution: String,
    pub attribution_url: String,
}

impl TileLayer {
    pub fn openstreetmap() -> Self {
        Self {
            url_template: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "© OpenStreetMap contributors".to_string(),
            attribution_url: "https://www.openstreetmap.org/copyright".to_string(),
        }
    }

    pub fn tile_url(&self, tile: TileId) -> String {
        self.url_template
            .replace("{z}", &tile.z.to_string())
            .replace("{x}", &tile.x.to_string())
            .replace("{y}", &tile.y.to_string())
    }
}

impl Default for TileLayer {
    fn default() -> Self {
        Self::openstreetmap()
    }
}

/// Screen-sized window onto the map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    center: Coordinate,
    zoom: u8,
    width: f64,
    height: f64,
}

impl Viewport {
    pub fn new(center: Coordinate, zoom: u8, width: f64, height: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// World pixel at the screen's top-left corner
    fn origin(&self) -> Point {
        let c = projection::project(self.center, self.zoom);
        Point::new(c.x - self.width / 2.0, c.y - self.height / 2.0)
    }

    /// Screen position of a coordinate, relative to the top-left corner
    pub fn project(&self, coordinate: Coordinate) -> Point {
        let origin = self.origin();
        let p = projection::project(coordinate, self.zoom);
        Point::new(p.x - origin.x, p.y - origin.y)
    }

    /// Tiles covering the screen, wrapping horizontally around the globe
    pub fn visible_tiles(&self) -> Vec<PlacedTile> {
        if self.width == 0.0 || self.height == 0.0 {
            return Vec::new();
        }

        let origin = self.origin();
        let tiles_per_side = 1i64 << self.zoom;

        let first_x = (origin.x / TILE_SIZE).floor() as i64;
        let last_x = ((origin.x + self.width) / TILE_SIZE).ceil() as i64 - 1;
        let first_y = ((origin.y / TILE_SIZE).floor() as i64).max(0);
        let last_y = (((origin.y + self.height) / TILE_SIZE).ceil() as i64 - 1).min(tiles_per_side - 1);

        let mut tiles = Vec::new();
        for ty in first_y..=last_y {
            for tx in first_x..=last_x {
                tiles.push(PlacedTile {
                    id: TileId {
                        x: tx.rem_euclid(tiles_per_side) as u32,
                        y: ty as u32,
                        z: self.zoom,
                    },
                    left: tx as f64 * TILE_SIZE - origin.x,
                    top: ty as f64 * TILE_SIZE - origin.y,
                });
            }
        }
        tiles
    }

    /// Move the map by a screen-pixel drag delta
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        let c = projection::project(self.center, self.zoom);
        self.center = projection::unproject(Point::new(c.x - dx, c.y - dy), self.zoom);
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(1).max(MIN_ZOOM);
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }
}
