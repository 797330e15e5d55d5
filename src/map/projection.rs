//! Web Mercator projection
//!
//! World pixel space at zoom `z` is a square of `TILE_SIZE * 2^z` pixels,
//! origin at the north-west corner (lat ~85.05, lng -180).

use crate::location::Coordinate;

/// Edge length of a map tile in pixels
pub const TILE_SIZE: f64 = 256.0;

/// Latitude limit of the square Mercator world
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// A point in world or screen pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// World size in pixels at a zoom level
pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * f64::from(1u32 << zoom)
}

/// Coordinate to world pixels
pub fn project(coordinate: Coordinate, zoom: u8) -> Point {
    let size = world_size(zoom);
    let lat = coordinate.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

    let x = (coordinate.lng + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) / 2.0 * size;
    Point::new(x, y)
}

/// World pixels to coordinate, wrapping longitude into [-180, 180)
pub fn unproject(point: Point, zoom: u8) -> Coordinate {
    let size = world_size(zoom);

    let lng = point.x / size * 360.0 - 180.0;
    let lng = (lng + 180.0).rem_euclid(360.0) - 180.0;

    let n = std::f64::consts::PI * (1.0 - 2.0 * point.y / size);
    let lat = n.sinh().atan().to_degrees();
    Coordinate::new(lat.clamp(-MAX_LATITUDE, MAX_LATITUDE), lng)
}
