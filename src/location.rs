//! User position and the list view's location state machine
//!
//! ```text
//! Locating ──resolve(Located)────▶ Ready { Device, no error }
//!          ──resolve(Failed)─────▶ Ready { Fallback, error }   (banner)
//!          ──resolve(Unavailable)▶ Ready { Unknown, no error }
//! ```

use serde::{Deserialize, Serialize};

/// Message shown when the device refuses or fails to report a position
pub const LOCATION_DENIED_MESSAGE: &str =
    "Location access denied. Using default view. Enable location for nearby spots.";

/// Atlanta city center
pub const FALLBACK_COORDINATE: Coordinate = Coordinate {
    lat: 33.7490,
    lng: -84.3880,
};

/// A WGS84 latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lng)
    }
}

/// Result of asking the device for its position
#[derive(Debug, Clone, PartialEq)]
pub enum GeoOutcome {
    Located(Coordinate),
    /// Denied, timed out, or otherwise failed; carries the platform's reason
    Failed(String),
    /// The platform has no geolocation capability at all
    Unavailable,
}

/// Where the view's position came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionSource {
    Device(Coordinate),
    Fallback,
    Unknown,
}

impl PositionSource {
    /// Coordinate the view should use, if any
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            PositionSource::Device(c) => Some(*c),
            PositionSource::Fallback => Some(FALLBACK_COORDINATE),
            PositionSource::Unknown => None,
        }
    }

    /// The device's real position; never the fallback
    pub fn device(&self) -> Option<Coordinate> {
        match self {
            PositionSource::Device(c) => Some(*c),
            _ => None,
        }
    }
}

/// Observable phase of the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Loading,
    Ready,
    ReadyWithError,
}

/// Location state of a mounted list view
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LocationState {
    #[default]
    Locating,
    Ready {
        source: PositionSource,
        error: Option<String>,
    },
}

impl LocationState {
    /// Apply the fallback policy to a geolocation outcome
    pub fn resolve(outcome: GeoOutcome) -> Self {
        match outcome {
            GeoOutcome::Located(coordinate) => {
                tracing::debug!(%coordinate, "Device position resolved");
                LocationState::Ready {
                    source: PositionSource::Device(coordinate),
                    error: None,
                }
            }
            GeoOutcome::Failed(reason) => {
                tracing::warn!(%reason, "Geolocation failed, using fallback");
                LocationState::Ready {
                    source: PositionSource::Fallback,
                    error: Some(LOCATION_DENIED_MESSAGE.to_string()),
                }
            }
            GeoOutcome::Unavailable => LocationState::Ready {
                source: PositionSource::Unknown,
                error: None,
            },
        }
    }

    pub fn phase(&self) -> ViewPhase {
        match self {
            LocationState::Locating => ViewPhase::Loading,
            LocationState::Ready { error: None, .. } => ViewPhase::Ready,
            LocationState::Ready { error: Some(_), .. } => ViewPhase::ReadyWithError,
        }
    }

    pub fn source(&self) -> Option<PositionSource> {
        match self {
            LocationState::Locating => None,
            LocationState::Ready { source, .. } => Some(*source),
        }
    }

    /// The position the view uses, including the fallback
    pub fn position(&self) -> Option<Coordinate> {
        self.source().and_then(|s| s.coordinate())
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LocationState::Ready { error, .. } => error.as_deref(),
            LocationState::Locating => None,
        }
    }
}
