//! Data Transfer Objects
//!
//! Response types for the API endpoints.

use serde::Serialize;

use crate::shops::Shop;

/// Shop list response
#[derive(Debug, Serialize)]
pub struct ShopListResponse {
    pub shops: Vec<Shop>,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Number of shops in the dataset
    pub shops: usize,
    /// Frontend bundle status: ok, missing
    pub frontend: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
