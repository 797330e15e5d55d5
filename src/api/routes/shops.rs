//! Shop Routes
//!
//! Read-only access to the bundled dataset.
//!
//! - GET /api/v1/shops - List all shops
//! - GET /api/v1/shops/:id - Get a specific shop

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::ShopListResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::shops::{Shop, ShopId};

/// GET /api/v1/shops
pub async fn list_shops(State(state): State<Arc<AppState>>) -> Json<ShopListResponse> {
    let shops = state.catalog.shops().to_vec();

    Json(ShopListResponse {
        count: shops.len(),
        shops,
    })
}

/// GET /api/v1/shops/:id
pub async fn get_shop(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Shop>> {
    let id: ShopId = id
        .parse()
        .map_err(|_| ApiError::Validation(format!("Invalid shop id: {}", id)))?;

    let shop = state
        .catalog
        .find(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("Shop with id {} not found", id)))?;

    Ok(Json(shop))
}
