//! Shop route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use vitrina_core::ShopId;

use crate::error::{AppError, Result};
use crate::models::{Product, Shop};
use crate::state::AppState;

/// List all shops.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<Shop>> {
    Json(state.catalog().shops().to_vec())
}

/// Show a shop.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Shop>> {
    let shop_id = ShopId::new(id);
    state
        .catalog()
        .shop(shop_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("shop {shop_id}")))
}

/// List a shop's products.
#[instrument(skip(state))]
pub async fn products(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<Product>>> {
    let shop_id = ShopId::new(id);
    if state.catalog().shop(shop_id).is_none() {
        return Err(AppError::NotFound(format!("shop {shop_id}")));
    }
    Ok(Json(
        state
            .catalog()
            .products_by_shop(shop_id)
            .into_iter()
            .cloned()
            .collect(),
    ))
}
