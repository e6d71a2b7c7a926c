//! Favorites route handlers.

use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::instrument;

use vitrina_core::ProductId;

use crate::state::AppState;

/// Toggle favorite payload.
#[derive(Debug, Deserialize)]
pub struct ToggleFavoritePayload {
    pub product_id: i32,
}

/// List favorited product IDs.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<Vec<ProductId>> {
    Json(state.store().favorites())
}

/// Toggle a product in the favorites set.
///
/// The product does not have to exist in the catalog: favorites are a bare
/// ID set, resolved at render time like every other reference.
#[instrument(skip(state))]
pub async fn toggle(
    State(state): State<AppState>,
    Json(payload): Json<ToggleFavoritePayload>,
) -> Json<Vec<ProductId>> {
    Json(state.store().toggle_favorite(ProductId::new(payload.product_id)))
}
