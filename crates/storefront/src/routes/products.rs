//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use vitrina_core::ProductId;

use crate::error::{AppError, Result};
use crate::models::{Product, Review};
use crate::state::AppState;

/// Product listing filters.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

/// List products, optionally filtered by category.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Product>> {
    let products = match &query.category {
        Some(category) => state
            .catalog()
            .products_by_category(category)
            .into_iter()
            .cloned()
            .collect(),
        None => state.catalog().products().to_vec(),
    };
    Json(products)
}

/// Show a product.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Product>> {
    let product_id = ProductId::new(id);
    state
        .catalog()
        .product(product_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))
}

/// List a product's reviews.
#[instrument(skip(state))]
pub async fn reviews(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<Review>>> {
    let product_id = ProductId::new(id);
    if state.catalog().product(product_id).is_none() {
        return Err(AppError::NotFound(format!("product {product_id}")));
    }
    Ok(Json(
        state
            .catalog()
            .reviews_for(product_id)
            .into_iter()
            .cloned()
            .collect(),
    ))
}
