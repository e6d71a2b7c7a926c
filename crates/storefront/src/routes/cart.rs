//! Cart route handlers.
//!
//! Cart lines are addressed by position, exactly as the store exposes them:
//! the `index` a client sends refers to the current order of the cart array.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use vitrina_core::ProductId;

use crate::error::{AppError, Result};
use crate::models::CartLine;
use crate::state::AppState;

/// Cart display data returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartLine>,
    pub subtotal: String,
    pub item_count: u32,
}

impl From<Vec<CartLine>> for CartView {
    fn from(items: Vec<CartLine>) -> Self {
        let subtotal: Decimal = items
            .iter()
            .map(|line| line.unit_price.amount * Decimal::from(line.quantity))
            .sum();
        let item_count = items
            .iter()
            .map(|line| line.quantity)
            .fold(0u32, u32::saturating_add);

        Self {
            items,
            subtotal: format!("${subtotal:.2}"),
            item_count,
        }
    }
}

/// Add to cart payload.
#[derive(Debug, Deserialize)]
pub struct AddToCartPayload {
    pub product_id: i32,
    pub quantity: Option<u32>,
    pub selected_color: Option<String>,
    pub selected_size: Option<String>,
}

/// Update quantity payload.
#[derive(Debug, Deserialize)]
pub struct UpdateCartPayload {
    pub index: usize,
    pub quantity: i64,
}

/// Remove from cart payload.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartPayload {
    pub index: usize,
}

/// Display the cart.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    Json(CartView::from(state.store().cart()))
}

/// Add an item to the cart.
///
/// The product is resolved from the catalog so the line carries the listed
/// name, price, image, and shop. A line matching the same (product, color,
/// size) merges instead of appending.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Json(payload): Json<AddToCartPayload>,
) -> Result<Json<CartView>> {
    let product_id = ProductId::new(payload.product_id);
    let product = state
        .catalog()
        .product(product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    let line = CartLine {
        product_id,
        name: product.name.clone(),
        unit_price: product.price,
        image: product.image.clone(),
        quantity: payload.quantity.unwrap_or(1).max(1),
        shop_id: product.shop_id,
        selected_color: payload.selected_color,
        selected_size: payload.selected_size,
    };

    Ok(Json(CartView::from(state.store().add_to_cart(line))))
}

/// Update the quantity of the line at a position. Clamped to a minimum of 1.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Json(payload): Json<UpdateCartPayload>,
) -> Json<CartView> {
    Json(CartView::from(
        state.store().update_quantity(payload.index, payload.quantity),
    ))
}

/// Remove the line at a position.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Json(payload): Json<RemoveFromCartPayload>,
) -> Json<CartView> {
    Json(CartView::from(state.store().remove_from_cart(payload.index)))
}

/// Empty the cart.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Json<CartView> {
    Json(CartView::from(state.store().clear_cart()))
}

#[cfg(test)]
mod tests {
    use vitrina_core::{Price, ShopId};

    use super::*;

    fn line(quantity: u32, cents: i64) -> CartLine {
        CartLine {
            product_id: ProductId::new(1),
            name: "Graphic Tee".to_string(),
            unit_price: Price::usd_cents(cents),
            image: "tee.jpg".to_string(),
            quantity,
            shop_id: ShopId::new(3),
            selected_color: None,
            selected_size: None,
        }
    }

    #[test]
    fn test_cart_view_totals() {
        let view = CartView::from(vec![line(2, 1999), line(1, 500)]);
        assert_eq!(view.subtotal, "$44.98");
        assert_eq!(view.item_count, 3);
    }

    #[test]
    fn test_cart_view_count_saturates() {
        let view = CartView::from(vec![line(u32::MAX, 100), line(2, 100)]);
        assert_eq!(view.item_count, u32::MAX);
    }

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::from(Vec::new());
        assert_eq!(view.subtotal, "$0.00");
        assert_eq!(view.item_count, 0);
    }
}
