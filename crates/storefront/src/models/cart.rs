//! Cart domain types.

use serde::{Deserialize, Serialize};

use vitrina_core::{Price, ProductId, ShopId};

/// One distinct (product, color, size) entry in the cart with its own
/// quantity.
///
/// Lines are merged on add when their merge key matches; quantity never
/// drops below 1 once the line exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Product name, denormalized for display.
    pub name: String,
    /// Price per unit at the time the line was added.
    pub unit_price: Price,
    /// Product image URL, denormalized for display.
    pub image: String,
    /// Number of units. Always >= 1.
    pub quantity: u32,
    /// Shop the product belongs to.
    pub shop_id: ShopId,
    /// Color variant chosen by the shopper, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<String>,
    /// Size variant chosen by the shopper, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<String>,
}

impl CartLine {
    /// Merge identity for this line.
    ///
    /// Two adds with the same key collapse into a single line whose quantity
    /// is the sum of the added quantities.
    #[must_use]
    pub fn merge_key(&self) -> (ProductId, Option<&str>, Option<&str>) {
        (
            self.product_id,
            self.selected_color.as_deref(),
            self.selected_size.as_deref(),
        )
    }
}
