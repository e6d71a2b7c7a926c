//! Catalog domain types.
//!
//! Catalog records are immutable: they are seeded once at startup and only
//! ever read. References between them (product -> shop, review -> product)
//! are plain IDs resolved by lookup at read time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use vitrina_core::{Price, ProductId, ReviewId, ShopId};

/// A shop on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub id: ShopId,
    pub name: String,
    pub logo: String,
    pub banner: String,
    pub description: String,
    pub rating: f64,
    pub total_products: u32,
    pub category: String,
    pub is_verified: bool,
}

/// A product listed by a shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Pre-discount price, when the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    pub image: String,
    pub category: String,
    pub description: String,
    pub rating: f64,
    pub review_count: u32,
    pub in_stock: bool,
    pub shop_id: ShopId,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
}

/// A customer review of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}
