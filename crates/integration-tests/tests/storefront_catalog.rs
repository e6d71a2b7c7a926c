//! Integration tests for the storefront catalog API.
//!
//! These tests require:
//! - The storefront server running (cargo run -p vitrina-storefront)
//!
//! Run with: cargo test -p vitrina-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::Value;
use vitrina_core::ProductId;
use vitrina_storefront::models::{Product, Review, Shop};

/// Base URL for the storefront API (configurable via environment).
fn base_url() -> String {
    std::env::var("VITRINA_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

fn client() -> Client {
    Client::builder().build().expect("Failed to create HTTP client")
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_health() {
    let resp = client()
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("Failed to reach health endpoint");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("Failed to read body"), "ok");
}

// ============================================================================
// Shops
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_shop_listing_and_detail() {
    let base = base_url();
    let client = client();

    let resp = client
        .get(format!("{base}/api/shops"))
        .send()
        .await
        .expect("Failed to list shops");
    assert_eq!(resp.status(), StatusCode::OK);

    let shops: Vec<Shop> = resp.json().await.expect("Failed to parse shops");
    assert!(!shops.is_empty());

    let id = shops[0].id;
    let resp = client
        .get(format!("{base}/api/shops/{id}"))
        .send()
        .await
        .expect("Failed to get shop");
    assert_eq!(resp.status(), StatusCode::OK);

    let shop: Shop = resp.json().await.expect("Failed to parse shop");
    assert_eq!(shop.id, id);
    assert_eq!(shop.name, shops[0].name);
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_unknown_shop_is_404() {
    let resp = client()
        .get(format!("{}/api/shops/999999", base_url()))
        .send()
        .await
        .expect("Failed to get shop");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("Failed to parse error body");
    assert!(body["error"].is_string());
}

// ============================================================================
// Products
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_product_listing_with_category_filter() {
    let base = base_url();
    let client = client();

    let resp = client
        .get(format!("{base}/api/products"))
        .send()
        .await
        .expect("Failed to list products");
    assert_eq!(resp.status(), StatusCode::OK);
    let all: Vec<Product> = resp.json().await.expect("Failed to parse products");
    assert!(!all.is_empty());

    let category = all[0].category.clone();
    let resp = client
        .get(format!("{base}/api/products?category={category}"))
        .send()
        .await
        .expect("Failed to filter products");
    let filtered: Vec<Product> = resp.json().await.expect("Failed to parse products");
    assert!(!filtered.is_empty());
    assert!(filtered.len() <= all.len());
    for product in &filtered {
        assert_eq!(product.category, category);
    }
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_product_reviews() {
    let base = base_url();
    let client = client();

    let resp = client
        .get(format!("{base}/api/products/1/reviews"))
        .send()
        .await
        .expect("Failed to list reviews");
    assert_eq!(resp.status(), StatusCode::OK);

    let reviews: Vec<Review> = resp.json().await.expect("Failed to parse reviews");
    for review in &reviews {
        assert_eq!(review.product_id, ProductId::new(1));
    }
}

// ============================================================================
// Sizing
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_size_recommendation() {
    let resp = client()
        .post(format!("{}/api/size/recommendation", base_url()))
        .json(&serde_json::json!({
            "height_cm": 170.0,
            "weight_kg": 65.0,
            "body_type": "pear"
        }))
        .send()
        .await
        .expect("Failed to get recommendation");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse recommendation");
    assert_eq!(body["general_size"].as_str(), Some("M"));
    assert!(body["shoe_size"].as_u64().is_some());
    assert!(!body["notes"].as_array().expect("notes").is_empty());
}

// ============================================================================
// Style & Rewards
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_style_quiz_profile() {
    let resp = client()
        .post(format!("{}/api/style/profile", base_url()))
        .json(&serde_json::json!({
            "lifestyle": "professional",
            "colors": "dark",
            "fit": "fitted",
            "budget": "100to200",
            "occasions": "work"
        }))
        .send()
        .await
        .expect("Failed to post quiz");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse profile");
    assert_eq!(body["profile"].as_str(), Some("classic"));
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_rewards_status() {
    let resp = client()
        .get(format!("{}/api/rewards/status?points=1250", base_url()))
        .send()
        .await
        .expect("Failed to get rewards status");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse status");
    assert_eq!(body["tier"].as_str(), Some("silver"));
    assert_eq!(body["next_tier_points"].as_u64(), Some(2000));
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_size_recommendation_rejects_bad_measurements() {
    let resp = client()
        .post(format!("{}/api/size/recommendation", base_url()))
        .json(&serde_json::json!({
            "height_cm": 0.0,
            "weight_kg": 65.0,
            "body_type": "apple"
        }))
        .send()
        .await
        .expect("Failed to post measurements");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
