//! Immutable product catalog.
//!
//! The catalog is seeded once at startup and held in memory behind `Arc`s;
//! nothing mutates or persists it. Relations between records are plain IDs
//! resolved by lookup at read time, with no referential-integrity
//! enforcement beyond the lookup itself.

use std::sync::Arc;

use chrono::NaiveDate;

use vitrina_core::{Price, ProductId, ReviewId, ShopId};

use crate::models::{Product, Review, Shop};

/// Catalog store that holds all shop, product, and review records.
#[derive(Debug, Clone)]
pub struct Catalog {
    shops: Arc<Vec<Shop>>,
    products: Arc<Vec<Product>>,
    reviews: Arc<Vec<Review>>,
}

impl Catalog {
    /// Build the catalog from the seed dataset.
    #[must_use]
    pub fn seed() -> Self {
        Self {
            shops: Arc::new(seed_shops()),
            products: Arc::new(seed_products()),
            reviews: Arc::new(seed_reviews()),
        }
    }

    /// All shops.
    #[must_use]
    pub fn shops(&self) -> &[Shop] {
        &self.shops
    }

    /// Look up a shop by ID.
    #[must_use]
    pub fn shop(&self, id: ShopId) -> Option<&Shop> {
        self.shops.iter().find(|s| s.id == id)
    }

    /// All products.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products listed by a shop.
    #[must_use]
    pub fn products_by_shop(&self, shop_id: ShopId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.shop_id == shop_id)
            .collect()
    }

    /// Products in a category (case-insensitive match).
    #[must_use]
    pub fn products_by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Reviews for a product.
    #[must_use]
    pub fn reviews_for(&self, product_id: ProductId) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| r.product_id == product_id)
            .collect()
    }
}

fn shop(
    id: i32,
    name: &str,
    description: &str,
    rating: f64,
    total_products: u32,
    category: &str,
) -> Shop {
    Shop {
        id: ShopId::new(id),
        name: name.to_string(),
        logo: format!("/images/shops/{id}/logo.jpg"),
        banner: format!("/images/shops/{id}/banner.jpg"),
        description: description.to_string(),
        rating,
        total_products,
        category: category.to_string(),
        is_verified: true,
    }
}

fn seed_shops() -> Vec<Shop> {
    vec![
        shop(1, "CORE", "Har xil turdagi kiyim do'koni", 4.8, 24, "Clothing"),
        shop(2, "Zara", "Har xil turdagi kiyim do'koni", 4.6, 30, "Clothing"),
        shop(
            3,
            "PULL & BEAR",
            "Har xil turdagi kiyim do'koni",
            4.9,
            18,
            "Clothing",
        ),
        shop(
            4,
            "LC Waikiki",
            "Har xil turdagi kiyim do'koni",
            4.7,
            27,
            "Clothing",
        ),
        shop(
            5,
            "Pandora",
            "Kumush va oltin mahsulotlari",
            4.7,
            22,
            "Jewelry",
        ),
        shop(
            6,
            "Selfie",
            "Har xil turdagi kiyim do'koni",
            4.5,
            15,
            "Clothing",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: i32,
    name: &str,
    price_cents: i64,
    original_price_cents: Option<i64>,
    category: &str,
    description: &str,
    rating: f64,
    review_count: u32,
    shop_id: i32,
    colors: &[&str],
    sizes: &[&str],
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Price::usd_cents(price_cents),
        original_price: original_price_cents.map(Price::usd_cents),
        image: format!("/images/products/{id}.jpg"),
        category: category.to_string(),
        description: description.to_string(),
        rating,
        review_count,
        in_stock: true,
        shop_id: ShopId::new(shop_id),
        colors: colors.iter().map(ToString::to_string).collect(),
        sizes: sizes.iter().map(ToString::to_string).collect(),
    }
}

fn seed_products() -> Vec<Product> {
    vec![
        product(
            1,
            "Classic White Shirt",
            3999,
            Some(4999),
            "Shirts",
            "Crisp cotton shirt for everyday wear",
            4.7,
            34,
            1,
            &["White", "Blue"],
            &["S", "M", "L", "XL"],
        ),
        product(
            2,
            "Oversized Hoodie",
            5499,
            None,
            "Hoodies",
            "Relaxed fit hoodie in heavy fleece",
            4.8,
            51,
            1,
            &["Black", "Grey", "Beige"],
            &["M", "L", "XL"],
        ),
        product(
            3,
            "Slim Fit Chinos",
            4599,
            Some(5999),
            "Trousers",
            "Stretch chinos with a tapered leg",
            4.5,
            22,
            2,
            &["Navy", "Khaki"],
            &["S", "M", "L"],
        ),
        product(
            4,
            "Denim Jacket",
            8999,
            None,
            "Jackets",
            "Washed denim jacket with brass buttons",
            4.9,
            67,
            2,
            &["Blue", "Black"],
            &["S", "M", "L", "XL"],
        ),
        product(
            5,
            "Linen Summer Dress",
            6299,
            Some(7499),
            "Dresses",
            "Breathable linen dress for warm days",
            4.6,
            40,
            3,
            &["White", "Sage"],
            &["XS", "S", "M", "L"],
        ),
        product(
            6,
            "Graphic Tee",
            1999,
            None,
            "T-Shirts",
            "Soft cotton tee with seasonal print",
            4.3,
            18,
            3,
            &["White", "Black", "Red"],
            &["S", "M", "L", "XL"],
        ),
        product(
            7,
            "Wool Overcoat",
            15999,
            Some(18999),
            "Coats",
            "Tailored overcoat in a wool blend",
            4.8,
            29,
            4,
            &["Camel", "Charcoal"],
            &["M", "L", "XL"],
        ),
        product(
            8,
            "Running Sneakers",
            7999,
            None,
            "Shoes",
            "Lightweight sneakers with cushioned sole",
            4.4,
            55,
            4,
            &["White", "Black"],
            &["40", "41", "42", "43", "44"],
        ),
        product(
            9,
            "Silver Charm Bracelet",
            10999,
            None,
            "Jewelry",
            "Sterling silver bracelet with starter charm",
            4.9,
            73,
            5,
            &["Silver"],
            &[],
        ),
        product(
            10,
            "Pleated Midi Skirt",
            5299,
            Some(6499),
            "Skirts",
            "Flowy pleated skirt with elastic waist",
            4.5,
            26,
            6,
            &["Black", "Rose"],
            &["S", "M", "L"],
        ),
    ]
}

fn review(
    id: i32,
    product_id: i32,
    user_name: &str,
    rating: u8,
    comment: &str,
    date: (i32, u32, u32),
) -> Review {
    Review {
        id: ReviewId::new(id),
        product_id: ProductId::new(product_id),
        user_name: user_name.to_string(),
        rating,
        comment: comment.to_string(),
        // Seed dates are static and always valid
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
    }
}

fn seed_reviews() -> Vec<Review> {
    vec![
        review(
            1,
            1,
            "Dilnoza",
            5,
            "Great fit and the fabric feels premium.",
            (2024, 3, 14),
        ),
        review(
            2,
            1,
            "Timur",
            4,
            "Good shirt, runs slightly large.",
            (2024, 4, 2),
        ),
        review(
            3,
            2,
            "Madina",
            5,
            "Warm and comfortable, wear it every day.",
            (2024, 1, 22),
        ),
        review(
            4,
            4,
            "Javohir",
            5,
            "The wash looks even better in person.",
            (2024, 2, 9),
        ),
        review(
            5,
            8,
            "Kamola",
            4,
            "Comfortable for long walks, sizing is accurate.",
            (2024, 5, 18),
        ),
        review(
            6,
            9,
            "Aziza",
            5,
            "Beautiful bracelet, arrived in lovely packaging.",
            (2024, 6, 1),
        ),
    ]
}
