//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                        - Health check
//!
//! # Catalog
//! GET  /api/shops                     - Shop listing
//! GET  /api/shops/{id}                - Shop detail
//! GET  /api/shops/{id}/products       - Products sold by a shop
//! GET  /api/products                  - Product listing (?category= filter)
//! GET  /api/products/{id}             - Product detail
//! GET  /api/products/{id}/reviews     - Product reviews
//!
//! # Cart
//! GET  /api/cart                      - Cart contents with subtotal
//! POST /api/cart/add                  - Add a line (merges matching lines)
//! POST /api/cart/update               - Update quantity at an index
//! POST /api/cart/remove               - Remove the line at an index
//! POST /api/cart/clear                - Empty the cart
//!
//! # Favorites
//! GET  /api/favorites                 - Favorited product IDs
//! POST /api/favorites/toggle          - Toggle a product ID
//!
//! # Auth (simulated)
//! GET  /api/auth/me                   - Current user
//! POST /api/auth/login                - Log in
//! POST /api/auth/register             - Register
//! POST /api/auth/logout               - Log out
//! POST /api/auth/modal                - Set auth modal visibility and mode
//!
//! # Chat
//! POST /api/chat/message              - Send a message, get reply + chips
//! POST /api/chat/credential           - Set the completion API credential
//! POST /api/chat/language             - Select the reply language
//! GET  /api/chat/status               - Basic-mode flag and language
//!
//! # Sizing
//! POST /api/size/recommendation       - Size recommendation from measurements
//!
//! # Style & Rewards
//! POST /api/style/profile             - Resolve a style quiz to a profile
//! GET  /api/rewards/status?points=    - Membership tier for a points balance
//! ```

pub mod auth;
pub mod cart;
pub mod chat;
pub mod favorites;
pub mod products;
pub mod rewards;
pub mod shops;
pub mod sizing;
pub mod style;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/shops", get(shops::index))
        .route("/shops/{id}", get(shops::show))
        .route("/shops/{id}/products", get(shops::products))
        .route("/products", get(products::index))
        .route("/products/{id}", get(products::show))
        .route("/products/{id}/reviews", get(products::reviews))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/cart", get(cart::show))
        .route("/cart/add", post(cart::add))
        .route("/cart/update", post(cart::update))
        .route("/cart/remove", post(cart::remove))
        .route("/cart/clear", post(cart::clear))
}

/// Create the favorites routes router.
pub fn favorites_routes() -> Router<AppState> {
    Router::new()
        .route("/favorites", get(favorites::show))
        .route("/favorites/toggle", post(favorites::toggle))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(auth::me))
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/logout", post(auth::logout))
        .route("/modal", post(auth::modal))
}

/// Create the chat routes router.
pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/message", post(chat::message))
        .route("/credential", post(chat::credential))
        .route("/language", post(chat::language))
        .route("/status", get(chat::status))
}

/// Create the combined API router.
pub fn routes() -> Router<AppState> {
    Router::new().nest(
        "/api",
        Router::new()
            .merge(catalog_routes())
            .merge(cart_routes())
            .merge(favorites_routes())
            .nest("/auth", auth_routes())
            .nest("/chat", chat_routes())
            .route("/size/recommendation", post(sizing::recommendation))
            .route("/style/profile", post(style::profile))
            .route("/rewards/status", get(rewards::status)),
    )
}
