//! Domain types for the storefront.

pub mod cart;
pub mod catalog;
pub mod user;

pub use cart::CartLine;
pub use catalog::{Product, Review, Shop};
pub use user::{AuthMode, User};
