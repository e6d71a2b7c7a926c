//! User domain types.
//!
//! Authentication is simulated: users are created from whatever the login
//! and register forms submit, with no credential verification. The store
//! mirrors the current user to durable storage only while one is present.

use serde::{Deserialize, Serialize};

use vitrina_core::UserId;

/// A storefront user, present only while "logged in".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address. Not validated.
    pub email: String,
}

/// Which form the auth modal shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}
