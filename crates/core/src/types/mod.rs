//! Core types for Vitrina.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod language;
pub mod price;

pub use id::*;
pub use language::{Language, LanguageParseError};
pub use price::{CurrencyCode, Price};
