//! Vitrina Core - Shared types library.
//!
//! This crate provides common types used across all Vitrina components:
//! - `storefront` - Public-facing e-commerce API
//! - `integration-tests` - End-to-end test suite
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no
//! persistence. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and the chat
//!   reply language

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
