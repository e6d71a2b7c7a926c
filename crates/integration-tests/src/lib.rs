//! Integration tests for Vitrina.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the storefront against a throwaway data directory
//! VITRINA_DATA_DIR=$(mktemp -d) cargo run -p vitrina-storefront
//!
//! # Run integration tests
//! cargo test -p vitrina-integration-tests -- --ignored
//! ```
//!
//! The tests talk to a running storefront over HTTP; they are `#[ignore]`d
//! by default so `cargo test` stays self-contained. Point them at a
//! different instance with `VITRINA_BASE_URL`.
//!
//! State-mutating tests (cart, favorites, auth) assume exclusive use of the
//! instance: the store is process-wide, not per-connection.
