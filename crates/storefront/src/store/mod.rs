//! Application state store.
//!
//! Single source of truth for the shopping cart, favorites, current user,
//! and auth-modal UI state. Cart, favorites, and user are written through to
//! durable key-value storage on every mutation and rehydrated once at
//! startup; the auth-modal state is ephemeral.
//!
//! Persistence failures are never fatal: the in-memory state stays
//! authoritative for the session, and a slice that fails to decode at
//! startup simply keeps its default without affecting sibling slices.

pub mod persist;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

use vitrina_core::ProductId;

use crate::models::{AuthMode, CartLine, User};

use persist::{KeyValueStore, keys};

/// In-memory state guarded by the store's lock.
#[derive(Debug, Clone, Default)]
struct StoreState {
    user: Option<User>,
    cart: Vec<CartLine>,
    favorites: Vec<ProductId>,
    auth_modal_open: bool,
    auth_mode: AuthMode,
}

/// The application state store.
///
/// Cheaply cloneable via `Arc`. All operations are synchronous state
/// transitions; cart edits address lines by position, matching the calling
/// convention the UI has always used (two rapid edits can race an index a
/// caller holds, and out-of-range indices are silently ignored).
#[derive(Clone)]
pub struct AppStore {
    inner: Arc<AppStoreInner>,
}

struct AppStoreInner {
    state: Mutex<StoreState>,
    storage: Arc<dyn KeyValueStore>,
}

impl AppStore {
    /// Create a store with empty state backed by the given storage.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            inner: Arc::new(AppStoreInner {
                state: Mutex::new(StoreState::default()),
                storage,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, StoreState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Rehydrate persisted slices into the store.
    ///
    /// Each slice is read and decoded independently: a missing key keeps the
    /// default, and a decode failure is logged and treated the same way. One
    /// bad slice never affects the others and never aborts startup.
    pub fn load_persisted(&self) {
        let cart: Option<Vec<CartLine>> = self.load_slice(keys::CART);
        let favorites: Option<Vec<ProductId>> = self.load_slice(keys::FAVORITES);
        let user: Option<User> = self.load_slice(keys::USER);

        let mut state = self.state();
        if let Some(cart) = cart {
            state.cart = cart;
        }
        if let Some(favorites) = favorites {
            state.favorites = favorites;
        }
        if let Some(user) = user {
            state.user = Some(user);
        }
    }

    /// Replace the current user.
    ///
    /// No validation is performed: auth is simulated. The user slice is
    /// mirrored to storage while present and removed on logout.
    pub fn set_user(&self, user: Option<User>) {
        let mut state = self.state();
        state.user = user;
        match &state.user {
            Some(user) => self.persist_slice(keys::USER, user),
            None => {
                if let Err(e) = self.inner.storage.remove(keys::USER) {
                    tracing::warn!("Failed to remove persisted user: {e}");
                }
            }
        }
    }

    /// Add a line to the cart.
    ///
    /// If a line with the same (product, color, size) identity exists, its
    /// quantity is incremented by the added quantity, saturating at
    /// `u32::MAX`; otherwise the line is appended. Existing line order is
    /// preserved.
    pub fn add_to_cart(&self, line: CartLine) -> Vec<CartLine> {
        let mut state = self.state();
        let existing = state
            .cart
            .iter_mut()
            .find(|l| l.merge_key() == line.merge_key());
        match existing {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(line.quantity);
            }
            None => state.cart.push(CartLine {
                quantity: line.quantity.max(1),
                ..line
            }),
        }
        self.persist_slice(keys::CART, &state.cart);
        state.cart.clone()
    }

    /// Remove the line at the given position. Out-of-range is a no-op.
    pub fn remove_from_cart(&self, index: usize) -> Vec<CartLine> {
        let mut state = self.state();
        if index < state.cart.len() {
            state.cart.remove(index);
            self.persist_slice(keys::CART, &state.cart);
        }
        state.cart.clone()
    }

    /// Set the quantity of the line at the given position, clamped to a
    /// minimum of 1. Out-of-range is a no-op.
    pub fn update_quantity(&self, index: usize, quantity: i64) -> Vec<CartLine> {
        let mut state = self.state();
        if let Some(line) = state.cart.get_mut(index) {
            line.quantity = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);
            self.persist_slice(keys::CART, &state.cart);
        }
        state.cart.clone()
    }

    /// Empty the cart unconditionally.
    pub fn clear_cart(&self) -> Vec<CartLine> {
        let mut state = self.state();
        state.cart.clear();
        self.persist_slice(keys::CART, &state.cart);
        state.cart.clone()
    }

    /// Toggle a product in the favorites set: remove if present, append if
    /// not.
    pub fn toggle_favorite(&self, product_id: ProductId) -> Vec<ProductId> {
        let mut state = self.state();
        if state.favorites.contains(&product_id) {
            state.favorites.retain(|id| *id != product_id);
        } else {
            state.favorites.push(product_id);
        }
        self.persist_slice(keys::FAVORITES, &state.favorites);
        state.favorites.clone()
    }

    /// Set auth-modal visibility. When `mode` is `None` the previous mode is
    /// kept.
    pub fn set_auth_modal(&self, open: bool, mode: Option<AuthMode>) {
        let mut state = self.state();
        state.auth_modal_open = open;
        if let Some(mode) = mode {
            state.auth_mode = mode;
        }
    }

    /// Snapshot of the current cart.
    #[must_use]
    pub fn cart(&self) -> Vec<CartLine> {
        self.state().cart.clone()
    }

    /// Snapshot of the current favorites.
    #[must_use]
    pub fn favorites(&self) -> Vec<ProductId> {
        self.state().favorites.clone()
    }

    /// The current user, if logged in.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.state().user.clone()
    }

    /// Auth-modal visibility and mode.
    #[must_use]
    pub fn auth_modal(&self) -> (bool, AuthMode) {
        let state = self.state();
        (state.auth_modal_open, state.auth_mode)
    }

    fn load_slice<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.inner.storage.get(key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!("Failed to read persisted slice {key}: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Failed to decode persisted slice {key}: {e}");
                None
            }
        }
    }

    fn persist_slice<T: Serialize>(&self, key: &str, value: &T) {
        let encoded = match serde_json::to_string(value) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::error!("Failed to encode slice {key}: {e}");
                return;
            }
        };
        if let Err(e) = self.inner.storage.put(key, &encoded) {
            tracing::warn!("Failed to persist slice {key}: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use vitrina_core::{Price, ShopId, UserId};

    use super::persist::MemoryStore;
    use super::*;

    fn store() -> AppStore {
        AppStore::new(Arc::new(MemoryStore::new()))
    }

    fn line(id: i32, color: &str, size: &str, quantity: u32) -> CartLine {
        CartLine {
            product_id: ProductId::new(id),
            name: "Denim Jacket".to_string(),
            unit_price: Price::usd_cents(8999),
            image: "jacket.jpg".to_string(),
            quantity,
            shop_id: ShopId::new(2),
            selected_color: Some(color.to_string()),
            selected_size: Some(size.to_string()),
        }
    }

    fn user() -> User {
        User {
            id: UserId::new(1),
            name: "Aziza".to_string(),
            email: "aziza@example.com".to_string(),
        }
    }

    #[test]
    fn test_add_to_cart_merges_same_variant() {
        let store = store();
        store.add_to_cart(line(1, "Red", "M", 1));
        let cart = store.add_to_cart(line(1, "Red", "M", 2));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 3);
    }

    #[test]
    fn test_add_to_cart_appends_different_variant() {
        let store = store();
        store.add_to_cart(line(1, "Red", "M", 1));
        let cart = store.add_to_cart(line(1, "Blue", "M", 1));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart[1].selected_color.as_deref(), Some("Blue"));
    }

    #[test]
    fn test_add_to_cart_preserves_order() {
        let store = store();
        store.add_to_cart(line(1, "Red", "M", 1));
        store.add_to_cart(line(2, "Black", "L", 1));
        let cart = store.add_to_cart(line(1, "Red", "M", 4));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart[0].product_id, ProductId::new(1));
        assert_eq!(cart[0].quantity, 5);
        assert_eq!(cart[1].product_id, ProductId::new(2));
    }

    #[test]
    fn test_add_to_cart_merge_saturates_quantity() {
        let store = store();
        store.add_to_cart(line(1, "Red", "M", u32::MAX));
        let cart = store.add_to_cart(line(1, "Red", "M", 2));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, u32::MAX);
    }

    #[test]
    fn test_update_quantity_clamps_to_one() {
        let store = store();
        store.add_to_cart(line(1, "Red", "M", 3));
        let cart = store.update_quantity(0, -5);

        assert_eq!(cart[0].quantity, 1);
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let store = store();
        store.add_to_cart(line(1, "Red", "M", 1));
        let cart = store.update_quantity(0, 7);

        assert_eq!(cart[0].quantity, 7);
    }

    #[test]
    fn test_update_quantity_out_of_range_is_noop() {
        let store = store();
        store.add_to_cart(line(1, "Red", "M", 2));
        let cart = store.update_quantity(5, 9);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 2);
    }

    #[test]
    fn test_remove_from_cart_by_position() {
        let store = store();
        store.add_to_cart(line(1, "Red", "M", 1));
        store.add_to_cart(line(2, "Black", "L", 1));
        let cart = store.remove_from_cart(0);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].product_id, ProductId::new(2));
    }

    #[test]
    fn test_remove_from_cart_out_of_range_is_noop() {
        let store = store();
        store.add_to_cart(line(1, "Red", "M", 1));
        let cart = store.remove_from_cart(3);

        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_clear_cart() {
        let store = store();
        store.add_to_cart(line(1, "Red", "M", 1));
        store.add_to_cart(line(2, "Black", "L", 1));

        assert!(store.clear_cart().is_empty());
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_toggle_favorite_is_involution() {
        let store = store();
        let id = ProductId::new(9);

        assert_eq!(store.toggle_favorite(id), vec![id]);
        assert!(store.toggle_favorite(id).is_empty());
    }

    #[test]
    fn test_auth_modal_keeps_previous_mode() {
        let store = store();
        store.set_auth_modal(true, Some(AuthMode::Register));
        store.set_auth_modal(false, None);

        assert_eq!(store.auth_modal(), (false, AuthMode::Register));
    }

    #[test]
    fn test_persisted_state_round_trips() {
        let storage = Arc::new(MemoryStore::new());
        let first = AppStore::new(Arc::clone(&storage) as Arc<dyn KeyValueStore>);
        first.add_to_cart(line(1, "Red", "M", 2));
        first.toggle_favorite(ProductId::new(4));
        first.set_user(Some(user()));

        let second = AppStore::new(storage);
        second.load_persisted();

        assert_eq!(second.cart(), first.cart());
        assert_eq!(second.favorites(), vec![ProductId::new(4)]);
        assert_eq!(second.user(), Some(user()));
    }

    #[test]
    fn test_corrupt_slice_falls_back_without_affecting_siblings() {
        let storage = Arc::new(MemoryStore::new());
        storage.put(keys::CART, "not json").expect("put");
        storage.put(keys::FAVORITES, "[4,7]").expect("put");

        let store = AppStore::new(storage);
        store.load_persisted();

        assert!(store.cart().is_empty());
        assert_eq!(
            store.favorites(),
            vec![ProductId::new(4), ProductId::new(7)]
        );
    }

    #[test]
    fn test_logout_removes_persisted_user() {
        let storage = Arc::new(MemoryStore::new());
        let store = AppStore::new(Arc::clone(&storage) as Arc<dyn KeyValueStore>);
        store.set_user(Some(user()));
        assert!(storage.get(keys::USER).expect("get").is_some());

        store.set_user(None);
        assert!(storage.get(keys::USER).expect("get").is_none());
    }
}
