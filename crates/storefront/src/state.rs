//! Application state shared across handlers.

use std::io;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::chat::ChatGateway;
use crate::config::StorefrontConfig;
use crate::store::AppStore;
use crate::store::persist::{FileStore, KeyValueStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// state store, catalog, chat gateway, and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: AppStore,
    catalog: Catalog,
    chat: ChatGateway,
}

impl AppState {
    /// Create application state backed by the file store under the
    /// configured data directory, rehydrating persisted slices.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn new(config: StorefrontConfig) -> Result<Self, io::Error> {
        let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&config.data_dir)?);
        Ok(Self::with_storage(config, storage))
    }

    /// Create application state over an injected storage backend.
    ///
    /// The environment credential, when present, takes precedence over a
    /// persisted one.
    #[must_use]
    pub fn with_storage(config: StorefrontConfig, storage: Arc<dyn KeyValueStore>) -> Self {
        let store = AppStore::new(Arc::clone(&storage));
        store.load_persisted();

        let chat = ChatGateway::new(storage, config.openai_model.clone());
        chat.load_persisted();
        if let Some(credential) = &config.openai_api_key {
            if let Err(e) = chat.set_credential(credential.clone()) {
                tracing::warn!("Configured chat credential is unusable: {e}");
            }
        }

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                catalog: Catalog::seed(),
                chat,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the application state store.
    #[must_use]
    pub fn store(&self) -> &AppStore {
        &self.inner.store
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the chat gateway.
    #[must_use]
    pub fn chat(&self) -> &ChatGateway {
        &self.inner.chat
    }
}
