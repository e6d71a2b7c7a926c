//! Durable key-value persistence for store slices.
//!
//! Each persisted slice lives under its own fixed key and is stored as a
//! JSON document. Storage is a collaborator injected into the store so it
//! can be stubbed in tests: the in-memory state stays authoritative for the
//! session whether or not writes succeed.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

/// Fixed keys for persisted slices.
pub mod keys {
    /// Shopping cart lines.
    pub const CART: &str = "cart";
    /// Favorited product IDs.
    pub const FAVORITES: &str = "favorites";
    /// Current user, present only while logged in.
    pub const USER: &str = "user";
    /// Chat gateway API credential.
    pub const CHAT_CREDENTIAL: &str = "chat-credential";
}

/// Errors from the key-value store.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Underlying I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Lock on the in-memory store was poisoned.
    #[error("store lock poisoned")]
    Poisoned,
}

/// Durable key-value storage port.
///
/// Values are opaque strings (JSON documents in practice). A missing key is
/// `Ok(None)`, not an error.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `PersistError` if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, PersistError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `PersistError` if the backing storage cannot be written.
    fn put(&self, key: &str, value: &str) -> Result<(), PersistError>;

    /// Remove the value stored under `key`. Removing an absent key is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns `PersistError` if the backing storage cannot be written.
    fn remove(&self, key: &str) -> Result<(), PersistError>;
}

/// File-backed store: one `<key>.json` file per key under a data directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a file store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistError::Io(e)),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), PersistError> {
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PersistError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PersistError::Io(e)),
        }
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        let entries = self.entries.lock().map_err(|_| PersistError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), PersistError> {
        let mut entries = self.entries.lock().map_err(|_| PersistError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PersistError> {
        let mut entries = self.entries.lock().map_err(|_| PersistError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}
