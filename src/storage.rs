//! Key-Value Storage
//!
//! Abstract string storage so the order store can run against
//! `window.localStorage` in the browser and an in-memory map elsewhere.

use std::cell::RefCell;
use std::collections::HashMap;

/// Storage failures
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// No storage reachable (no window, disabled, sandboxed)
    Unavailable,
    /// Storage exists but the call was rejected (quota, security)
    Access(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "Storage unavailable"),
            StorageError::Access(msg) => write!(f, "Storage access failed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

pub type StorageResult<T> = Result<T, StorageError>;

/// Minimal string key-value capability
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite a value
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

// ========================
// In-memory
// ========================

/// Process-local map. Lives as long as the page (or the test).
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ========================
// Browser localStorage
// ========================

/// `window.localStorage`
#[derive(Clone)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> StorageResult<Self> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        // Err when access throws (e.g. blocked cookies), Ok(None) when absent
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Access(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

/// Storage picked at startup: localStorage when reachable, memory otherwise
pub enum BrowserStore {
    Local(LocalStorage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open() -> Self {
        match LocalStorage::open() {
            Ok(local) => BrowserStore::Local(local),
            Err(e) => {
                log::warn!("{}; event order will not survive a reload", e);
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match self {
            BrowserStore::Local(s) => s.get(key),
            BrowserStore::Memory(s) => s.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        match self {
            BrowserStore::Local(s) => s.set(key, value),
            BrowserStore::Memory(s) => s.set(key, value),
        }
    }
}
