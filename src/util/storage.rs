//! Key-value storage behind the persisted session.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BrowserStorage` is `window.localStorage`; `MemoryStorage` stands in for it
//! off-browser and in tests. Both are best-effort: a failing browser storage
//! call is logged and otherwise ignored, the same way UI preferences are.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Flat string key-value store with `localStorage` semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    /// Remove every key, not just the ones this crate wrote.
    fn clear(&self);
}

/// In-memory store. Clones share the same underlying map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a valid map.
        self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.lock().insert(key.to_owned(), value.to_owned());
    }

    fn clear(&self) {
        self.lock().clear();
    }
}

/// `window.localStorage`, looked up on every call so the handle stays
/// `Send + Sync` and can live in Leptos context.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable");
        }
        storage
    }
}

#[cfg(feature = "csr")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage write failed for key {key}");
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if storage.clear().is_err() {
                log::warn!("localStorage clear failed");
            }
        }
    }
}

/// Storage the running app persists its session to.
#[cfg(feature = "csr")]
pub type AppStorage = BrowserStorage;

/// Storage the running app persists its session to.
#[cfg(not(feature = "csr"))]
pub type AppStorage = MemoryStorage;
