//! Key/value persistence backends.
//!
//! The session layer does not talk to `window.localStorage` directly; it is
//! handed a [`StorageBackend`] at construction so tests (and the server-side
//! render path) can substitute an in-memory map. Requires a browser
//! environment for [`BrowserStorage`] to do anything useful.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::Mutex;

/// Durable string-keyed storage consumed by the session store.
///
/// Writes and removals are best effort: a backend that cannot persist (full
/// quota, storage disabled, not a browser) swallows the failure rather than
/// propagating it. Reads degrade to `None` under the same conditions.
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage` backend.
///
/// Looks the storage object up on every call instead of holding it, so the
/// type stays plain data and works from any thread-model the framework picks.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(key);
            }
        }
    }
}

// Outside the browser there is nothing to persist to; reads see an empty
// store and writes vanish.
#[cfg(not(feature = "hydrate"))]
impl StorageBackend for BrowserStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}

/// In-memory backend for unit tests and non-browser callers.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}
