//! Storage Commands
//!
//! `localStorage` behind the core `KeyValueStore` trait.

use wedding_core::{Guestbook, KeyValueStore, StorageError};

use super::BrowserClock;

/// `window.localStorage`, or nothing when the browser refuses access
/// (private mode, disabled cookies). Reads then miss and writes fail.
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|win| win.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!(target: "storage", "localStorage is unavailable, nothing will be persisted");
        }
        Self { storage }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: e.as_string().unwrap_or_else(|| format!("{:?}", e)),
        })
    }
}

/// Guestbook persisted in `localStorage` under `key`.
pub fn open_guestbook(key: &str) -> Guestbook<LocalStore, BrowserClock> {
    Guestbook::with_key(LocalStore::open(), BrowserClock, key)
}
