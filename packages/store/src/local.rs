//! # Browser local storage — web persistence
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the **web platform**. It
//! wraps `window.localStorage`, which is where the session tokens and the
//! theme choice live between page loads.
//!
//! The handle is looked up on every call: `web_sys::Storage` is not `Send`
//! and holding it in a Dioxus context buys nothing, the browser caches it.
//! When storage is unavailable (sandboxed iframe, disabled cookies) reads
//! return `None` and writes are dropped.

use crate::kv::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
