//! # Key/value persistence — the storage seam of the client
//!
//! Everything the client keeps between runs (the session tokens and the theme
//! choice) is a short string under a well-known key. [`KeyValueStore`] is the
//! trait every backend implements:
//!
//! | Backend | Platform | Where |
//! |---------|----------|-------|
//! | [`crate::LocalStore`] | web (`wasm32` + `web` feature) | `window.localStorage` |
//! | [`crate::FileStore`] | desktop | a TOML file under the platform data dir |
//! | [`crate::MemoryStore`] | tests, fallback | process memory |
//!
//! ## Error handling
//!
//! Writes never fail from the caller's point of view. A store that cannot
//! persist (private browsing, read-only disk) degrades to "nothing stored",
//! which for this client simply means "logged out, default theme".

/// Synchronous string key/value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
