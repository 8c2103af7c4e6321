//! # Filesystem-backed key/value store
//!
//! [`FileStore`] is the [`KeyValueStore`] used on desktop. All keys live in a
//! single TOML document so the file stays readable and easy to clear by hand:
//!
//! ```toml
//! accessToken = "eyJhbGciOi..."
//! refreshToken = "..."
//! theme = "dark"
//! ```
//!
//! ## Platform data directories
//!
//! Callers pick the location, normally `dirs::data_dir()/ums-admin/state.toml`:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/ums-admin/` |
//! | Linux | `~/.local/share/ums-admin/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\ums-admin\` |

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::kv::KeyValueStore;

/// TOML-file-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| toml::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(raw) = toml::to_string_pretty(entries) {
            let _ = std::fs::write(&self.path, raw);
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.read_all();
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.read_all();
        if entries.remove(key).is_some() {
            self.write_all(&entries);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("ums_admin_test_{}_{name}", std::process::id()))
            .join("state.toml")
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let path = scratch_path("reopen");
        let _ = std::fs::remove_file(&path);

        let store = FileStore::new(path.clone());
        store.set("accessToken", "token-1");
        store.set("theme", "blue");

        let reopened = FileStore::new(path.clone());
        assert_eq!(reopened.get("accessToken").as_deref(), Some("token-1"));
        assert_eq!(reopened.get("theme").as_deref(), Some("blue"));

        reopened.remove("accessToken");
        assert!(store.get("accessToken").is_none());
        assert_eq!(store.get("theme").as_deref(), Some("blue"));

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_missing_or_corrupt_file_reads_as_empty() {
        let path = scratch_path("corrupt");
        let store = FileStore::new(path.clone());
        assert!(store.get("theme").is_none());

        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).unwrap();
        }
        std::fs::write(&path, "not = [valid").unwrap();
        assert!(store.get("theme").is_none());

        // A write replaces the unreadable file.
        store.set("theme", "light");
        assert_eq!(store.get("theme").as_deref(), Some("light"));

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }
}
