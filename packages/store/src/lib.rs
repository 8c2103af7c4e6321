pub mod config;
pub mod kv;
pub mod session;
pub mod theme;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::{AdminConfig, ApiConfig, RoleSet, UiConfig};
pub use kv::KeyValueStore;
pub use session::{Session, SessionStore};
pub use theme::Theme;
