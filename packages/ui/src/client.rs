//! Platform wiring for the API client.
//!
//! - **Web** (WASM + `web` feature): tokens and theme in `localStorage` via
//!   [`store::LocalStore`]; config overrides baked in at compile time.
//! - **Desktop** (native): tokens and theme in `<data_dir>/ums-admin/session.toml`
//!   via [`store::FileStore`]; config read from
//!   `<config_dir>/ums-admin/ums-admin.toml`, then `.env` and the process
//!   environment.

use api::{ApiClient, HttpTransport};
use store::AdminConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

/// The client type every view talks to.
pub type AdminClient = ApiClient<HttpTransport, PlatformStore>;

#[cfg(not(target_arch = "wasm32"))]
fn app_dir(base: Option<std::path::PathBuf>) -> std::path::PathBuf {
    base.unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("ums-admin")
}

/// Key/value storage for the session tokens and the theme.
pub fn make_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::FileStore::new(app_dir(dirs::data_dir()).join("session.toml"))
    }
}

/// Defaults, then the config file (native only), then `UMS_*` overrides.
pub fn load_config() -> AdminConfig {
    #[cfg(target_arch = "wasm32")]
    {
        AdminConfig::default().with_env(build_env)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenvy::dotenv().ok();
        let path = app_dir(dirs::config_dir()).join(AdminConfig::filename());
        let config = match std::fs::read_to_string(&path) {
            Ok(raw) => AdminConfig::from_toml(&raw).unwrap_or_else(|e| {
                tracing::warn!("Ignoring {}: {}", path.display(), e);
                AdminConfig::default()
            }),
            Err(_) => AdminConfig::default(),
        };
        config.with_env(|key| std::env::var(key).ok())
    }
}

/// `UMS_*` values captured when the wasm bundle was compiled.
#[cfg(target_arch = "wasm32")]
fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "UMS_API_BASE_URL" => option_env!("UMS_API_BASE_URL"),
        "UMS_SERVICE_KEY" => option_env!("UMS_SERVICE_KEY"),
        "UMS_MOCK_FALLBACK" => option_env!("UMS_MOCK_FALLBACK"),
        "UMS_TIMEOUT_SECS" => option_env!("UMS_TIMEOUT_SECS"),
        "UMS_ROLE_SET" => option_env!("UMS_ROLE_SET"),
        "UMS_ALERT_DISMISS_SECS" => option_env!("UMS_ALERT_DISMISS_SECS"),
        _ => None,
    };
    value.map(str::to_string)
}

pub fn make_client(config: &AdminConfig) -> AdminClient {
    let transport = HttpTransport::new(&config.api);
    tracing::info!(
        "API client for {} (mock fallback {})",
        transport.base_url(),
        if config.api.mock_fallback { "on" } else { "off" }
    );
    ApiClient::new(transport, make_store(), &config.api)
}
