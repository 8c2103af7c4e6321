//! # Client configuration — `ums-admin.toml`
//!
//! Defines the optional TOML file (filename: [`AdminConfig::filename`] =
//! `"ums-admin.toml"`) that points the client at a backend and tunes the UI.
//! A missing or empty file is equivalent to [`AdminConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000"
//! service_key = "default-service-key"
//! timeout_secs = 5
//! mock_fallback = false     # demo only: answer from mock data when the backend is down
//! auth_prefix = "/auth"
//! users_prefix = "/api/users"
//! admin_prefix = "/admin"
//! account_prefix = "/user"
//! page_size = 0           # 0 = ask for the whole list
//!
//! [ui]
//! alert_dismiss_secs = 5
//! roles = "standard"        # or "education"
//! ```
//!
//! ## Environment overrides
//!
//! [`AdminConfig::with_env`] layers `UMS_*` variables on top of the file. The
//! lookup is a closure so native builds can read the process environment and
//! web builds can pass values baked in at compile time.
//!
//! | Variable | Field |
//! |----------|-------|
//! | `UMS_API_BASE_URL` | `api.base_url` |
//! | `UMS_SERVICE_KEY` | `api.service_key` |
//! | `UMS_TIMEOUT_SECS` | `api.timeout_secs` |
//! | `UMS_MOCK_FALLBACK` | `api.mock_fallback` |
//! | `UMS_ROLE_SET` | `ui.roles` |
//! | `UMS_ALERT_DISMISS_SECS` | `ui.alert_dismiss_secs` |

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `ums-admin.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Backend location and request behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin of the backend, without a trailing slash.
    pub base_url: String,
    /// Sent as `X-Service-Key` on every request.
    pub service_key: String,
    /// Per-request timeout (native only; browsers apply their own).
    pub timeout_secs: u64,
    /// Answer from in-memory demo data when the backend is unreachable.
    pub mock_fallback: bool,
    pub auth_prefix: String,
    pub users_prefix: String,
    pub admin_prefix: String,
    pub account_prefix: String,
    /// Page size requested by the user list; 0 requests everything.
    pub page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            service_key: "default-service-key".to_string(),
            timeout_secs: 5,
            mock_fallback: false,
            auth_prefix: "/auth".to_string(),
            users_prefix: "/api/users".to_string(),
            admin_prefix: "/admin".to_string(),
            account_prefix: "/user".to_string(),
            page_size: 0,
        }
    }
}

/// Presentation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Seconds before a success/error banner disappears.
    pub alert_dismiss_secs: u64,
    /// Which three roles the dashboard offers.
    pub roles: RoleSet,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            alert_dismiss_secs: 5,
            roles: RoleSet::default(),
        }
    }
}

/// The role vocabulary a deployment uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleSet {
    /// Admin / Manager / User
    #[default]
    Standard,
    /// Admin / Educator / Student
    Education,
}

impl RoleSet {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "standard" => Some(RoleSet::Standard),
            "education" => Some(RoleSet::Education),
            _ => None,
        }
    }
}

impl AdminConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "ums-admin.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Builder method to turn the demo fallback on or off.
    pub fn with_mock_fallback(mut self, enabled: bool) -> Self {
        self.api.mock_fallback = enabled;
        self
    }

    /// Apply `UMS_*` overrides. Values that do not parse are ignored.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("UMS_API_BASE_URL").filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(key) = lookup("UMS_SERVICE_KEY").filter(|v| !v.is_empty()) {
            self.api.service_key = key;
        }
        if let Some(secs) = lookup("UMS_TIMEOUT_SECS").and_then(|v| v.trim().parse().ok()) {
            self.api.timeout_secs = secs;
        }
        if let Some(flag) = lookup("UMS_MOCK_FALLBACK").and_then(|v| parse_flag(&v)) {
            self.api.mock_fallback = flag;
        }
        if let Some(roles) = lookup("UMS_ROLE_SET").and_then(|v| RoleSet::parse(&v)) {
            self.ui.roles = roles;
        }
        if let Some(secs) = lookup("UMS_ALERT_DISMISS_SECS").and_then(|v| v.trim().parse().ok()) {
            self.ui.alert_dismiss_secs = secs;
        }
        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
