//! This crate contains all shared UI for the workspace: the admin store,
//! theme context, building-block components and the platform-agnostic views.
//!
//! Platform packages own routing; views report navigation through
//! `EventHandler` callbacks.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod filter;
pub mod notice;
pub mod state;
pub mod views;

mod client;
pub use client::{load_config, make_client, make_store, AdminClient, PlatformStore};

mod admin_store;
pub use admin_store::{use_admin_store, AdminStore, AdminStoreProvider};

mod theme;
pub use theme::{apply_theme, use_theme, ThemeContext, ThemeProvider, ThemeSelector, ThemeToggle};

mod timer;

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{use_authenticated, use_signed_in_at_mount, LogoutButton};

pub const UI_CSS: Asset = asset!("/assets/ui.css");
