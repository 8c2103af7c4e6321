//! # API crate — typed client for the user-management backend
//!
//! Everything the admin frontends need to talk to the backend lives here:
//! request/response models, the HTTP transport, error mapping, token
//! persistence on 401, and an optional in-memory demo backend.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: one async method per backend operation |
//! | [`error`] | [`ApiError`] and the status-code mapping it encodes |
//! | [`mock`] | [`MockBackend`]: seeded users used when the backend is unreachable |
//! | [`models`] | `User`, `Role`, `Profile` and the auth request/response bodies |
//! | [`transport`] | [`Transport`] seam and the `reqwest`-backed [`HttpTransport`] |
//!
//! ## Operations
//!
//! - **Auth**: `login`, `logout`, `register`, `forgot_password`, `reset_password`, `validate_token`
//! - **Users**: `list_users`, `get_user`, `update_user`, `delete_user`, `delete_user_permanent`,
//!   `suspend_user`, `activate_user`, `activate_all_users`, `set_user_role`
//! - **Own account**: `get_profile`, `update_profile`, `change_password`, `delete_account`
//!
//! Token storage goes through [`store::KeyValueStore`], so the same client
//! works against browser `localStorage`, a config-dir file, or memory.

pub mod client;
pub mod error;
pub mod mock;
pub mod models;
pub mod transport;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use mock::MockBackend;
pub use models::{
    ApiMessage, LoginResponse, Profile, Role, User, UserFilter, UserId, UserUpdate,
};
pub use store::{ApiConfig, Session};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};

/// The client every frontend uses: real HTTP, tokens in `S`.
pub type HttpClient<S> = ApiClient<HttpTransport, S>;
