//! Persisted authentication session.
//!
//! The access token is the only thing that decides whether the client
//! considers itself logged in. It is written at login and removed at logout,
//! on account deletion, and whenever the backend answers 401.

use serde::{Deserialize, Serialize};

use crate::kv::KeyValueStore;

/// Storage key for the bearer token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Storage key for the optional refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Tokens issued by the backend at login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

impl Session {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
        }
    }

    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }
}

/// Reads and writes the [`Session`] through any [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored session, if an access token is present.
    pub fn load(&self) -> Option<Session> {
        let access_token = self.access_token()?;
        Some(Session {
            access_token,
            refresh_token: self
                .store
                .get(REFRESH_TOKEN_KEY)
                .filter(|t| !t.is_empty()),
        })
    }

    pub fn access_token(&self) -> Option<String> {
        self.store.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Persist a session. A missing refresh token removes any stale one.
    pub fn save(&self, session: &Session) {
        self.store.set(ACCESS_TOKEN_KEY, &session.access_token);
        match &session.refresh_token {
            Some(refresh) => self.store.set(REFRESH_TOKEN_KEY, refresh),
            None => self.store.remove(REFRESH_TOKEN_KEY),
        }
    }

    pub fn clear(&self) {
        self.store.remove(ACCESS_TOKEN_KEY);
        self.store.remove(REFRESH_TOKEN_KEY);
    }

    pub fn is_active(&self) -> bool {
        self.access_token().is_some()
    }

    /// The underlying store, for keys that are not part of the session.
    pub fn inner(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_save_load_clear() {
        let sessions = SessionStore::new(MemoryStore::new());
        assert!(sessions.load().is_none());
        assert!(!sessions.is_active());

        let session = Session::new("access-1").with_refresh_token("refresh-1");
        sessions.save(&session);
        assert_eq!(sessions.load(), Some(session));
        assert_eq!(sessions.access_token().as_deref(), Some("access-1"));

        sessions.clear();
        assert!(sessions.load().is_none());
        assert!(sessions.inner().is_empty());
    }

    #[test]
    fn test_save_without_refresh_drops_old_refresh_token() {
        let sessions = SessionStore::new(MemoryStore::new());
        sessions.save(&Session::new("a").with_refresh_token("r"));
        sessions.save(&Session::new("b"));

        let loaded = sessions.load().unwrap();
        assert_eq!(loaded.access_token, "b");
        assert!(loaded.refresh_token.is_none());
    }

    #[test]
    fn test_clear_leaves_other_keys() {
        let store = MemoryStore::new();
        store.set("theme", "light");
        let sessions = SessionStore::new(store.clone());
        sessions.save(&Session::new("a"));

        sessions.clear();
        assert_eq!(store.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_empty_token_is_no_session() {
        let store = MemoryStore::new();
        store.set(ACCESS_TOKEN_KEY, "");
        assert!(SessionStore::new(store).load().is_none());
    }
}
