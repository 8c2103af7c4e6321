//! # Demo backend
//!
//! When `api.mock_fallback` is on and the real backend is unreachable, the
//! client answers from a [`MockBackend`] instead. It holds six fixed users
//! and applies mutations to them, so a demo stays consistent: a suspended
//! user shows as inactive on the next fetch, a deleted one disappears.
//!
//! This is a demonstration aid. It is off by default and never consulted
//! for 401 or other 4xx answers.

use chrono::{DateTime, Utc};

use crate::error::{ApiError, ApiResult};
use crate::models::{
    ApiMessage, LoginResponse, Profile, Role, TokenValidation, User, UserFilter, UserId,
    UserUpdate,
};

pub const DEMO_EMAIL: &str = "admin@example.com";
pub const DEMO_PASSWORD: &str = "admin123";
pub const DEMO_ACCESS_TOKEN: &str = "mock-jwt-token-admin";
pub const DEMO_REFRESH_TOKEN: &str = "mock-refresh-token";

/// In-memory stand-in for the user-management backend.
#[derive(Clone, Debug)]
pub struct MockBackend {
    users: Vec<User>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn seed(id: UserId, first: &str, last: &str, role: Role, active: bool, created: &str) -> User {
    User {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        role,
        is_active: active,
        created_at: DateTime::parse_from_rfc3339(created)
            .ok()
            .map(|t| t.with_timezone(&Utc)),
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            users: vec![
                seed(1, "John", "Doe", Role::Admin, true, "2024-01-15T10:30:00Z"),
                seed(2, "Jane", "Smith", Role::Manager, true, "2024-01-16T14:20:00Z"),
                seed(3, "Bob", "Johnson", Role::User, false, "2024-01-17T09:15:00Z"),
                seed(4, "Alice", "Brown", Role::User, true, "2024-01-18T16:45:00Z"),
                seed(5, "Charlie", "Wilson", Role::Manager, true, "2024-01-19T11:30:00Z"),
                seed(6, "Diana", "Davis", Role::User, false, "2024-01-20T13:20:00Z"),
            ],
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        if email.trim().eq_ignore_ascii_case(DEMO_EMAIL) && password == DEMO_PASSWORD {
            Ok(LoginResponse {
                access_token: Some(DEMO_ACCESS_TOKEN.to_string()),
                refresh_token: Some(DEMO_REFRESH_TOKEN.to_string()),
                user: Some(self.profile()),
            })
        } else {
            Err(ApiError::InvalidCredentials)
        }
    }

    pub fn validate(&self, token: &str) -> TokenValidation {
        TokenValidation {
            valid: token == DEMO_ACCESS_TOKEN,
        }
    }

    pub fn list(&self, filter: &UserFilter) -> Vec<User> {
        self.users
            .iter()
            .filter(|u| filter.matches(u))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: UserId) -> ApiResult<User> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    pub fn update(&mut self, id: UserId, update: &UserUpdate) -> ApiMessage {
        if let Some(user) = self.find_mut(id) {
            user.first_name = update.first_name.clone();
            user.last_name = update.last_name.clone();
        }
        ApiMessage::ok("User updated successfully (mock)")
    }

    pub fn delete(&mut self, id: UserId) -> ApiMessage {
        self.users.retain(|u| u.id != id);
        ApiMessage::ok("User deleted successfully (mock)")
    }

    pub fn set_active(&mut self, id: UserId, active: bool) -> ApiMessage {
        if let Some(user) = self.find_mut(id) {
            user.is_active = active;
        }
        if active {
            ApiMessage::ok("User activated successfully (mock)")
        } else {
            ApiMessage::ok("User suspended successfully (mock)")
        }
    }

    pub fn activate_all(&mut self) -> ApiMessage {
        for user in &mut self.users {
            user.is_active = true;
        }
        ApiMessage::ok("All users activated successfully (mock)")
    }

    pub fn set_role(&mut self, id: UserId, role: Role) -> ApiMessage {
        if let Some(user) = self.find_mut(id) {
            user.role = role;
        }
        ApiMessage::ok("Role updated successfully (mock)")
    }

    pub fn profile(&self) -> Profile {
        Profile {
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
            email: DEMO_EMAIL.to_string(),
            role: Some(Role::Admin),
        }
    }

    fn find_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_data() {
        let mock = MockBackend::new();
        assert_eq!(mock.users().len(), 6);
        assert_eq!(mock.get(3).unwrap().email, "bob.johnson@example.com");
        assert!(!mock.get(6).unwrap().is_active);
        assert_eq!(mock.get(9), Err(ApiError::NotFound));
    }

    #[test]
    fn test_role_filter_returns_only_that_role() {
        let mock = MockBackend::new();
        let admins = mock.list(&UserFilter::default().with_role(Role::Admin));
        assert_eq!(admins.len(), 1);
        assert!(admins.iter().all(|u| u.role == Role::Admin));

        let inactive_users = mock.list(
            &UserFilter::default()
                .with_role("user".parse().unwrap())
                .with_active(false),
        );
        let ids: Vec<_> = inactive_users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3, 6]);
    }

    #[test]
    fn test_suspend_only_touches_active_flag() {
        let mut mock = MockBackend::new();
        let before = mock.get(2).unwrap();
        mock.set_active(2, false);
        let after = mock.get(2).unwrap();
        assert!(!after.is_active);
        assert_eq!(User { is_active: true, ..after }, before);
    }

    #[test]
    fn test_delete_and_activate_all() {
        let mut mock = MockBackend::new();
        mock.delete(4);
        assert_eq!(mock.users().len(), 5);
        assert!(mock.users().iter().all(|u| u.id != 4));

        mock.activate_all();
        assert!(mock.users().iter().all(|u| u.is_active));
    }

    #[test]
    fn test_demo_login() {
        let mock = MockBackend::new();
        let resp = mock.login("Admin@Example.com", DEMO_PASSWORD).unwrap();
        assert_eq!(resp.access_token.as_deref(), Some(DEMO_ACCESS_TOKEN));
        assert_eq!(mock.login(DEMO_EMAIL, "wrong"), Err(ApiError::InvalidCredentials));
        assert!(mock.validate(DEMO_ACCESS_TOKEN).valid);
        assert!(!mock.validate("other").valid);
    }
}
