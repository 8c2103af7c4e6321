//! # User records as the backend sends them
//!
//! [`User`] mirrors one row of `GET /api/users`. The JSON is camelCase and
//! several backends omit fields, so everything except `id` has a default:
//! names and email decode as empty strings, a missing role as [`Role::User`],
//! a missing `isActive` as `false`, a missing `createdAt` as `None`.
//!
//! [`Role`] is the closed set of access tiers. Parsing ignores case because
//! the backends disagree (`"admin"`, `"Admin"`, `"ADMIN"`); serializing always
//! uses the capitalized name. A role outside the set fails to decode.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use store::RoleSet;

/// Backend identifier of a user.
pub type UserId = i64;

/// Access tier assigned to a user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    Admin,
    Manager,
    #[default]
    User,
    Educator,
    Student,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::User => "User",
            Role::Educator => "Educator",
            Role::Student => "Student",
        }
    }

    /// The roles offered by a deployment, highest tier first.
    pub fn choices(set: RoleSet) -> [Role; 3] {
        match set {
            RoleSet::Standard => [Role::Admin, Role::Manager, Role::User],
            RoleSet::Education => [Role::Admin, Role::Educator, Role::Student],
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "user" => Ok(Role::User),
            "educator" => Ok(Role::Educator),
            "student" => Ok(Role::Student),
            _ => Err(format!("unknown role: {s}")),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

/// A user as listed by the admin endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// "First Last", trimmed; empty when neither name is set.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Server-side filter for `GET /api/users`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub role: Option<Role>,
    pub is_active: Option<bool>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl UserFilter {
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn with_page(mut self, page: u32, limit: u32) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }

    /// Query parameters in the order the backend documents them.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(role) = self.role {
            query.push(("role".to_string(), role.to_string()));
        }
        if let Some(active) = self.is_active {
            query.push(("isActive".to_string(), active.to_string()));
        }
        if let Some(page) = self.page {
            query.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        query
    }

    /// Whether `user` passes the role and status parts of this filter.
    pub fn matches(&self, user: &User) -> bool {
        self.role.map_or(true, |role| user.role == role)
            && self.is_active.map_or(true, |active| user.is_active == active)
    }
}

/// Editable fields of a user record (admin edit and self-service profile).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub first_name: String,
    pub last_name: String,
}

/// The signed-in user's own profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Option<Role>,
}

impl Profile {
    /// Upper-cased first letters of first and last name, `"U"` when both are empty.
    pub fn initials(&self) -> String {
        let initials: String = [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|name| name.trim().chars().next())
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "U".to_string()
        } else {
            initials
        }
    }

    /// Full name, or `"User"` when no name is set.
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string();
        if name.is_empty() {
            "User".to_string()
        } else {
            name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_ignores_case() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("MANAGER".parse::<Role>(), Ok(Role::Manager));
        assert_eq!(" Student ".parse::<Role>(), Ok(Role::Student));
        assert!("root".parse::<Role>().is_err());
    }

    #[test]
    fn test_user_decodes_with_missing_fields() {
        let user: User = serde_json::from_str(r#"{"id": 7, "email": "x@y.z"}"#).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.role, Role::User);
        assert!(!user.is_active);
        assert!(user.created_at.is_none());
        assert_eq!(user.full_name(), "");
    }

    #[test]
    fn test_user_decodes_backend_json() {
        let user: User = serde_json::from_str(
            r#"{
                "id": 1,
                "firstName": "John",
                "lastName": "Doe",
                "email": "john.doe@example.com",
                "role": "admin",
                "isActive": true,
                "createdAt": "2024-01-15T10:30:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::Admin);
        assert!(user.is_active);
        assert_eq!(user.full_name(), "John Doe");
        assert_eq!(
            user.created_at.map(|t| t.format("%Y-%m-%d").to_string()),
            Some("2024-01-15".to_string())
        );

        let encoded = serde_json::to_value(&user).unwrap();
        assert_eq!(encoded["role"], "Admin");
        assert_eq!(encoded["firstName"], "John");
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result: Result<User, _> = serde_json::from_str(r#"{"id": 1, "role": "Superuser"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_filter_query_and_match() {
        let filter = UserFilter::default().with_role(Role::Manager).with_active(false);
        assert_eq!(
            filter.to_query(),
            vec![
                ("role".to_string(), "Manager".to_string()),
                ("isActive".to_string(), "false".to_string()),
            ]
        );
        assert!(UserFilter::default().to_query().is_empty());

        let user = User {
            id: 1,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            role: Role::Manager,
            is_active: false,
            created_at: None,
        };
        assert!(filter.matches(&user));
        assert!(!filter.clone().with_active(true).matches(&user));
    }

    #[test]
    fn test_profile_initials_and_name() {
        let profile = Profile {
            first_name: "ada".to_string(),
            last_name: "lovelace".to_string(),
            ..Profile::default()
        };
        assert_eq!(profile.initials(), "AL");
        assert_eq!(profile.display_name(), "ada lovelace");

        let empty = Profile::default();
        assert_eq!(empty.initials(), "U");
        assert_eq!(empty.display_name(), "User");
    }

    #[test]
    fn test_role_choices() {
        assert_eq!(
            Role::choices(RoleSet::Education),
            [Role::Admin, Role::Educator, Role::Student]
        );
        assert_eq!(Role::choices(RoleSet::Standard)[1], Role::Manager);
    }
}
