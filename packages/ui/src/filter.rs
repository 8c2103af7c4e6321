//! Dashboard list helpers: server-side filter selection, client-side search,
//! stats and badge styling.

use api::{Role, User, UserFilter};
use store::RoleSet;

/// The status `<select>` on the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn as_value(self) -> &'static str {
        match self {
            StatusFilter::All => "",
            StatusFilter::Active => "true",
            StatusFilter::Inactive => "false",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "true" => StatusFilter::Active,
            "false" => StatusFilter::Inactive,
            _ => StatusFilter::All,
        }
    }

    pub fn as_flag(self) -> Option<bool> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Active => Some(true),
            StatusFilter::Inactive => Some(false),
        }
    }
}

/// Build the query for `GET /api/users`. `page_size == 0` asks for everything.
pub fn server_filter(role: Option<Role>, status: StatusFilter, page_size: u32) -> UserFilter {
    let mut filter = UserFilter::default();
    if let Some(role) = role {
        filter = filter.with_role(role);
    }
    if let Some(active) = status.as_flag() {
        filter = filter.with_active(active);
    }
    if page_size > 0 {
        filter = filter.with_page(1, page_size);
    }
    filter
}

/// Case-insensitive substring match on first name, last name, email or role.
pub fn matches_search(user: &User, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    [
        user.first_name.as_str(),
        user.last_name.as_str(),
        user.email.as_str(),
        user.role.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&term))
}

pub fn search_users(users: &[User], term: &str) -> Vec<User> {
    users
        .iter()
        .filter(|u| matches_search(u, term))
        .cloned()
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    /// One entry per role of the configured role set, in display order.
    pub per_role: Vec<(Role, usize)>,
}

impl UserStats {
    pub fn compute(users: &[User], roles: RoleSet) -> Self {
        let active = users.iter().filter(|u| u.is_active).count();
        let per_role = Role::choices(roles)
            .into_iter()
            .map(|role| (role, users.iter().filter(|u| u.role == role).count()))
            .collect();
        Self {
            total: users.len(),
            active,
            inactive: users.len() - active,
            per_role,
        }
    }
}

/// Plural label for a role's stats card.
pub fn role_plural(role: Role) -> String {
    match role {
        Role::User => "Users".to_string(),
        other => format!("{}s", other.as_str()),
    }
}

pub fn role_badge_class(role: Role) -> &'static str {
    match role {
        Role::Admin => "badge badge-danger",
        Role::Manager | Role::Educator => "badge badge-warning",
        Role::User | Role::Student => "badge badge-primary",
    }
}

pub fn status_badge_class(active: bool) -> &'static str {
    if active {
        "badge badge-success"
    } else {
        "badge badge-secondary"
    }
}

/// `value`, or `"N/A"` when blank.
pub fn or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        "N/A"
    } else {
        value
    }
}

pub fn created_label(user: &User) -> String {
    user.created_at
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}
