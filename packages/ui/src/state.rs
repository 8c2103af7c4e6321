//! # Admin state and its reducer
//!
//! [`AdminState`] is the single flat record the admin screens read from.
//! It only changes through [`AdminState::apply`], fed with [`Action`]s that
//! the async actions in [`crate::admin_store`] dispatch around every client call:
//!
//! - `Pending(thunk)` before the call,
//! - `Fulfilled(outcome)` or `Rejected(thunk, message)` after it,
//! - `SessionExpired` whenever the backend answered 401.
//!
//! The reducer is plain Rust with no Dioxus types so it can be tested
//! directly.

use api::{Role, Session, User, UserId, UserUpdate};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminState {
    pub users: Vec<User>,
    pub selected_user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
    pub token: Option<String>,
    pub is_authenticated: bool,
}

/// A named async action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Thunk {
    Login,
    Logout,
    FetchUsers,
    GetUser,
    UpdateUser,
    DeleteUser,
    DeleteUserPermanent,
    SuspendUser,
    ActivateUser,
    ActivateAllUsers,
    SetUserRole,
}

impl Thunk {
    pub fn name(self) -> &'static str {
        match self {
            Thunk::Login => "auth/login",
            Thunk::Logout => "auth/logout",
            Thunk::FetchUsers => "admin/fetchUsers",
            Thunk::GetUser => "admin/getUser",
            Thunk::UpdateUser => "admin/updateUser",
            Thunk::DeleteUser => "admin/deleteUser",
            Thunk::DeleteUserPermanent => "admin/deleteUserPermanent",
            Thunk::SuspendUser => "admin/suspendUser",
            Thunk::ActivateUser => "admin/activateUser",
            Thunk::ActivateAllUsers => "admin/activateAllUsers",
            Thunk::SetUserRole => "admin/setUserRole",
        }
    }
}

/// What a successful thunk changed.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    LoggedIn(String),
    LoggedOut,
    UsersLoaded(Vec<User>),
    UserLoaded(User),
    UserUpdated(UserId, UserUpdate),
    UserRemoved(UserId),
    ActiveChanged(UserId, bool),
    AllActivated,
    RoleChanged(UserId, Role),
    Settled,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Pending(Thunk),
    Rejected(Thunk, String),
    Fulfilled(Outcome),
    SessionExpired,
}

impl AdminState {
    /// Initial state: authenticated iff a session was persisted.
    pub fn from_session(session: Option<&Session>) -> Self {
        let token = session.map(|s| s.access_token.clone());
        Self {
            is_authenticated: token.is_some(),
            token,
            ..Self::default()
        }
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Pending(_) => {
                self.loading = true;
                self.error = None;
            }
            Action::Rejected(_, message) => {
                self.loading = false;
                self.error = Some(message);
            }
            Action::Fulfilled(outcome) => {
                self.loading = false;
                self.fulfil(outcome);
            }
            Action::SessionExpired => self.sign_out(),
        }
    }

    fn sign_out(&mut self) {
        self.token = None;
        self.is_authenticated = false;
        self.users.clear();
        self.selected_user = None;
    }

    fn patch(&mut self, id: UserId, mut f: impl FnMut(&mut User)) {
        if let Some(user) = self.users.iter_mut().find(|u| u.id == id) {
            f(user);
        }
        if let Some(user) = self.selected_user.as_mut().filter(|u| u.id == id) {
            f(user);
        }
    }

    fn fulfil(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::LoggedIn(token) => {
                self.token = Some(token);
                self.is_authenticated = true;
            }
            Outcome::LoggedOut => self.sign_out(),
            Outcome::UsersLoaded(users) => self.users = users,
            Outcome::UserLoaded(user) => self.selected_user = Some(user),
            Outcome::UserUpdated(id, update) => self.patch(id, |u| {
                u.first_name = update.first_name.clone();
                u.last_name = update.last_name.clone();
            }),
            Outcome::UserRemoved(id) => {
                self.users.retain(|u| u.id != id);
                if self.selected_user.as_ref().is_some_and(|u| u.id == id) {
                    self.selected_user = None;
                }
            }
            Outcome::ActiveChanged(id, active) => self.patch(id, |u| u.is_active = active),
            Outcome::AllActivated => {
                for user in &mut self.users {
                    user.is_active = true;
                }
            }
            Outcome::RoleChanged(id, role) => self.patch(id, |u| u.role = role),
            Outcome::Settled => {}
        }
    }
}
