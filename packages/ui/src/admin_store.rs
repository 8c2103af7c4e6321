//! Admin store context and its async actions.
//!
//! [`AdminStoreProvider`] builds the API client once, seeds [`AdminState`]
//! from the persisted session and validates that session in the background.
//! Views grab the store with [`use_admin_store`] and call its actions; each
//! action runs the pending → fulfilled | rejected sequence on the state and
//! hands the client's result back to the caller.

use std::future::Future;

use api::models::TokenValidation;
use api::{
    ApiError, ApiMessage, ApiResult, LoginResponse, Role, User, UserFilter, UserId, UserUpdate,
};
use dioxus::prelude::*;
use store::AdminConfig;

use crate::client::{load_config, make_client, AdminClient};
use crate::state::{Action, AdminState, Outcome, Thunk};

#[derive(Clone, Copy, PartialEq)]
pub struct AdminStore {
    state: Signal<AdminState>,
    client: Signal<AdminClient>,
    config: Signal<AdminConfig>,
}

pub fn use_admin_store() -> AdminStore {
    use_context::<AdminStore>()
}

/// Provides [`AdminStore`] to its children.
#[component]
pub fn AdminStoreProvider(children: Element) -> Element {
    let store = use_context_provider(|| AdminStore::new(load_config()));

    use_future(move || async move { store.validate_session().await });

    rsx! {
        {children}
    }
}

/// Actions that settle `thunk` once its call has returned.
fn settle<R>(
    thunk: Thunk,
    result: &ApiResult<R>,
    outcome: impl FnOnce(&R) -> Outcome,
) -> Vec<Action> {
    match result {
        Ok(value) => vec![Action::Fulfilled(outcome(value))],
        Err(err) => std::iter::once(Action::Rejected(thunk, err.to_string()))
            .chain(expiry(err))
            .collect(),
    }
}

fn expiry(err: &ApiError) -> Option<Action> {
    err.is_unauthorized().then_some(Action::SessionExpired)
}

/// Whether a startup token check ends the session: an explicit "not valid"
/// or a 401. Anything else (backend down, odd status) keeps it.
fn session_ended(check: &ApiResult<TokenValidation>) -> bool {
    match check {
        Ok(validation) => !validation.valid,
        Err(err) => err.is_unauthorized(),
    }
}

impl AdminStore {
    /// Build the client for `config` and seed the state from the persisted
    /// session. Must be called from inside a component.
    pub fn new(config: AdminConfig) -> Self {
        let client = make_client(&config);
        let state = AdminState::from_session(client.session().as_ref());
        Self {
            state: Signal::new(state),
            client: Signal::new(client),
            config: Signal::new(config),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated
    }

    /// Like [`Self::is_authenticated`] without subscribing the caller.
    pub fn peek_authenticated(&self) -> bool {
        self.state.peek().is_authenticated
    }

    /// True while any action is in flight.
    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    /// Detailed message of the last failed action.
    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    pub fn users(&self) -> Vec<User> {
        self.state.read().users.clone()
    }

    pub fn config(&self) -> AdminConfig {
        self.config.read().clone()
    }

    /// A handle on the client for calls that do not touch the shared state
    /// (profile, password, registration).
    pub fn client(&self) -> AdminClient {
        self.client.peek().clone()
    }

    pub fn mock_enabled(&self) -> bool {
        self.client.peek().is_mock_enabled()
    }

    pub fn dispatch(&self, action: Action) {
        let mut state = self.state;
        state.write().apply(action);
    }

    /// Drop authentication if `result` says the session is gone.
    pub fn observe<R>(&self, result: ApiResult<R>) -> ApiResult<R> {
        if let Some(action) = result.as_ref().err().and_then(expiry) {
            tracing::info!("Session expired, signing out");
            self.dispatch(action);
        }
        result
    }

    async fn run<R>(
        &self,
        thunk: Thunk,
        call: impl Future<Output = ApiResult<R>>,
        outcome: impl FnOnce(&R) -> Outcome,
    ) -> ApiResult<R> {
        self.dispatch(Action::Pending(thunk));
        let result = call.await;
        if let Err(err) = &result {
            tracing::warn!("{} failed: {}", thunk.name(), err);
        }
        for action in settle(thunk, &result, outcome) {
            self.dispatch(action);
        }
        result
    }

    /// One-shot check of a persisted token. Only an explicit "not valid"
    /// (or a 401) ends the session; an unreachable backend leaves it alone.
    pub async fn validate_session(&self) {
        let client = self.client();
        let Some(token) = client.sessions().access_token() else {
            return;
        };
        let check = client.validate_token(&token).await;
        if session_ended(&check) {
            tracing::info!("Stored session is no longer valid");
            client.sessions().clear();
            self.dispatch(Action::SessionExpired);
        } else if let Err(err) = check {
            tracing::debug!("Session check skipped: {err}");
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        let client = self.client();
        self.run(Thunk::Login, client.login(email, password), |r| {
            Outcome::LoggedIn(r.access_token.clone().unwrap_or_default())
        })
        .await
    }

    pub async fn logout(&self) {
        let client = self.client();
        self.dispatch(Action::Pending(Thunk::Logout));
        client.logout().await;
        self.dispatch(Action::Fulfilled(Outcome::LoggedOut));
    }

    pub async fn fetch_users(&self, filter: &UserFilter) -> ApiResult<Vec<User>> {
        let client = self.client();
        self.run(Thunk::FetchUsers, client.list_users(filter), |users| {
            Outcome::UsersLoaded(users.clone())
        })
        .await
    }

    pub async fn get_user(&self, id: UserId) -> ApiResult<User> {
        let client = self.client();
        self.run(Thunk::GetUser, client.get_user(id), |user| {
            Outcome::UserLoaded(user.clone())
        })
        .await
    }

    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> ApiResult<ApiMessage> {
        let client = self.client();
        self.run(Thunk::UpdateUser, client.update_user(id, &update), |_| {
            Outcome::UserUpdated(id, update.clone())
        })
        .await
    }

    pub async fn delete_user(&self, id: UserId) -> ApiResult<ApiMessage> {
        let client = self.client();
        self.run(Thunk::DeleteUser, client.delete_user(id), |_| {
            Outcome::UserRemoved(id)
        })
        .await
    }

    pub async fn delete_user_permanent(&self, id: UserId) -> ApiResult<ApiMessage> {
        let client = self.client();
        self.run(
            Thunk::DeleteUserPermanent,
            client.delete_user_permanent(id),
            |_| Outcome::UserRemoved(id),
        )
        .await
    }

    pub async fn suspend_user(&self, id: UserId) -> ApiResult<ApiMessage> {
        let client = self.client();
        self.run(Thunk::SuspendUser, client.suspend_user(id), |_| {
            Outcome::ActiveChanged(id, false)
        })
        .await
    }

    pub async fn activate_user(&self, id: UserId) -> ApiResult<ApiMessage> {
        let client = self.client();
        self.run(Thunk::ActivateUser, client.activate_user(id), |_| {
            Outcome::ActiveChanged(id, true)
        })
        .await
    }

    pub async fn activate_all_users(&self) -> ApiResult<ApiMessage> {
        let client = self.client();
        self.run(Thunk::ActivateAllUsers, client.activate_all_users(), |_| {
            Outcome::AllActivated
        })
        .await
    }

    pub async fn set_user_role(&self, id: UserId, role: Role) -> ApiResult<ApiMessage> {
        let client = self.client();
        self.run(Thunk::SetUserRole, client.set_user_role(id, role), |_| {
            Outcome::RoleChanged(id, role)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Session;

    fn signed_in() -> AdminState {
        AdminState::from_session(Some(&Session::new("token-1")))
    }

    /// Pending, then whatever `settle` decides, the way `run` applies them.
    fn run_to_end<R>(
        state: &mut AdminState,
        thunk: Thunk,
        result: ApiResult<R>,
        outcome: impl FnOnce(&R) -> Outcome,
    ) -> Vec<Action> {
        state.apply(Action::Pending(thunk));
        assert!(state.loading);
        let actions = settle(thunk, &result, outcome);
        for action in actions.clone() {
            state.apply(action);
        }
        actions
    }

    #[test]
    fn test_success_settles_with_outcome() {
        let mut state = signed_in();
        let actions = run_to_end(&mut state, Thunk::ActivateAllUsers, Ok(ApiMessage::default()), |_| {
            Outcome::AllActivated
        });

        assert_eq!(actions, vec![Action::Fulfilled(Outcome::AllActivated)]);
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert!(state.is_authenticated);
    }

    #[test]
    fn test_failure_keeps_detailed_message() {
        let mut state = signed_in();
        let err = ApiError::Status { status: 500, message: "db down".into() };
        let actions = run_to_end(&mut state, Thunk::FetchUsers, Err::<Vec<User>, _>(err), |users| {
            Outcome::UsersLoaded(users.clone())
        });

        assert_eq!(actions.len(), 1);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Request failed (500): db down"));
        assert!(state.is_authenticated);
    }

    #[test]
    fn test_unauthorized_drops_authentication() {
        let mut state = signed_in();
        let actions = run_to_end(
            &mut state,
            Thunk::SuspendUser,
            Err::<ApiMessage, _>(ApiError::Unauthorized),
            |_| Outcome::ActiveChanged(3, false),
        );

        assert_eq!(
            actions,
            vec![
                Action::Rejected(Thunk::SuspendUser, ApiError::Unauthorized.to_string()),
                Action::SessionExpired,
            ]
        );
        assert!(!state.is_authenticated);
        assert!(state.token.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn test_expiry_only_for_unauthorized() {
        assert_eq!(expiry(&ApiError::Unauthorized), Some(Action::SessionExpired));
        assert_eq!(expiry(&ApiError::InvalidCredentials), None);
        assert_eq!(expiry(&ApiError::NotFound), None);
        assert_eq!(expiry(&ApiError::Transport("refused".into())), None);
    }

    #[test]
    fn test_session_check_verdicts() {
        assert!(session_ended(&Ok(TokenValidation { valid: false })));
        assert!(!session_ended(&Ok(TokenValidation { valid: true })));
        assert!(session_ended(&Err(ApiError::Unauthorized)));
        assert!(!session_ended(&Err(ApiError::Transport("refused".into()))));
        assert!(!session_ended(&Err(ApiError::Status { status: 503, message: String::new() })));
    }
}
