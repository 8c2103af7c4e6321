//! # API client — one method per backend operation
//!
//! [`ApiClient`] wraps a [`Transport`] and a [`SessionStore`]. Every call:
//!
//! 1. attaches the stored access token as a bearer token, when there is one;
//! 2. sends the request through the transport;
//! 3. maps the status: 2xx decodes the body, **401 clears the stored
//!    session** and yields [`ApiError::Unauthorized`], 404 yields
//!    [`ApiError::NotFound`], anything else [`ApiError::Status`] with the
//!    backend's message;
//! 4. when the demo fallback is enabled and the backend is unreachable
//!    (transport failure or 5xx), answers from the [`MockBackend`] instead.
//!
//! Reacting to `Unauthorized` (dropping the UI's auth state, routing to the
//! login screen) is the caller's job; the client only guarantees the tokens
//! are gone by the time the error is returned.
//!
//! The client is `Clone`; clones share the session store and the mock data.

use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use store::{ApiConfig, KeyValueStore, Session, SessionStore};

use crate::error::{ApiError, ApiResult};
use crate::mock::{MockBackend, DEMO_ACCESS_TOKEN};
use crate::models::{
    ApiMessage, ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, LoginResponse,
    Profile, RegisterRequest, ResetPasswordRequest, Role, SetRoleRequest, TokenValidation, User,
    UserFilter, UserId, UserUpdate, ValidateTokenRequest,
};
use crate::transport::{ApiRequest, ApiResponse, Transport};

/// Endpoint prefixes, resolved once from [`ApiConfig`].
#[derive(Clone, Debug)]
struct Routes {
    auth: String,
    users: String,
    admin: String,
    account: String,
}

fn join(prefix: &str, suffix: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if suffix.is_empty() {
        prefix.to_string()
    } else {
        format!("{prefix}/{suffix}")
    }
}

impl Routes {
    fn new(config: &ApiConfig) -> Self {
        Self {
            auth: config.auth_prefix.clone(),
            users: config.users_prefix.clone(),
            admin: config.admin_prefix.clone(),
            account: config.account_prefix.clone(),
        }
    }

    fn auth(&self, suffix: &str) -> String {
        join(&self.auth, suffix)
    }

    fn users(&self, suffix: &str) -> String {
        join(&self.users, suffix)
    }

    fn admin(&self, suffix: &str) -> String {
        join(&self.admin, suffix)
    }

    fn account(&self, suffix: &str) -> String {
        join(&self.account, suffix)
    }
}

/// `GET /api/users` answers either a bare array or a page object.
#[derive(Deserialize)]
#[serde(untagged)]
enum UserList {
    Plain(Vec<User>),
    Page {
        #[serde(alias = "items", alias = "data")]
        users: Vec<User>,
    },
}

impl UserList {
    fn into_users(self) -> Vec<User> {
        match self {
            UserList::Plain(users) | UserList::Page { users } => users,
        }
    }
}

/// Pull a human-readable message out of an error body.
fn error_message(body: &str, status: u16) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return format!("HTTP {status}");
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        for key in ["message", "error", "title"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
    }
    trimmed.to_string()
}

/// Client for the user-management backend.
#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    transport: T,
    sessions: SessionStore<S>,
    routes: Routes,
    mock: Option<Arc<Mutex<MockBackend>>>,
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn new(transport: T, store: S, config: &ApiConfig) -> Self {
        let mock = config
            .mock_fallback
            .then(|| Arc::new(Mutex::new(MockBackend::new())));
        Self {
            transport,
            sessions: SessionStore::new(store),
            routes: Routes::new(config),
            mock,
        }
    }

    /// The persisted session, if any.
    pub fn session(&self) -> Option<Session> {
        self.sessions.load()
    }

    pub fn sessions(&self) -> &SessionStore<S> {
        &self.sessions
    }

    pub fn is_mock_enabled(&self) -> bool {
        self.mock.is_some()
    }

    async fn execute(&self, mut request: ApiRequest) -> ApiResult<ApiResponse> {
        request.bearer = self.sessions.access_token();
        let method = request.method;
        let path = request.path.clone();

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("API error: {} {}: {}", method.as_str(), path, err);
                return Err(err);
            }
        };
        if response.is_success() {
            return Ok(response);
        }

        tracing::warn!("API error: {} {} returned {}", method.as_str(), path, response.status);
        match response.status {
            401 => {
                self.sessions.clear();
                Err(ApiError::Unauthorized)
            }
            404 => Err(ApiError::NotFound),
            status => Err(ApiError::Status {
                status,
                message: error_message(&response.body, status),
            }),
        }
    }

    async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<R> {
        let response = self.execute(request).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Send a mutation. Bodies that are not an [`ApiMessage`] (empty, or the
    /// updated record) still count as success.
    async fn acknowledge(&self, request: ApiRequest) -> ApiResult<ApiMessage> {
        let response = self.execute(request).await?;
        Ok(serde_json::from_str(&response.body).unwrap_or_default())
    }

    fn or_mock<R>(
        &self,
        result: ApiResult<R>,
        fallback: impl FnOnce(&mut MockBackend) -> ApiResult<R>,
    ) -> ApiResult<R> {
        match result {
            Err(err) if err.is_unreachable() => {
                let Some(mock) = &self.mock else {
                    return Err(err);
                };
                let Ok(mut backend) = mock.lock() else {
                    return Err(err);
                };
                tracing::info!("Using mock data for demonstration ({err})");
                fallback(&mut backend)
            }
            other => other,
        }
    }

    // ---------------------------------------------------------------------
    // Authentication
    // ---------------------------------------------------------------------

    /// Sign in and persist the issued tokens.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        let body = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let request = ApiRequest::post(self.routes.auth("login")).with_json(&body)?;
        let result = match self.fetch::<LoginResponse>(request).await {
            Err(ApiError::Unauthorized) => Err(ApiError::InvalidCredentials),
            other => other,
        };
        let response = self.or_mock(result, |mock| mock.login(&body.email, &body.password))?;

        let Some(token) = response.access_token.clone().filter(|t| !t.is_empty()) else {
            return Err(ApiError::Decode("login response carries no access token".to_string()));
        };
        let mut session = Session::new(token);
        if let Some(refresh) = response.refresh_token.clone().filter(|t| !t.is_empty()) {
            session = session.with_refresh_token(refresh);
        }
        self.sessions.save(&session);
        tracing::info!("Signed in as {}", body.email);

        Ok(response)
    }

    /// Drop the local session, then tell the backend. Backend failures are
    /// logged and otherwise ignored.
    pub async fn logout(&self) {
        let token = self.sessions.access_token();
        self.sessions.clear();
        let Some(token) = token else {
            return;
        };

        let mut request = ApiRequest::post(self.routes.auth("logout"));
        request.bearer = Some(token);
        match self.transport.send(request).await {
            Ok(resp) if !resp.is_success() => {
                tracing::warn!("Logout returned {}", resp.status);
            }
            Err(err) => tracing::warn!("Logout error: {err}"),
            Ok(_) => {}
        }
    }

    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<ApiMessage> {
        let req = ApiRequest::post(self.routes.auth("register")).with_json(request)?;
        let result = self.acknowledge(req).await;
        self.or_mock(result, |_| Ok(ApiMessage::ok("Registration successful (mock)")))
    }

    pub async fn forgot_password(&self, email: &str) -> ApiResult<ApiMessage> {
        let body = ForgotPasswordRequest {
            email: email.trim().to_string(),
        };
        let req = ApiRequest::post(self.routes.auth("forgot-password")).with_json(&body)?;
        let result = self.acknowledge(req).await;
        self.or_mock(result, |_| Ok(ApiMessage::ok("Password reset email sent (mock)")))
    }

    pub async fn reset_password(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
    ) -> ApiResult<ApiMessage> {
        let body = ResetPasswordRequest {
            email: email.trim().to_string(),
            otp: otp.trim().to_string(),
            new_password: new_password.to_string(),
        };
        let req = ApiRequest::post(self.routes.auth("reset-password")).with_json(&body)?;
        let result = self.acknowledge(req).await;
        self.or_mock(result, |_| Ok(ApiMessage::ok("Password reset successful (mock)")))
    }

    pub async fn validate_token(&self, token: &str) -> ApiResult<TokenValidation> {
        let body = ValidateTokenRequest {
            token: token.to_string(),
        };
        let req = ApiRequest::post(self.routes.auth("validate")).with_json(&body)?;
        let result = self.fetch(req).await;
        // The mock only vouches for its own token. A real token checked
        // against an unreachable backend stays an error.
        if token != DEMO_ACCESS_TOKEN {
            return result;
        }
        self.or_mock(result, |mock| Ok(mock.validate(token)))
    }

    // ---------------------------------------------------------------------
    // User administration
    // ---------------------------------------------------------------------

    pub async fn list_users(&self, filter: &UserFilter) -> ApiResult<Vec<User>> {
        let req = ApiRequest::get(self.routes.users("")).with_query(filter.to_query());
        let result = self.fetch::<UserList>(req).await.map(UserList::into_users);
        self.or_mock(result, |mock| Ok(mock.list(filter)))
    }

    pub async fn get_user(&self, id: UserId) -> ApiResult<User> {
        let req = ApiRequest::get(self.routes.users(&id.to_string()));
        let result = self.fetch(req).await;
        self.or_mock(result, |mock| mock.get(id))
    }

    pub async fn update_user(&self, id: UserId, update: &UserUpdate) -> ApiResult<ApiMessage> {
        let req = ApiRequest::put(self.routes.users(&id.to_string())).with_json(update)?;
        let result = self.acknowledge(req).await;
        self.or_mock(result, |mock| Ok(mock.update(id, update)))
    }

    pub async fn delete_user(&self, id: UserId) -> ApiResult<ApiMessage> {
        let req = ApiRequest::delete(self.routes.users(&id.to_string()));
        let result = self.acknowledge(req).await;
        self.or_mock(result, |mock| Ok(mock.delete(id)))
    }

    /// Hard delete through the admin endpoint.
    pub async fn delete_user_permanent(&self, id: UserId) -> ApiResult<ApiMessage> {
        let req = ApiRequest::delete(self.routes.admin(&format!("delete-user/{id}")));
        let result = self.acknowledge(req).await;
        self.or_mock(result, |mock| Ok(mock.delete(id)))
    }

    pub async fn suspend_user(&self, id: UserId) -> ApiResult<ApiMessage> {
        let req = ApiRequest::post(self.routes.users(&format!("{id}/suspend")));
        let result = self.acknowledge(req).await;
        self.or_mock(result, |mock| Ok(mock.set_active(id, false)))
    }

    pub async fn activate_user(&self, id: UserId) -> ApiResult<ApiMessage> {
        let req = ApiRequest::post(self.routes.users(&format!("{id}/activate")));
        let result = self.acknowledge(req).await;
        self.or_mock(result, |mock| Ok(mock.set_active(id, true)))
    }

    pub async fn activate_all_users(&self) -> ApiResult<ApiMessage> {
        let req = ApiRequest::post(self.routes.users("activate-all"));
        let result = self.acknowledge(req).await;
        self.or_mock(result, |mock| Ok(mock.activate_all()))
    }

    pub async fn set_user_role(&self, id: UserId, role: Role) -> ApiResult<ApiMessage> {
        let req = ApiRequest::put(self.routes.admin(&format!("set-role/{id}")))
            .with_json(&SetRoleRequest { role })?;
        let result = self.acknowledge(req).await;
        self.or_mock(result, |mock| Ok(mock.set_role(id, role)))
    }

    // ---------------------------------------------------------------------
    // Own account
    // ---------------------------------------------------------------------

    pub async fn get_profile(&self) -> ApiResult<Profile> {
        let req = ApiRequest::get(self.routes.account("profile"));
        let result = self.fetch(req).await;
        self.or_mock(result, |mock| Ok(mock.profile()))
    }

    pub async fn update_profile(&self, update: &UserUpdate) -> ApiResult<ApiMessage> {
        let req = ApiRequest::put(self.routes.account("profile")).with_json(update)?;
        let result = self.acknowledge(req).await;
        self.or_mock(result, |_| Ok(ApiMessage::ok("Profile updated successfully (mock)")))
    }

    pub async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> ApiResult<ApiMessage> {
        let body = ChangePasswordRequest {
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        };
        let req = ApiRequest::put(self.routes.account("change-password")).with_json(&body)?;
        let result = self.acknowledge(req).await;
        self.or_mock(result, |_| Ok(ApiMessage::ok("Password changed successfully (mock)")))
    }

    /// Delete the signed-in account. On success the local session is gone too.
    pub async fn delete_account(&self) -> ApiResult<ApiMessage> {
        let req = ApiRequest::delete(self.routes.account("delete-account"));
        let result = self.acknowledge(req).await;
        let message =
            self.or_mock(result, |_| Ok(ApiMessage::ok("Account deleted successfully (mock)")))?;
        self.sessions.clear();
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{DEMO_EMAIL, DEMO_PASSWORD};
    use crate::transport::Method;
    use std::collections::VecDeque;
    use store::MemoryStore;

    /// Replays canned responses in order and records every request.
    #[derive(Clone, Default)]
    struct ScriptedTransport {
        responses: Arc<Mutex<VecDeque<ApiResult<ApiResponse>>>>,
        requests: Arc<Mutex<Vec<ApiRequest>>>,
    }

    impl ScriptedTransport {
        fn reply(self, status: u16, body: &str) -> Self {
            self.responses
                .lock()
                .unwrap()
                .push_back(Ok(ApiResponse::new(status, body)));
            self
        }

        fn fail(self) -> Self {
            self.responses
                .lock()
                .unwrap()
                .push_back(Err(ApiError::Transport("connection refused".to_string())));
            self
        }

        fn requests(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Transport for ScriptedTransport {
        async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_string())))
        }
    }

    fn client(
        transport: &ScriptedTransport,
        mock_fallback: bool,
    ) -> (ApiClient<ScriptedTransport, MemoryStore>, MemoryStore) {
        let store = MemoryStore::new();
        let config = ApiConfig {
            mock_fallback,
            ..ApiConfig::default()
        };
        (ApiClient::new(transport.clone(), store.clone(), &config), store)
    }

    fn signed_in(client: &ApiClient<ScriptedTransport, MemoryStore>) {
        client
            .sessions()
            .save(&Session::new("token-1").with_refresh_token("refresh-1"));
    }

    const USERS_JSON: &str = r#"[
        {"id": 1, "firstName": "John", "lastName": "Doe", "email": "john@example.com", "role": "Admin", "isActive": true},
        {"id": 2, "firstName": "Jane", "lastName": "Smith", "email": "jane@example.com", "role": "user", "isActive": false}
    ]"#;

    #[tokio::test]
    async fn test_login_stores_tokens() {
        let transport = ScriptedTransport::default().reply(
            200,
            r#"{"accessToken": "jwt-abc", "refreshToken": "ref-abc", "user": {"firstName": "Ada", "email": "ada@example.com"}}"#,
        );
        let (client, _) = client(&transport, false);

        let response = client.login(" ada@example.com ", "pw").await.unwrap();
        assert_eq!(response.user.unwrap().first_name, "Ada");

        let session = client.session().unwrap();
        assert_eq!(session.access_token, "jwt-abc");
        assert_eq!(session.refresh_token.as_deref(), Some("ref-abc"));

        let sent = &transport.requests()[0];
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.path, "/auth/login");
        assert_eq!(
            sent.body,
            Some(serde_json::json!({"email": "ada@example.com", "password": "pw"}))
        );
    }

    #[tokio::test]
    async fn test_login_without_token_fails_and_stores_nothing() {
        let transport = ScriptedTransport::default().reply(200, r#"{"message": "ok"}"#);
        let (client, store) = client(&transport, false);

        let err = client.login("a@b.c", "pw").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(client.session().is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_login_401_is_invalid_credentials() {
        let transport = ScriptedTransport::default().reply(401, r#"{"message": "bad"}"#);
        let (client, _) = client(&transport, true);

        let err = client.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap_err();
        assert_eq!(err, ApiError::InvalidCredentials);
        assert!(client.session().is_none());
    }

    #[tokio::test]
    async fn test_401_clears_session() {
        let transport = ScriptedTransport::default().reply(401, "");
        let (client, store) = client(&transport, false);
        signed_in(&client);
        store.set("theme", "light");

        let err = client.list_users(&UserFilter::default()).await.unwrap_err();
        assert_eq!(err, ApiError::Unauthorized);
        assert!(client.session().is_none());
        assert_eq!(store.get("theme").as_deref(), Some("light"));
        assert_eq!(transport.requests()[0].bearer.as_deref(), Some("token-1"));
    }

    #[tokio::test]
    async fn test_401_never_falls_back_to_mock() {
        let transport = ScriptedTransport::default().reply(401, "");
        let (client, _) = client(&transport, true);
        signed_in(&client);

        let err = client.suspend_user(2).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert!(client.session().is_none());
    }

    #[tokio::test]
    async fn test_no_bearer_without_session() {
        let transport = ScriptedTransport::default().reply(200, "[]");
        let (client, _) = client(&transport, false);

        let users = client.list_users(&UserFilter::default()).await.unwrap();
        assert!(users.is_empty());
        assert!(transport.requests()[0].bearer.is_none());
    }

    #[tokio::test]
    async fn test_list_users_sends_filter_and_reads_both_shapes() {
        let transport = ScriptedTransport::default()
            .reply(200, USERS_JSON)
            .reply(200, &format!(r#"{{"items": {USERS_JSON}, "total": 2}}"#));
        let (client, _) = client(&transport, false);
        signed_in(&client);

        let filter = UserFilter::default().with_role(Role::Admin).with_page(1, 10);
        let users = client.list_users(&filter).await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].role, Role::User);

        let paged = client.list_users(&UserFilter::default()).await.unwrap();
        assert_eq!(paged, users);

        let sent = &transport.requests()[0];
        assert_eq!(sent.path, "/api/users");
        assert_eq!(
            sent.query,
            vec![
                ("role".to_string(), "Admin".to_string()),
                ("page".to_string(), "1".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_mutation_paths() {
        let transport = ScriptedTransport::default()
            .reply(204, "")
            .reply(200, r#"{"success": true, "message": "done"}"#)
            .reply(200, "")
            .reply(200, "")
            .reply(200, r#"{"id": 3, "firstName": "New"}"#)
            .reply(200, "")
            .reply(200, "");
        let (client, _) = client(&transport, false);
        signed_in(&client);

        assert!(client.suspend_user(3).await.unwrap().success);
        assert_eq!(
            client.activate_user(3).await.unwrap().message.as_deref(),
            Some("done")
        );
        client.activate_all_users().await.unwrap();
        client.set_user_role(3, Role::Manager).await.unwrap();
        client
            .update_user(3, &UserUpdate { first_name: "New".into(), last_name: "Name".into() })
            .await
            .unwrap();
        client.delete_user(3).await.unwrap();
        client.delete_user_permanent(3).await.unwrap();

        let sent: Vec<(Method, String)> = transport
            .requests()
            .into_iter()
            .map(|r| (r.method, r.path))
            .collect();
        assert_eq!(
            sent,
            vec![
                (Method::Post, "/api/users/3/suspend".to_string()),
                (Method::Post, "/api/users/3/activate".to_string()),
                (Method::Post, "/api/users/activate-all".to_string()),
                (Method::Put, "/admin/set-role/3".to_string()),
                (Method::Put, "/api/users/3".to_string()),
                (Method::Delete, "/api/users/3".to_string()),
                (Method::Delete, "/admin/delete-user/3".to_string()),
            ]
        );
        assert_eq!(
            transport.requests()[3].body,
            Some(serde_json::json!({"role": "Manager"}))
        );
    }

    #[tokio::test]
    async fn test_error_status_carries_backend_message() {
        let transport = ScriptedTransport::default()
            .reply(409, r#"{"message": "Email already in use"}"#)
            .reply(400, "plain text")
            .reply(404, "");
        let (client, _) = client(&transport, true);
        signed_in(&client);

        let err = client
            .update_profile(&UserUpdate::default())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Status { status: 409, message: "Email already in use".to_string() }
        );

        let err = client.change_password("old", "newpass").await.unwrap_err();
        assert_eq!(err, ApiError::Status { status: 400, message: "plain text".to_string() });

        assert_eq!(client.get_user(99).await.unwrap_err(), ApiError::NotFound);
        assert!(client.session().is_some());
    }

    #[tokio::test]
    async fn test_unreachable_backend_without_mock_is_an_error() {
        let transport = ScriptedTransport::default().fail();
        let (client, _) = client(&transport, false);

        let err = client.list_users(&UserFilter::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn test_mock_fallback_filters_by_role() {
        let transport = ScriptedTransport::default().fail().reply(503, "");
        let (client, _) = client(&transport, true);

        let admins = client
            .list_users(&UserFilter::default().with_role("ADMIN".parse().unwrap()))
            .await
            .unwrap();
        assert!(!admins.is_empty());
        assert!(admins.iter().all(|u| u.role == Role::Admin));

        let everyone = client.list_users(&UserFilter::default()).await.unwrap();
        assert_eq!(everyone.len(), 6);
    }

    #[tokio::test]
    async fn test_mock_mutations_show_up_in_later_lists() {
        let transport = ScriptedTransport::default();
        let (client, _) = client(&transport, true);

        let before = client.get_user(2).await.unwrap();
        client.suspend_user(2).await.unwrap();
        client.delete_user(4).await.unwrap();

        let users = client.list_users(&UserFilter::default()).await.unwrap();
        assert!(users.iter().all(|u| u.id != 4));
        let after = users.into_iter().find(|u| u.id == 2).unwrap();
        assert!(!after.is_active);
        assert_eq!(User { is_active: true, ..after }, before);
    }

    #[tokio::test]
    async fn test_mock_login_and_validation() {
        let transport = ScriptedTransport::default();
        let (client, _) = client(&transport, true);

        assert_eq!(
            client.login(DEMO_EMAIL, "nope").await.unwrap_err(),
            ApiError::InvalidCredentials
        );
        client.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        assert_eq!(client.session().unwrap().access_token, DEMO_ACCESS_TOKEN);
        assert!(client.validate_token(DEMO_ACCESS_TOKEN).await.unwrap().valid);
    }

    #[tokio::test]
    async fn test_validate_real_token_with_backend_down_is_an_error() {
        let transport = ScriptedTransport::default().fail();
        let (client, _) = client(&transport, true);
        client.sessions().save(&Session::new("real-backend-jwt"));

        let err = client.validate_token("real-backend-jwt").await.unwrap_err();
        assert!(err.is_unreachable());
        assert_eq!(client.session().unwrap().access_token, "real-backend-jwt");
    }

    #[tokio::test]
    async fn test_logout_clears_session_even_when_backend_fails() {
        let transport = ScriptedTransport::default().fail();
        let (client, _) = client(&transport, false);
        signed_in(&client);

        client.logout().await;
        assert!(client.session().is_none());
        let sent = &transport.requests()[0];
        assert_eq!(sent.path, "/auth/logout");
        assert_eq!(sent.bearer.as_deref(), Some("token-1"));
    }

    #[tokio::test]
    async fn test_logout_without_session_sends_nothing() {
        let transport = ScriptedTransport::default();
        let (client, _) = client(&transport, false);

        client.logout().await;
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_delete_account_ends_session() {
        let transport = ScriptedTransport::default().reply(200, "");
        let (client, _) = client(&transport, false);
        signed_in(&client);

        client.delete_account().await.unwrap();
        assert!(client.session().is_none());
        assert_eq!(transport.requests()[0].path, "/user/delete-account");
    }

    #[tokio::test]
    async fn test_account_endpoints() {
        let transport = ScriptedTransport::default()
            .reply(200, r#"{"firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com", "role": "Admin"}"#)
            .reply(200, "")
            .reply(200, "")
            .reply(200, "")
            .reply(200, r#"{"valid": false}"#);
        let (client, _) = client(&transport, false);
        signed_in(&client);

        let profile = client.get_profile().await.unwrap();
        assert_eq!(profile.initials(), "AL");
        client.forgot_password("ada@example.com").await.unwrap();
        client.reset_password("ada@example.com", " 123456 ", "secret1").await.unwrap();
        client
            .register(&RegisterRequest {
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                email: "ada@example.com".into(),
                password: "secret1".into(),
                role: None,
            })
            .await
            .unwrap();
        assert!(!client.validate_token("token-1").await.unwrap().valid);

        let paths: Vec<String> = transport.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            vec![
                "/user/profile",
                "/auth/forgot-password",
                "/auth/reset-password",
                "/auth/register",
                "/auth/validate",
            ]
        );
        assert_eq!(transport.requests()[2].body.as_ref().unwrap()["otp"], "123456");
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(error_message(r#"{"error": "boom"}"#, 500), "boom");
        assert_eq!(error_message(r#"{"title": "Bad Request"}"#, 400), "Bad Request");
        assert_eq!(error_message("  ", 502), "HTTP 502");
        assert_eq!(error_message(r#"{"other": 1}"#, 400), r#"{"other": 1}"#);
    }

    #[test]
    fn test_custom_prefixes() {
        let config = ApiConfig {
            auth_prefix: "/api/v1/ums/auth/".to_string(),
            admin_prefix: "/api/v1/ums/admin".to_string(),
            ..ApiConfig::default()
        };
        let routes = Routes::new(&config);
        assert_eq!(routes.auth("login"), "/api/v1/ums/auth/login");
        assert_eq!(routes.admin("set-role/4"), "/api/v1/ums/admin/set-role/4");
        assert_eq!(routes.users(""), "/api/users");
    }
}
