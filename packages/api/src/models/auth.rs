//! Request and response bodies of the `/auth` and `/user` endpoints.

use serde::{Deserialize, Serialize};

use super::user::{Profile, Role};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of a successful `POST /auth/login`.
///
/// Some deployments name the bearer token `token` instead of `accessToken`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default, alias = "token")]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<Profile>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    pub new_password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetRoleRequest {
    pub role: Role,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateTokenRequest {
    pub token: String,
}

/// Body of `POST /auth/validate`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenValidation {
    #[serde(default)]
    pub valid: bool,
}

/// Acknowledgement returned by mutations. An empty body counts as success.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_success() -> bool {
    true
}

impl Default for ApiMessage {
    fn default() -> Self {
        Self {
            success: true,
            message: None,
        }
    }
}

impl ApiMessage {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }
}

/// Minimum length the UI enforces for new passwords.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Checks a new password and its confirmation before anything is sent.
pub fn validate_new_password(new_password: &str, confirm: &str) -> Result<(), String> {
    if new_password != confirm {
        return Err("New passwords do not match".to_string());
    }
    if new_password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_accepts_token_alias() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"token": "abc", "refreshToken": "r"}"#).unwrap();
        assert_eq!(resp.access_token.as_deref(), Some("abc"));
        assert_eq!(resp.refresh_token.as_deref(), Some("r"));

        let resp: LoginResponse = serde_json::from_str(r#"{"accessToken": "xyz"}"#).unwrap();
        assert_eq!(resp.access_token.as_deref(), Some("xyz"));
        assert!(resp.user.is_none());
    }

    #[test]
    fn test_api_message_defaults_to_success() {
        let msg: ApiMessage = serde_json::from_str("{}").unwrap();
        assert!(msg.success);
        let msg: ApiMessage =
            serde_json::from_str(r#"{"success": false, "message": "nope"}"#).unwrap();
        assert!(!msg.success);
        assert_eq!(msg.message.as_deref(), Some("nope"));
    }

    #[test]
    fn test_password_bodies_are_camel_case() {
        let body = serde_json::to_value(ChangePasswordRequest {
            old_password: "a".into(),
            new_password: "b".into(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"oldPassword": "a", "newPassword": "b"}));

        let body = serde_json::to_value(ResetPasswordRequest {
            email: "e".into(),
            otp: "123456".into(),
            new_password: "secret1".into(),
        })
        .unwrap();
        assert_eq!(body["newPassword"], "secret1");
    }

    #[test]
    fn test_validate_new_password() {
        assert!(validate_new_password("secret1", "secret1").is_ok());
        assert_eq!(
            validate_new_password("secret1", "secret2"),
            Err("New passwords do not match".to_string())
        );
        assert_eq!(
            validate_new_password("abc", "abc"),
            Err("Password must be at least 6 characters long".to_string())
        );
    }
}
