//! Errors surfaced by the API client.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered 401. The stored session has already been cleared.
    #[error("Session expired, please sign in again")]
    Unauthorized,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not found")]
    NotFound,

    #[error("Request failed ({status}): {message}")]
    Status { status: u16, message: String },

    /// The request never produced an HTTP response (DNS, refused, timeout, CORS).
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Rejected locally before any request was made.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Transport failures and 5xx: the backend is down rather than saying no.
    pub fn is_unreachable(&self) -> bool {
        match self {
            ApiError::Transport(_) => true,
            ApiError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
