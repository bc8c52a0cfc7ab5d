use shared_types::{AppError, AppErrorKind};
use thiserror::Error;

/// Client error types.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or transport error.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("{0}")]
    Api(AppError),

    /// The refresh exchange failed; local session state has been cleared.
    #[error("Session expired, please sign in again")]
    SessionExpired,

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Build an error from an HTTP status code and raw response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        ClientError::Api(AppError::from_response(status, body))
    }

    /// Whether this is an authorization failure (HTTP 401).
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ClientError::Api(err) if err.kind == AppErrorKind::Unauthorized)
    }

    /// A message safe to show in an error banner.
    pub fn friendly_message(&self) -> String {
        match self {
            ClientError::Api(err) => err.friendly_message().to_string(),
            ClientError::SessionExpired => "Session expired, please sign in again".to_string(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}
