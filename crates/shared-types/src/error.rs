use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of backend failures by HTTP status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    ValidationError,
    RateLimited,
    ServerError,
}

impl AppErrorKind {
    /// Classify an HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => AppErrorKind::BadRequest,
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            409 => AppErrorKind::Conflict,
            422 => AppErrorKind::ValidationError,
            429 => AppErrorKind::RateLimited,
            _ => AppErrorKind::ServerError,
        }
    }
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::Conflict => write!(f, "Conflict"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::RateLimited => write!(f, "RateLimited"),
            AppErrorKind::ServerError => write!(f, "ServerError"),
        }
    }
}

/// Structured view of a backend error response.
///
/// The consumed API returns Spring-style bodies: a top-level `message`
/// string and, for validation failures, an `errors` map of field names to
/// messages. Anything unparseable degrades to the raw body text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    /// Build an error from an HTTP status and raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let kind = AppErrorKind::from_status(status);

        if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
            let message = value
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| default_message(kind));

            let field_errors = value
                .get("errors")
                .and_then(|e| e.as_object())
                .map(|obj| {
                    obj.iter()
                        .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                        .collect()
                })
                .unwrap_or_default();

            return Self {
                kind,
                message,
                field_errors,
            };
        }

        let message = if body.trim().is_empty() {
            default_message(kind)
        } else {
            body.trim().to_string()
        };
        Self::new(kind, message)
    }

    /// A message safe to show in an error banner.
    pub fn friendly_message(&self) -> &str {
        if self.message.is_empty() {
            "Something went wrong. Please try again."
        } else {
            &self.message
        }
    }
}

fn default_message(kind: AppErrorKind) -> String {
    match kind {
        AppErrorKind::Unauthorized => "Authentication required".to_string(),
        AppErrorKind::Forbidden => "You do not have access to this resource".to_string(),
        AppErrorKind::NotFound => "Resource not found".to_string(),
        _ => "Something went wrong. Please try again.".to_string(),
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
