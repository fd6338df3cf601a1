use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of errors raised while talking to the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// The request never produced a response (DNS, connection, CORS...).
    Network,
    Unauthorized,
    Forbidden,
    NotFound,
    /// Any other non-success status.
    Server,
    /// The response body did not match the expected shape.
    Decode,
    Config,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::Server => write!(f, "Server"),
            AppErrorKind::Decode => write!(f, "Decode"),
            AppErrorKind::Config => write!(f, "Config"),
        }
    }
}

/// Structured error returned by every client call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    /// HTTP status of the failed response, when there was one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

/// Error body shape the backend uses for JSON failures.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Network, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Decode, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Config, message)
    }

    /// Build an error from a non-success HTTP status and its raw body.
    ///
    /// A JSON body of the form `{"message": "..."}` contributes its message;
    /// any other non-empty body is used verbatim.
    pub fn from_status(status: u16, body: &str) -> Self {
        let kind = match status {
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            _ => AppErrorKind::Server,
        };
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => parsed.message,
            Err(_) if !body.trim().is_empty() => body.trim().to_string(),
            Err(_) => format!("request failed with status {status}"),
        };
        Self {
            kind,
            message,
            status: Some(status),
        }
    }

    /// Whether retrying with the same credentials is pointless.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.kind, AppErrorKind::Unauthorized | AppErrorKind::Forbidden)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} ({}): {}", self.kind, status, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for AppError {}
