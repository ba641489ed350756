use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of API-adapter errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// Transport-level failure: no response was received.
    Network,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    RateLimited,
    ServerError,
    /// The response arrived but its body could not be decoded.
    Decode,
}

impl AppErrorKind {
    /// Map an HTTP status code to an error kind.
    pub fn for_status(status: u16) -> Self {
        match status {
            400 | 422 => AppErrorKind::BadRequest,
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            429 => AppErrorKind::RateLimited,
            _ => AppErrorKind::ServerError,
        }
    }
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AppErrorKind::Network => "Network",
            AppErrorKind::BadRequest => "BadRequest",
            AppErrorKind::Unauthorized => "Unauthorized",
            AppErrorKind::Forbidden => "Forbidden",
            AppErrorKind::NotFound => "NotFound",
            AppErrorKind::RateLimited => "RateLimited",
            AppErrorKind::ServerError => "ServerError",
            AppErrorKind::Decode => "Decode",
        };
        write!(f, "{name}")
    }
}

/// JSON body the backend attaches to error responses. Every field is
/// optional; some routes send only a status code.
#[derive(Debug, Clone, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Error surfaced by the API adapter.
///
/// `message` carries the backend's human-readable text when one was
/// provided; each call site supplies its own fallback string via
/// [`AppError::message_or`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: Option<String>,
}

impl AppError {
    /// A transport failure. The reqwest detail goes to the logs, not here:
    /// there is no server message to show the user.
    pub fn network() -> Self {
        Self {
            kind: AppErrorKind::Network,
            message: None,
        }
    }

    /// An undecodable response body.
    pub fn decode() -> Self {
        Self {
            kind: AppErrorKind::Decode,
            message: None,
        }
    }

    /// Build an error from a non-2xx response, extracting the optional
    /// `{ "message": ... }` payload.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .unwrap_or_default()
            .message
            .filter(|m| !m.is_empty());
        Self {
            kind: AppErrorKind::for_status(status),
            message,
        }
    }

    /// The server's message, or `fallback` when none was sent. This is
    /// the per-call-site fallback policy used by every view.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{}: {}", self.kind, msg),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for AppError {}
