use serde::{Deserialize, Serialize};

/// Minimal success/failure envelope returned by mutation endpoints
/// (status update, delete, submit, logout).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiMessage {
    /// The server-supplied message, or `fallback` when none was sent.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}
