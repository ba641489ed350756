use serde::{Deserialize, Serialize};

/// Access tier of an authenticated user.
///
/// - `User` can submit reports and see their own.
/// - `Authority` reviews the full report set and edits statuses.
/// - `Admin` has the same visibility as Authority plus account administration
///   (which lives entirely on the backend).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Authority,
    Admin,
}

impl Role {
    /// Parse a wire role string. Unknown values default to `User`
    /// (least privilege).
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "authority" => Role::Authority,
            "admin" => Role::Admin,
            _ => Role::User,
        }
    }

    /// Lowercase wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Authority => "authority",
            Role::Admin => "admin",
        }
    }

    /// Whether this role may change a report's status.
    pub fn can_edit_status(&self) -> bool {
        matches!(self, Role::Authority | Role::Admin)
    }

    /// Whether this role sees every report rather than only its own.
    pub fn can_view_all_reports(&self) -> bool {
        matches!(self, Role::Authority | Role::Admin)
    }
}

/// The authenticated user as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

/// Response of the login and session-restore endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
