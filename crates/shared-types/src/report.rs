use serde::{Deserialize, Serialize};
use std::fmt;

// ── Validation constants ────────────────────────────────────────────

/// Report categories offered by the submission form.
pub const REPORT_CATEGORIES: &[&str] = &[
    "Phishing",
    "Identity Theft",
    "Online Fraud",
    "Hacking",
    "Cyberbullying",
    "Other",
];

/// Check whether a category string is one the form offers.
pub fn is_valid_category(s: &str) -> bool {
    REPORT_CATEGORIES.contains(&s)
}

// ── Status ──────────────────────────────────────────────────────────

/// Lifecycle status of a crime report.
///
/// The backend stores exactly these two values; the wire strings are the
/// capitalized variant names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ReportStatus {
    #[default]
    Open,
    Closed,
}

impl ReportStatus {
    /// All statuses, in the order the status select renders them.
    pub const ALL: &'static [ReportStatus] = &[ReportStatus::Open, ReportStatus::Closed];

    /// Wire string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Open => "Open",
            ReportStatus::Closed => "Closed",
        }
    }

    /// Strict parse of a wire string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Open" => Some(ReportStatus::Open),
            "Closed" => Some(ReportStatus::Closed),
            _ => None,
        }
    }

    /// Lenient parse, falling back to `Open` for unknown values.
    pub fn from_str_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── Wire structs ────────────────────────────────────────────────────

/// Projection of the owning user nested inside a report document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportOwner {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A submitted crime report as the backend returns it.
///
/// Field names follow the backend's document shape (`_id`, `createdAt`),
/// so these structs decode API payloads directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub location: String,
    /// Incident date, ISO-8601.
    pub date: String,
    pub status: ReportStatus,
    /// Fraud indicators tied to this report (phone numbers, emails, URLs).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<ReportOwner>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

// ── API response shells ─────────────────────────────────────────────

/// Response of the report-listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub reports: Vec<Report>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response of the single-report endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    #[serde(default)]
    pub success: bool,
    pub report: Report,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response of the fraud-lookup endpoint.
///
/// `success: false` is a logical failure (the message explains why);
/// `success: true` with an empty `crimes` list means no record matched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResponse {
    pub success: bool,
    #[serde(default)]
    pub crimes: Vec<Report>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
