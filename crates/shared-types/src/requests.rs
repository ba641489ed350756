use crate::report::ReportStatus;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/user/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/crime/report-crime`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitReportRequest {
    pub title: String,
    pub category: String,
    pub description: String,
    pub location: String,
    /// Incident date, `YYYY-MM-DD`.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_info: Option<String>,
}

/// Body of `PUT /api/crime/update-status/{crimeId}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: ReportStatus,
}

/// Body of `POST /api/crime/fraud-lookup`.
///
/// Carries the raw search string; matching semantics are the backend's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupRequest {
    pub related_info: String,
}
