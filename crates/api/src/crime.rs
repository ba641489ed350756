use crate::client::ApiClient;
use reqwest::Method;
use shared_types::{
    ApiMessage, AppError, LookupRequest, LookupResponse, ReportListResponse, ReportResponse,
    ReportStatus, StatusUpdateRequest, SubmitReportRequest,
};

impl ApiClient {
    /// Reports owned by one user.
    pub async fn user_reports(&self, user_id: &str) -> Result<ReportListResponse, AppError> {
        let path = format!("/api/crime/get-user-crime-reports/{user_id}");
        self.execute(self.request(Method::GET, &path)).await
    }

    /// The full report set (authority/admin listing).
    pub async fn all_reports(&self) -> Result<ReportListResponse, AppError> {
        self.execute(self.request(Method::GET, "/api/crime/get-all-crime-reports"))
            .await
    }

    /// A single report by id.
    pub async fn report(&self, crime_id: &str) -> Result<ReportResponse, AppError> {
        let path = format!("/api/crime/get-crime-report/{crime_id}");
        self.execute(self.request(Method::GET, &path)).await
    }

    /// Submit a new report.
    pub async fn submit_report(&self, body: &SubmitReportRequest) -> Result<ApiMessage, AppError> {
        self.execute(
            self.request(Method::POST, "/api/crime/report-crime")
                .json(body),
        )
        .await
    }

    /// Change a report's lifecycle status.
    pub async fn update_status(
        &self,
        crime_id: &str,
        status: ReportStatus,
    ) -> Result<ApiMessage, AppError> {
        let path = format!("/api/crime/update-status/{crime_id}");
        self.execute(
            self.request(Method::PUT, &path)
                .json(&StatusUpdateRequest { status }),
        )
        .await
    }

    /// Delete a report.
    pub async fn delete_report(&self, crime_id: &str) -> Result<ApiMessage, AppError> {
        let path = format!("/api/crime/delete-crime-report/{crime_id}");
        self.execute(self.request(Method::DELETE, &path)).await
    }

    /// Match a free-text fraud indicator against recorded incidents.
    /// The raw search string is sent as-is; matching is the backend's.
    pub async fn fraud_lookup(&self, related_info: &str) -> Result<LookupResponse, AppError> {
        self.execute(
            self.request(Method::POST, "/api/crime/fraud-lookup")
                .json(&LookupRequest {
                    related_info: related_info.to_string(),
                }),
        )
        .await
    }
}
