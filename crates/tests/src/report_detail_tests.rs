use serde_json::json;
use shared_types::{AppErrorKind, ReportStatus};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{report_json, test_client};

#[tokio::test]
async fn detail_fetch_decodes_the_full_document() {
    let (server, client) = test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/crime/get-crime-report/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "report": report_json("c1", "u1", "Closed")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.report("c1").await.unwrap();
    assert_eq!(resp.report.id, "c1");
    assert_eq!(resp.report.status, ReportStatus::Closed);
    assert_eq!(resp.report.user.unwrap().name, "Dana");
}

#[tokio::test]
async fn missing_report_maps_to_not_found() {
    let (server, client) = test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/crime/get-crime-report/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "message": "Report not found"
        })))
        .mount(&server)
        .await;

    let err = client.report("gone").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}
