use serde_json::json;
use shared_types::{AppErrorKind, ReportStatus};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::test_client;

#[tokio::test]
async fn update_puts_the_wire_status_string() {
    let (server, client) = test_client().await;

    Mock::given(method("PUT"))
        .and(path("/api/crime/update-status/c1"))
        .and(body_json(json!({ "status": "Closed" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Status updated"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.update_status("c1", ReportStatus::Closed).await.unwrap();
    assert!(resp.success);
    assert_eq!(resp.message_or("fallback"), "Status updated");
}

#[tokio::test]
async fn reopening_sends_open() {
    let (server, client) = test_client().await;

    Mock::given(method("PUT"))
        .and(path("/api/crime/update-status/c1"))
        .and(body_json(json!({ "status": "Open" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.update_status("c1", ReportStatus::Open).await.unwrap();
    assert!(resp.success);
}

#[tokio::test]
async fn forbidden_update_surfaces_kind_and_message() {
    let (server, client) = test_client().await;

    Mock::given(method("PUT"))
        .and(path("/api/crime/update-status/c1"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "success": false,
            "message": "Only authorities can update reports"
        })))
        .mount(&server)
        .await;

    let err = client
        .update_status("c1", ReportStatus::Closed)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(
        err.message_or("Failed to update status"),
        "Only authorities can update reports"
    );
}
