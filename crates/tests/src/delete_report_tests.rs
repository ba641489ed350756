use serde_json::json;
use shared_types::AppErrorKind;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::test_client;

#[tokio::test]
async fn delete_targets_the_report_id() {
    let (server, client) = test_client().await;

    Mock::given(method("DELETE"))
        .and(path("/api/crime/delete-crime-report/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Report deleted"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.delete_report("c1").await.unwrap();
    assert!(resp.success);
}

#[tokio::test]
async fn deleting_a_missing_report_maps_to_not_found() {
    let (server, client) = test_client().await;

    Mock::given(method("DELETE"))
        .and(path("/api/crime/delete-crime-report/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "message": "Report not found"
        })))
        .mount(&server)
        .await;

    let err = client.delete_report("gone").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message_or("Failed to delete report"), "Report not found");
}
