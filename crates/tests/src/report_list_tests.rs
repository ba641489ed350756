use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{report_json, test_client};

#[tokio::test]
async fn user_scoped_fetch_hits_the_per_user_path() {
    let (server, client) = test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/crime/get-user-crime-reports/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "reports": [report_json("c1", "u1", "Open"), report_json("c2", "u1", "Open")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.user_reports("u1").await.unwrap();

    assert_eq!(resp.reports.len(), 2);
    assert!(resp.reports.iter().all(|r| {
        r.user.as_ref().map(|u| u.id.as_str()) == Some("u1")
    }));
}

#[tokio::test]
async fn full_fetch_hits_the_all_reports_path() {
    let (server, client) = test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/crime/get-all-crime-reports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "reports": [
                report_json("c3", "u1", "Open"),
                report_json("c1", "u2", "Closed"),
                report_json("c2", "u1", "Open"),
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.all_reports().await.unwrap();

    // Server order is preserved verbatim; no client-side sort.
    let ids: Vec<&str> = resp.reports.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["c3", "c1", "c2"]);
}

#[tokio::test]
async fn empty_report_set_decodes() {
    let (server, client) = test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/crime/get-all-crime-reports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "reports": []
        })))
        .mount(&server)
        .await;

    let resp = client.all_reports().await.unwrap();
    assert!(resp.reports.is_empty());
}

#[tokio::test]
async fn listing_failure_carries_the_server_message() {
    let (server, client) = test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/crime/get-user-crime-reports/u1"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "success": false,
            "message": "Not your reports"
        })))
        .mount(&server)
        .await;

    let err = client.user_reports("u1").await.unwrap_err();
    assert_eq!(err.message_or("Failed to fetch reports"), "Not your reports");
}
