use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{report_json, test_client};

#[tokio::test]
async fn lookup_posts_the_raw_search_string() {
    let (server, client) = test_client().await;

    Mock::given(method("POST"))
        .and(path("/api/crime/fraud-lookup"))
        .and(body_json(json!({ "related_info": "+1-555-0100 " })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "crimes": [report_json("c1", "u1", "Open")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // The term goes over the wire untouched, trailing whitespace included.
    let resp = client.fraud_lookup("+1-555-0100 ").await.unwrap();
    assert!(resp.success);
    assert_eq!(resp.crimes.len(), 1);
}

#[tokio::test]
async fn matches_decode_in_response_order() {
    let (server, client) = test_client().await;

    Mock::given(method("POST"))
        .and(path("/api/crime/fraud-lookup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "crimes": [report_json("r2", "u1", "Open"), report_json("r1", "u2", "Closed")]
        })))
        .mount(&server)
        .await;

    let resp = client.fraud_lookup("scam@example.com").await.unwrap();
    let ids: Vec<&str> = resp.crimes.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["r2", "r1"]);
}

#[tokio::test]
async fn zero_matches_is_logical_success() {
    let (server, client) = test_client().await;

    Mock::given(method("POST"))
        .and(path("/api/crime/fraud-lookup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "crimes": []
        })))
        .mount(&server)
        .await;

    let resp = client.fraud_lookup("nobody@example.com").await.unwrap();
    assert!(resp.success);
    assert!(resp.crimes.is_empty());
}

#[tokio::test]
async fn logical_failure_passes_the_message_through() {
    let (server, client) = test_client().await;

    Mock::given(method("POST"))
        .and(path("/api/crime/fraud-lookup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Lookup temporarily disabled"
        })))
        .mount(&server)
        .await;

    let resp = client.fraud_lookup("scam@example.com").await.unwrap();
    assert!(!resp.success);
    assert_eq!(resp.message.as_deref(), Some("Lookup temporarily disabled"));
    assert!(resp.crimes.is_empty());
}
