use serde_json::json;
use shared_types::AppErrorKind;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::test_client;

use api::{ApiClient, ApiConfig};

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    // Port 1 is never listening; the connection is refused before any
    // response exists, so there is no server message to surface.
    let client = ApiClient::new(ApiConfig::new("http://127.0.0.1:1"));

    let err = client.all_reports().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Network);
    assert!(err.message.is_none());
    assert_eq!(err.message_or("Failed to fetch reports"), "Failed to fetch reports");
}

#[tokio::test]
async fn error_without_message_falls_back_at_the_call_site() {
    let (server, client) = test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/crime/get-all-crime-reports"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client.all_reports().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ServerError);
    assert_eq!(err.message_or("Failed to fetch reports"), "Failed to fetch reports");
}

#[tokio::test]
async fn unauthorized_and_rate_limited_statuses_map_to_kinds() {
    let (server, client) = test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/crime/get-user-crime-reports/u1"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Session expired"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/crime/get-user-crime-reports/u2"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "message": "Too many requests"
        })))
        .mount(&server)
        .await;

    let unauthorized = client.user_reports("u1").await.unwrap_err();
    assert_eq!(unauthorized.kind, AppErrorKind::Unauthorized);
    assert_eq!(unauthorized.message.as_deref(), Some("Session expired"));

    let limited = client.user_reports("u2").await.unwrap_err();
    assert_eq!(limited.kind, AppErrorKind::RateLimited);
}

#[tokio::test]
async fn non_json_success_body_is_a_decode_error() {
    let (server, client) = test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/crime/get-all-crime-reports"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy page</html>"))
        .mount(&server)
        .await;

    let err = client.all_reports().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Decode);
}
