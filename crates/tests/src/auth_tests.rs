use serde_json::json;
use shared_types::Role;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{test_client, user_json};

#[tokio::test]
async fn login_posts_credentials_and_decodes_the_user() {
    let (server, client) = test_client().await;

    Mock::given(method("POST"))
        .and(path("/api/user/login"))
        .and(body_json(json!({
            "email": "dana@example.com",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "user": user_json("u1", "authority")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.login("dana@example.com", "hunter2").await.unwrap();
    assert!(resp.success);
    let user = resp.user.unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.role, Role::Authority);
}

#[tokio::test]
async fn rejected_login_is_logical_failure_not_an_error() {
    let (server, client) = test_client().await;

    Mock::given(method("POST"))
        .and(path("/api/user/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Invalid email or password"
        })))
        .mount(&server)
        .await;

    let resp = client.login("dana@example.com", "wrong").await.unwrap();
    assert!(!resp.success);
    assert!(resp.user.is_none());
    assert_eq!(resp.message.as_deref(), Some("Invalid email or password"));
}

#[tokio::test]
async fn session_restore_hits_is_auth() {
    let (server, client) = test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/user/is-auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "user": user_json("u1", "user")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.current_user().await.unwrap();
    assert_eq!(resp.user.unwrap().role, Role::User);
}

#[tokio::test]
async fn logout_hits_the_expected_path() {
    let (server, client) = test_client().await;

    Mock::given(method("GET"))
        .and(path("/api/user/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Logged out"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.logout().await.unwrap();
    assert!(resp.success);
    assert_eq!(resp.message_or("Logged out successfully"), "Logged out");
}
