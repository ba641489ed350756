use api::{ApiClient, ApiConfig};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Spin up a mock backend and an ApiClient pointed at it.
pub async fn test_client() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(ApiConfig::new(server.uri()));
    (server, client)
}

/// A backend-shaped report document.
pub fn report_json(id: &str, owner_id: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "title": format!("Report {id}"),
        "category": "Phishing",
        "description": "Text message asking for card PIN",
        "location": "Springfield",
        "date": "2026-03-14T00:00:00.000Z",
        "status": status,
        "related_info": "+1-555-0100, scam@example.com",
        "user": { "_id": owner_id, "name": "Dana" },
        "createdAt": "2026-03-15T09:21:44.000Z",
        "updatedAt": "2026-03-15T09:21:44.000Z"
    })
}

/// A backend-shaped authenticated user.
pub fn user_json(id: &str, role: &str) -> Value {
    json!({
        "_id": id,
        "name": "Dana",
        "email": "dana@example.com",
        "role": role
    })
}
