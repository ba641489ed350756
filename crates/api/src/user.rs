use crate::client::ApiClient;
use reqwest::Method;
use shared_types::{ApiMessage, AppError, AuthResponse, LoginRequest};

impl ApiClient {
    /// Authenticate with email and password. The session cookie the
    /// backend sets rides along on every later request.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AppError> {
        self.execute(
            self.request(Method::POST, "/api/user/login")
                .json(&LoginRequest {
                    email: email.to_string(),
                    password: password.to_string(),
                }),
        )
        .await
    }

    /// Who the current session belongs to, if anyone. Used once at
    /// application start to restore a session.
    pub async fn current_user(&self) -> Result<AuthResponse, AppError> {
        self.execute(self.request(Method::GET, "/api/user/is-auth"))
            .await
    }

    /// End the current session.
    pub async fn logout(&self) -> Result<ApiMessage, AppError> {
        self.execute(self.request(Method::GET, "/api/user/logout"))
            .await
    }
}
