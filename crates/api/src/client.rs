use crate::config::ApiConfig;
use crate::error_convert::ReqwestErrorExt;
use reqwest::Method;
use serde::de::DeserializeOwned;
use shared_types::AppError;

/// HTTP adapter for the CyberLens backend.
///
/// Holds the base URL and a client that sends the session cookie with
/// every request (a cookie jar natively, `credentials: include` on the
/// web target). All endpoint methods live in the `crime` and `user`
/// modules as `impl ApiClient` blocks.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: default_http_client(),
            base_url: config.base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request against an API path, with credentials attached.
    pub(crate) fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        tracing::debug!(method = %method, path, "api request");
        let builder = self.http.request(method, self.url(path));
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    /// Send a request and decode its JSON body.
    ///
    /// Non-2xx responses become [`AppError`]s carrying the backend's
    /// optional `message`; undecodable success bodies map to
    /// `AppErrorKind::Decode`.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, AppError> {
        let response = builder.send().await.map_err(|e| e.into_app_error())?;
        let status = response.status();
        let body = response.text().await.map_err(|e| e.into_app_error())?;

        if !status.is_success() {
            let err = AppError::from_response(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), kind = %err.kind, "api request failed");
            return Err(err);
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(error = %e, "undecodable api response body");
            AppError::decode()
        })
    }
}

fn default_http_client() -> reqwest::Client {
    #[cfg(not(target_arch = "wasm32"))]
    {
        reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("failed to build HTTP client")
    }
    #[cfg(target_arch = "wasm32")]
    {
        reqwest::Client::new()
    }
}
