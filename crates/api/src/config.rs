/// Where the client sends its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the backend, without a trailing slash. Empty means
    /// same-origin relative paths.
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Base URL baked in at compile time via `CYBERLENS_API_BASE`.
    /// Unset means the app is served behind the same origin as the API.
    pub fn from_env() -> Self {
        Self::new(option_env!("CYBERLENS_API_BASE").unwrap_or(""))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
