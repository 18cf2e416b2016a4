//! Cookie-session HTTP client for the partner backend.

use super::ClientError;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Every request carries the session cookie; the backend decides what the
/// caller may do. There is no separate authenticated client type because
/// authentication is ambient (cookie), not a bearer credential.
#[derive(Clone)]
pub struct DingClient {
    client: Client,
    base_url: String,
}

impl DingClient {
    /// Create a client with the default request ceiling.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new_with_timeout(base_url, Some(DingClientBuilder::DEFAULT_TIMEOUT))
    }

    fn new_with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        #[cfg(not(target_arch = "wasm32"))]
        let client = {
            let mut builder = ClientBuilder::new()
                .user_agent("ding-client/0.1.0")
                .cookie_store(true);
            if let Some(timeout) = timeout {
                builder = builder.timeout(timeout);
            }
            builder.build()?
        };

        #[cfg(target_arch = "wasm32")]
        let client = {
            let _ = timeout; // Timeouts not supported on WASM
            // The browser holds the session cookie; fetch must be told to
            // attach it to cross-origin API calls.
            ClientBuilder::new().fetch_credentials_include().build()?
        };

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder for a backend path
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }
}

/// Builder for [`DingClient`].
pub struct DingClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl DingClientBuilder {
    /// Ceiling applied to every call (native targets only; browser fetch
    /// has no per-request timeout).
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a new builder
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: Some(Self::DEFAULT_TIMEOUT),
        }
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Override the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<DingClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        DingClient::new_with_timeout(base_url, self.timeout)
    }
}

impl Default for DingClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_base_url() {
        assert!(matches!(
            DingClientBuilder::new().build(),
            Err(ClientError::Configuration(_))
        ));
    }

    #[test]
    fn builder_normalizes_trailing_slash() {
        let client = DingClientBuilder::new()
            .base_url("http://localhost:5010/api/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:5010/api");
    }
}
