//! # HTTP Gateway
//!
//! Production [`ResourceGateway`] over HTTP/JSON. One request per call,
//! no retries, no caching. A non-2xx status becomes
//! [`GatewayError::Request`] without inspecting the code; the server's
//! envelope, not the status line, is what callers interpret.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::envelope::ApiResponse;
use crate::error::GatewayError;
use crate::gateway::ResourceGateway;

/// Default API root used when no configuration is provided.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Environment variable overriding the API root.
pub const BASE_URL_VAR: &str = "COMERCIA_API_URL";

/// Connection settings for the remote collection API.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    /// Base URL every resource path is appended to, without a trailing
    /// slash.
    pub base_url: String,
}

impl GatewayConfig {
    /// Reads the configuration from the environment, falling back to
    /// [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// HTTP transport to the collection API.
///
/// Holds a single [`reqwest::Client`] shared across all calls. Requests
/// and responses are JSON.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Creates a gateway for the configured API root.
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_envelope(
        response: reqwest::Response,
    ) -> Result<ApiResponse<Value>, GatewayError> {
        let response = response.error_for_status()?;
        let body = response.bytes().await?;
        let envelope = serde_json::from_slice(&body)?;
        Ok(envelope)
    }
}

#[async_trait]
impl ResourceGateway for HttpGateway {
    async fn fetch(&self, path: &str) -> Result<ApiResponse<Value>, GatewayError> {
        debug!(path, "Sending fetch request");
        let response = self.client.get(self.url(path)).send().await?;
        Self::read_envelope(response).await
    }

    async fn create(&self, path: &str, body: Value) -> Result<ApiResponse<Value>, GatewayError> {
        debug!(path, "Sending create request");
        let response = self.client.post(self.url(path)).json(&body).send().await?;
        Self::read_envelope(response).await
    }

    async fn replace(&self, path: &str, body: Value) -> Result<ApiResponse<Value>, GatewayError> {
        debug!(path, "Sending replace request");
        let response = self.client.put(self.url(path)).json(&body).send().await?;
        Self::read_envelope(response).await
    }

    async fn remove(&self, path: &str) -> Result<ApiResponse<Value>, GatewayError> {
        debug!(path, "Sending remove request");
        let response = self.client.delete(self.url(path)).send().await?;
        Self::read_envelope(response).await
    }
}
