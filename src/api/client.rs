//! HTTP client for the postget.dev owner API

use crate::api::response::{ApiError, ApiOutcome};
use crate::api::ApiExecutor;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the credentials endpoint
    pub key_url: String,

    /// App identifier the key lookups are scoped to
    pub app_id: String,

    /// Timeout for requests in seconds
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            key_url: crate::core::config::DEFAULT_KEY_URL.to_string(),
            app_id: crate::core::config::DEFAULT_APP_ID.to_string(),
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key_url(mut self, key_url: String) -> Self {
        self.key_url = key_url;
        self
    }

    pub fn with_app_id(mut self, app_id: String) -> Self {
        self.app_id = app_id;
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Opaque platform token, resolved once at process start.
///
/// Sent as `Authorization: Basic <token>` on every call. The platform expects
/// this literal format: the value is a single opaque token, not a base64
/// `username:password` pair, despite the `Basic` scheme name.
#[derive(Clone)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    fn header_value(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Basic {}", self.token))
            .context("API token is not a valid header value")?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credentials(<redacted>)")
    }
}

/// Client for the postget.dev owner and keys endpoints
///
/// Holds no state beyond the immutable configuration and credentials; one
/// network call per invocation, no retries.
#[derive(Debug, Clone)]
pub struct PostgetClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl PostgetClient {
    /// Create a new client with the credential baked into the default headers
    pub fn new(config: ClientConfig, credentials: Credentials) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, credentials.header_value()?);

        let http = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, config })
    }
}

#[async_trait]
impl ApiExecutor for PostgetClient {
    async fn execute(&self, endpoint: &str, payload: &Value) -> Result<ApiOutcome, ApiError> {
        debug!(endpoint, "issuing creation call");

        let response = self.http.post(endpoint).json(payload).send().await?;
        let status = response.status().as_u16();

        if status == 200 {
            let body: Value = response.json().await?;
            Ok(ApiOutcome::accepted(body))
        } else {
            Ok(ApiOutcome::rejected(status))
        }
    }

    async fn fetch_key(&self, client_id: &str) -> Result<Option<String>, ApiError> {
        let endpoint = format!("{}/{}", self.config.key_url, client_id);
        debug!(endpoint, client_id, "looking up client key");

        let response = self
            .http
            .get(&endpoint)
            .query(&[("appId", self.config.app_id.as_str())])
            .send()
            .await?;

        if response.status().as_u16() != 200 {
            return Ok(None);
        }

        let body: Value = response.json().await?;
        Ok(body
            .pointer("/response/apiKey")
            .and_then(Value::as_str)
            .map(str::to_owned))
    }
}
