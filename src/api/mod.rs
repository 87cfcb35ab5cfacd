//! Postget API client for executing resource-creation calls

pub mod client;
pub mod response;

use async_trait::async_trait;
use serde_json::Value;

pub use client::{ClientConfig, Credentials, PostgetClient};
pub use response::{ApiError, ApiOutcome};

/// Trait for API execution - allows for different implementations
#[async_trait]
pub trait ApiExecutor: Send + Sync {
    /// Issue one authenticated creation call and normalize the result.
    ///
    /// A non-200 status is a normal outcome, not an error; only a failure to
    /// reach the platform (or to decode a 200 body) returns `Err`.
    async fn execute(&self, endpoint: &str, payload: &Value) -> Result<ApiOutcome, ApiError>;

    /// Look up the generated API key for one client account.
    ///
    /// Returns `None` for any response other than a 200 carrying
    /// `response.apiKey`.
    async fn fetch_key(&self, client_id: &str) -> Result<Option<String>, ApiError>;
}
