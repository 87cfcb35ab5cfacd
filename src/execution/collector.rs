//! Credential collection phase - reads back generated client keys

use crate::api::ApiExecutor;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Collects generated API keys for a fixed set of client accounts.
///
/// Runs after the pipeline (and even if pipeline steps failed); a key that
/// cannot be resolved is recorded as `None`, never as an error, so the
/// mapping always holds one entry per requested identifier.
pub struct CredentialCollector<A> {
    api: A,
}

impl<A: ApiExecutor> CredentialCollector<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Look up the key for each client docId, one blocking call at a time
    pub async fn collect(&self, client_ids: &[&str]) -> HashMap<String, Option<String>> {
        let mut keys = HashMap::new();

        for client_id in client_ids {
            let key = match self.api.fetch_key(client_id).await {
                Ok(key) => {
                    if key.is_none() {
                        debug!(client_id, "key lookup returned no credential");
                    }
                    key
                }
                Err(err) => {
                    warn!(client_id, error = %err, "key lookup failed in transport");
                    None
                }
            };
            keys.insert((*client_id).to_string(), key);
        }

        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, ApiOutcome};
    use async_trait::async_trait;
    use serde_json::Value;

    struct MockApi;

    #[async_trait]
    impl ApiExecutor for MockApi {
        async fn execute(&self, _endpoint: &str, _payload: &Value) -> Result<ApiOutcome, ApiError> {
            Ok(ApiOutcome::rejected(405))
        }

        async fn fetch_key(&self, client_id: &str) -> Result<Option<String>, ApiError> {
            match client_id {
                "sally" => Ok(Some("key-sally".to_string())),
                "gone" => Ok(None),
                _ => Err(ApiError::Transport("connection reset".to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_collect_records_every_requested_id() {
        let collector = CredentialCollector::new(MockApi);
        let keys = collector.collect(&["sally", "gone", "flaky"]).await;

        assert_eq!(keys.len(), 3);
        assert_eq!(keys["sally"].as_deref(), Some("key-sally"));
        assert_eq!(keys["gone"], None);
        assert_eq!(keys["flaky"], None);
    }
}
