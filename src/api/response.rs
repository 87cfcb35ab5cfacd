//! API outcome and error types

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Error types for API operations
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Normalized result of one API call
///
/// The platform reports acceptance with a 200 and a JSON body; on any other
/// status the body is dropped and an empty object stands in for it, so a
/// rejection is distinguishable only by its status code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiOutcome {
    /// HTTP status code of the response
    pub status: u16,

    /// Parsed 200 body, or an empty object for any other status
    pub body: Value,
}

impl ApiOutcome {
    /// An accepted call with its parsed body
    pub fn accepted(body: Value) -> Self {
        Self { status: 200, body }
    }

    /// A rejected call; the response body is discarded
    pub fn rejected(status: u16) -> Self {
        Self {
            status,
            body: Value::Object(Default::default()),
        }
    }

    /// Whether the platform accepted the call
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepted_outcome() {
        let outcome = ApiOutcome::accepted(json!({"docId": "locations"}));
        assert!(outcome.is_success());
        assert_eq!(outcome.body["docId"], "locations");
    }

    #[test]
    fn test_rejected_outcome_has_empty_body() {
        let outcome = ApiOutcome::rejected(403);
        assert!(!outcome.is_success());
        assert_eq!(outcome.body, json!({}));
    }
}
