//! Step and result domain model

use crate::core::resource::ResourceDefinition;
use serde::Serialize;
use serde_json::Value;

/// A single step in the provisioning pipeline
///
/// Steps execute in declaration order; the app-creation step must come first
/// because every later definition is scoped under the app it creates.
#[derive(Debug, Clone, Serialize)]
pub struct ProvisionStep {
    /// Unique, human-readable name used for reporting
    pub name: String,

    /// The resource this step creates
    pub definition: ResourceDefinition,
}

impl ProvisionStep {
    pub fn new(name: impl Into<String>, definition: ResourceDefinition) -> Self {
        Self {
            name: name.into(),
            definition,
        }
    }
}

/// Outcome of one executed step
///
/// Created per execution and consumed by the reporting layer; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct StepResult {
    /// Name of the step that produced this result
    pub step_name: String,

    /// HTTP status code, or 0 when the call never reached the platform
    pub status_code: u16,

    /// Parsed 200 body; an empty object for any other status
    pub body: Value,

    /// Transport failure detail, set only when `status_code` is 0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StepResult {
    /// A call that reached the platform, whatever the status
    pub fn delivered(step_name: impl Into<String>, status_code: u16, body: Value) -> Self {
        Self {
            step_name: step_name.into(),
            status_code,
            body,
            error: None,
        }
    }

    /// A call that failed in transport before the platform could answer
    pub fn undelivered(step_name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            step_name: step_name.into(),
            status_code: 0,
            body: Value::Object(Default::default()),
            error: Some(error.into()),
        }
    }

    /// Whether the platform accepted the step
    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_delivered_result() {
        let result = StepResult::delivered("building_the_app", 200, json!({"ok": true}));
        assert!(result.is_success());
        assert!(result.error.is_none());
    }

    #[test]
    fn test_rejected_result_is_not_success() {
        let result = StepResult::delivered("building_the_app", 403, json!({}));
        assert!(!result.is_success());
    }

    #[test]
    fn test_undelivered_result() {
        let result = StepResult::undelivered("building_the_app", "connection refused");
        assert!(!result.is_success());
        assert_eq!(result.status_code, 0);
        assert_eq!(result.body, json!({}));
        assert_eq!(result.error.as_deref(), Some("connection refused"));
    }
}
