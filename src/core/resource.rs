//! Resource domain model

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What a definition creates on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Top-level container scoping routes and clients
    App,
    /// Named, schema-validated data collection under an app
    Route,
    /// Caller identity with read/write permissions on specific routes
    Client,
}

/// A single thing-to-be-created: one declarative payload and its target path
///
/// Pure value object; the payload is an opaque document posted verbatim, the
/// platform is responsible for validating it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDefinition {
    pub kind: ResourceKind,

    /// Sub-path under the app scope; empty for the app-creation call itself
    pub target_path: String,

    /// The declarative JSON document sent as the request body
    pub payload: Value,

    /// Caller-assigned identity key on the platform, unique within the kind
    pub doc_id: String,
}

impl ResourceDefinition {
    pub fn new(
        kind: ResourceKind,
        target_path: impl Into<String>,
        doc_id: impl Into<String>,
        payload: Value,
    ) -> Self {
        Self {
            kind,
            target_path: target_path.into(),
            payload,
            doc_id: doc_id.into(),
        }
    }

    /// Resolve the full endpoint URL for this definition.
    ///
    /// The app-creation call posts to `{base}/apps`; every other call is
    /// scoped under the caller-supplied app identifier.
    pub fn endpoint_url(&self, base_url: &str, app_id: &str) -> String {
        if self.target_path.is_empty() {
            format!("{}/apps", base_url)
        } else {
            format!("{}/apps/{}/{}", base_url, app_id, self.target_path)
        }
    }
}
