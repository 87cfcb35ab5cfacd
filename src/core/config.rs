//! Provisioning configuration from YAML

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Owner API base URL on postget.dev
pub const DEFAULT_BASE_URL: &str = "https://app.postget.dev/api/v1/owner";

/// Credentials endpoint base URL
pub const DEFAULT_KEY_URL: &str = "https://app.postget.dev/api/v1/keys";

/// App identifier the routes and clients are scoped under
pub const DEFAULT_APP_ID: &str = "animal_crossings";

/// Environment variable holding the API token
pub const KEY_ENV_VAR: &str = "POSTGET_KEY";

/// Top-level provisioning configuration, loadable from YAML
///
/// Every field has a postget.dev default, so a config file only needs the
/// values it overrides. CLI flags override file values in turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionConfig {
    /// Owner API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Credentials endpoint base URL
    #[serde(default = "default_key_url")]
    pub key_url: String,

    /// App identifier scoping routes, clients, and key lookups.
    ///
    /// Chosen ahead of time by the caller; the identifier returned by the
    /// app-creation response is never read back.
    #[serde(default = "default_app_id")]
    pub app_id: String,

    /// Print full response bodies
    #[serde(default)]
    pub verbose: bool,

    /// Run the credential-collection phase after the pipeline
    #[serde(default)]
    pub fetch_keys: bool,

    /// Stop at the first step the platform does not accept
    #[serde(default)]
    pub fail_fast: bool,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_key_url() -> String {
    DEFAULT_KEY_URL.to_string()
}

fn default_app_id() -> String {
    DEFAULT_APP_ID.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            key_url: default_key_url(),
            app_id: default_app_id(),
            verbose: false,
            fetch_keys: false,
            fail_fast: false,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ProvisionConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ProvisionConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            anyhow::bail!("base_url must not be empty");
        }
        if self.key_url.trim().is_empty() {
            anyhow::bail!("key_url must not be empty");
        }
        if self.base_url.ends_with('/') || self.key_url.ends_with('/') {
            anyhow::bail!("base URLs must not end with a trailing slash");
        }
        if self.app_id.trim().is_empty() {
            anyhow::bail!("app_id must not be empty");
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be greater than zero");
        }
        Ok(())
    }
}
