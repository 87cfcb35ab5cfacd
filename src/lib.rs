//! postget-provision - provisions the Animal Crossings sample app on postget.dev
//!
//! Issues a fixed sequence of declarative resource-creation calls (one app,
//! two schema-validated routes, three client accounts) against the postget.dev
//! owner API, then optionally reads back the generated per-client keys.

pub mod api;
pub mod cli;
pub mod core;
pub mod execution;

// Re-export commonly used types
pub use api::{ApiError, ApiExecutor, ApiOutcome, ClientConfig, Credentials, PostgetClient};
pub use core::{
    ExecutionStatus, ProvisionConfig, ProvisionStep, ResourceDefinition, ResourceKind, RunState,
    StepResult,
};
pub use execution::{CredentialCollector, ProvisionRunner, RunEvent, RunReport, RunnerConfig};
