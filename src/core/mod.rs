//! Core domain model for the provisioning pipeline

pub mod catalog;
pub mod config;
pub mod resource;
pub mod state;
pub mod step;

pub use config::ProvisionConfig;
pub use resource::{ResourceDefinition, ResourceKind};
pub use state::{ExecutionStatus, RunState};
pub use step::{ProvisionStep, StepResult};
