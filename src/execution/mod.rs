//! Pipeline execution and credential collection

pub mod collector;
pub mod runner;

pub use collector::CredentialCollector;
pub use runner::{EventHandler, ProvisionRunner, RunEvent, RunReport, RunnerConfig};
