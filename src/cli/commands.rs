//! CLI command definitions

use clap::Args;

/// Run the provisioning pipeline
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to a YAML config file overriding the postget.dev defaults
    #[arg(short, long)]
    pub config: Option<String>,

    /// Collect client API keys after the pipeline finishes
    #[arg(long)]
    pub fetch_keys: bool,

    /// Stop at the first step the platform does not accept
    #[arg(long)]
    pub fail_fast: bool,

    /// App identifier override
    #[arg(long)]
    pub app_id: Option<String>,
}

/// Print the fixed provisioning plan
#[derive(Debug, Args, Clone)]
pub struct PlanCommand {
    /// Path to a YAML config file overriding the postget.dev defaults
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the full payload documents as JSON
    #[arg(long)]
    pub json: bool,
}

/// Collect client API keys
#[derive(Debug, Args, Clone)]
pub struct KeysCommand {
    /// Path to a YAML config file overriding the postget.dev defaults
    #[arg(short, long)]
    pub config: Option<String>,
}
