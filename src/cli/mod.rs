//! Command-line interface

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use commands::{KeysCommand, PlanCommand, RunCommand};

/// Provisioning tool for the Animal Crossings sample app on postget.dev
#[derive(Debug, Parser, Clone)]
#[command(name = "postget-provision")]
#[command(version = "0.1.0")]
#[command(about = "Provisions the Animal Crossings sample app on postget.dev", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print full response bodies and enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run the provisioning pipeline
    Run(RunCommand),

    /// Print the fixed provisioning plan without executing it
    Plan(PlanCommand),

    /// Collect client API keys without re-running the pipeline
    Keys(KeysCommand),
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}

use std::ffi::OsString;
