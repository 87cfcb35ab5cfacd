use anyhow::{Context, Result};
use postget_provision::api::{ClientConfig, Credentials, PostgetClient};
use postget_provision::cli::commands::{KeysCommand, PlanCommand, RunCommand};
use postget_provision::cli::output::*;
use postget_provision::cli::{Cli, Command};
use postget_provision::core::config::{ProvisionConfig, KEY_ENV_VAR};
use postget_provision::core::{catalog, ExecutionStatus};
use postget_provision::execution::{CredentialCollector, ProvisionRunner, RunEvent, RunnerConfig};
use std::io::{self, Write};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    // Execute command
    match &cli.command {
        Command::Run(cmd) => run_provisioning(cmd, &cli).await?,
        Command::Plan(cmd) => show_plan(cmd)?,
        Command::Keys(cmd) => collect_keys(cmd).await?,
    }

    Ok(())
}

fn load_config(path: &Option<String>) -> Result<ProvisionConfig> {
    match path {
        Some(path) => {
            ProvisionConfig::from_file(path).context("Failed to load provisioning config")
        }
        None => Ok(ProvisionConfig::default()),
    }
}

/// Resolve the API token once, before any core component is constructed.
///
/// Reads `POSTGET_KEY`, falling back to an interactive prompt; the core only
/// ever sees the resolved opaque string.
fn resolve_api_key() -> Result<String> {
    if let Ok(key) = std::env::var(KEY_ENV_VAR) {
        let key = key.trim().to_string();
        if !key.is_empty() {
            return Ok(key);
        }
    }

    print!("postget api key (https://app.postget.dev/apikeys?view=secret): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read API key from stdin")?;

    let key = line.trim().to_string();
    if key.is_empty() {
        anyhow::bail!("no API key provided");
    }
    Ok(key)
}

fn build_client(config: &ProvisionConfig) -> Result<PostgetClient> {
    let key = resolve_api_key()?;
    let client_config = ClientConfig::new()
        .with_key_url(config.key_url.clone())
        .with_app_id(config.app_id.clone())
        .with_timeout(config.timeout_secs);
    PostgetClient::new(client_config, Credentials::new(key))
}

async fn run_provisioning(cmd: &RunCommand, cli: &Cli) -> Result<()> {
    let mut config = load_config(&cmd.config)?;

    // CLI flags override file values
    if cmd.fetch_keys {
        config.fetch_keys = true;
    }
    if cmd.fail_fast {
        config.fail_fast = true;
    }
    if cli.verbose {
        config.verbose = true;
    }
    if let Some(app_id) = &cmd.app_id {
        config.app_id = app_id.clone();
    }
    config.validate()?;

    let steps = catalog::provisioning_steps();
    catalog::validate(&steps)?;

    let client = build_client(&config)?;

    let mut runner = ProvisionRunner::new(client.clone(), RunnerConfig::from(&config));
    let verbose = config.verbose;
    runner.add_event_handler(move |event| {
        if let Some(line) = format_run_event(event) {
            println!("{}", line);
        }
        if verbose {
            if let RunEvent::StepBody { body, .. } = event {
                println!("{}", format_body(body));
            }
        }
    });

    let report = runner.run(&steps).await;
    println!("\n{}", format_run_summary(&report));

    if config.fetch_keys {
        println!("\n{} fetching client keys...", INFO);
        let collector = CredentialCollector::new(client);
        let keys = collector.collect(&catalog::client_doc_ids()).await;
        for line in format_key_report(&keys) {
            println!("{}", line);
        }
    }

    if report.state.status == ExecutionStatus::Aborted {
        std::process::exit(1);
    }

    Ok(())
}

fn show_plan(cmd: &PlanCommand) -> Result<()> {
    let config = load_config(&cmd.config)?;
    config.validate()?;

    let steps = catalog::provisioning_steps();
    catalog::validate(&steps)?;

    println!(
        "{} {} provisioning plan ({} steps):",
        INFO,
        style(&config.app_id).bold(),
        steps.len()
    );

    for (index, step) in steps.iter().enumerate() {
        println!(
            "  {}. {} → {}",
            index + 1,
            style(&step.name).cyan(),
            style(step.definition.endpoint_url(&config.base_url, &config.app_id)).dim()
        );
    }

    if cmd.json {
        let json = serde_json::to_string_pretty(&steps)?;
        println!("\n{}", json);
    }

    Ok(())
}

async fn collect_keys(cmd: &KeysCommand) -> Result<()> {
    let config = load_config(&cmd.config)?;
    config.validate()?;

    let client = build_client(&config)?;

    println!("{} fetching client keys...", INFO);
    let collector = CredentialCollector::new(client);
    let keys = collector.collect(&catalog::client_doc_ids()).await;
    for line in format_key_report(&keys) {
        println!("{}", line);
    }

    Ok(())
}
