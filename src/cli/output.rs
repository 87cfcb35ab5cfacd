//! CLI output formatting

use crate::{
    core::state::ExecutionStatus,
    execution::runner::{RunEvent, RunReport},
};
use console::Emoji;
use serde_json::Value;
use std::collections::HashMap;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "! ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "> ");
pub static KEY: Emoji<'_, '_> = Emoji("🔑 ", "k ");

/// Format a status code for display
pub fn format_status_code(status_code: u16) -> String {
    match status_code {
        200 => style(status_code).green().to_string(),
        0 => style("unreachable").red().to_string(),
        _ => style(status_code).red().to_string(),
    }
}

/// Format a run event for display; `StepBody` is handled by the verbose path
pub fn format_run_event(event: &RunEvent) -> Option<String> {
    match event {
        RunEvent::RunStarted {
            execution_id,
            app_id,
            total_steps,
        } => Some(format!(
            "{} Provisioning {} ({} steps, run {})",
            ROCKET,
            style(app_id).bold(),
            total_steps,
            style(&execution_id.to_string()[..8]).dim()
        )),
        RunEvent::StepStarted { name, endpoint } => Some(format!(
            "\n{} {} → {}",
            INFO,
            style(name).cyan(),
            style(endpoint).dim()
        )),
        RunEvent::StepReported { name, status_code } => Some(format!(
            "{} {}: {}",
            if *status_code == 200 { CHECK } else { CROSS },
            style(name).bold(),
            format_status_code(*status_code)
        )),
        RunEvent::StepBody { .. } => None,
        RunEvent::StepFailed { name, error } => Some(format!(
            "{} {}: {}",
            CROSS,
            style(name).bold(),
            style(error).red()
        )),
        RunEvent::RunCompleted {
            execution_id,
            status,
        } => {
            let status_str = match status {
                ExecutionStatus::Completed => style("complete").green().to_string(),
                ExecutionStatus::Aborted => style("aborted").red().to_string(),
                _ => format!("{:?}", status),
            };
            Some(format!(
                "\n{} Run {} {}",
                INFO,
                style(&execution_id.to_string()[..8]).dim(),
                status_str
            ))
        }
    }
}

/// Pretty-print a response body, indented under its step line
pub fn format_body(body: &Value) -> String {
    let pretty = serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
    pretty
        .lines()
        .map(|line| format!("    {}", style(line).dim()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Summary line for a finished run
pub fn format_run_summary(report: &RunReport) -> String {
    let state = &report.state;
    let counts = format!(
        "{}/{} steps accepted",
        state.succeeded_steps, state.total_steps
    );
    if state.failed_steps == 0 {
        format!("{} {}", CHECK, style(counts).green())
    } else {
        format!(
            "{} {} ({} failed)",
            WARN,
            style(counts).yellow(),
            state.failed_steps
        )
    }
}

/// Format the collected key mapping, one line per client, sorted for stability
pub fn format_key_report(keys: &HashMap<String, Option<String>>) -> Vec<String> {
    let mut ids: Vec<&String> = keys.keys().collect();
    ids.sort();

    ids.into_iter()
        .map(|id| match &keys[id] {
            Some(key) => format!("{} {} : {}", KEY, style(id).bold(), key),
            None => format!(
                "{} {} : {}",
                WARN,
                style(id).bold(),
                style("<unresolved>").dim()
            ),
        })
        .collect()
}
