//! Provisioning run engine - executes the ordered step list

use crate::{
    api::ApiExecutor,
    core::{
        config::ProvisionConfig,
        state::{ExecutionStatus, RunState},
        step::{ProvisionStep, StepResult},
    },
};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

/// Events that occur during a provisioning run
///
/// Emitted in strict order: a step's report event is always emitted before
/// the next step's call is issued.
#[derive(Debug, Clone)]
pub enum RunEvent {
    RunStarted {
        execution_id: Uuid,
        app_id: String,
        total_steps: usize,
    },
    StepStarted {
        name: String,
        endpoint: String,
    },
    /// The platform answered; any status code, 200 or not
    StepReported {
        name: String,
        status_code: u16,
    },
    /// Response body of an answered step, for verbose reporting
    StepBody {
        name: String,
        body: Value,
    },
    /// The call never reached the platform
    StepFailed {
        name: String,
        error: String,
    },
    RunCompleted {
        execution_id: Uuid,
        status: ExecutionStatus,
    },
}

/// Type for event handlers
pub type EventHandler = Box<dyn Fn(&RunEvent) + Send + Sync>;

/// Runner configuration: where steps are posted and how failures are handled
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Owner API base URL
    pub base_url: String,

    /// App identifier scoping route and client creation.
    ///
    /// A caller-supplied constant; the identifier returned by the
    /// app-creation response is deliberately not read back.
    pub app_id: String,

    /// Stop at the first step the platform does not accept
    pub fail_fast: bool,
}

impl From<&ProvisionConfig> for RunnerConfig {
    fn from(config: &ProvisionConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            app_id: config.app_id.clone(),
            fail_fast: config.fail_fast,
        }
    }
}

/// Result of a full run: bookkeeping plus one result per attempted step
#[derive(Debug, Clone)]
pub struct RunReport {
    pub state: RunState,
    pub results: Vec<StepResult>,
}

impl RunReport {
    /// Look up the result of a named step
    pub fn result(&self, step_name: &str) -> Option<&StepResult> {
        self.results.iter().find(|r| r.step_name == step_name)
    }
}

/// Executes the fixed step list against the platform, in order.
///
/// Best-effort sequential execution: a rejected step does not stop later
/// steps from being attempted, and a transport failure is caught and recorded
/// as a synthetic failed result. The `fail_fast` flag opts into the stricter
/// stop-at-first-failure mode.
pub struct ProvisionRunner<A> {
    api: A,
    config: RunnerConfig,
    event_handlers: Vec<EventHandler>,
}

impl<A: ApiExecutor> ProvisionRunner<A> {
    pub fn new(api: A, config: RunnerConfig) -> Self {
        Self {
            api,
            config,
            event_handlers: Vec::new(),
        }
    }

    /// Add an event handler
    pub fn add_event_handler<F>(&mut self, handler: F)
    where
        F: Fn(&RunEvent) + Send + Sync + 'static,
    {
        self.event_handlers.push(Box::new(handler));
    }

    fn emit(&self, event: RunEvent) {
        for handler in &self.event_handlers {
            handler(&event);
        }
    }

    /// Execute the step list and report every outcome
    pub async fn run(&self, steps: &[ProvisionStep]) -> RunReport {
        let mut state = RunState::new();
        state.start(steps.len());

        info!(
            execution_id = %state.execution_id,
            app_id = %self.config.app_id,
            steps = steps.len(),
            "starting provisioning run"
        );
        self.emit(RunEvent::RunStarted {
            execution_id: state.execution_id,
            app_id: self.config.app_id.clone(),
            total_steps: steps.len(),
        });

        let mut results = Vec::with_capacity(steps.len());

        for step in steps {
            let endpoint = step
                .definition
                .endpoint_url(&self.config.base_url, &self.config.app_id);

            self.emit(RunEvent::StepStarted {
                name: step.name.clone(),
                endpoint: endpoint.clone(),
            });

            let result = match self.api.execute(&endpoint, &step.definition.payload).await {
                Ok(outcome) => {
                    self.emit(RunEvent::StepReported {
                        name: step.name.clone(),
                        status_code: outcome.status,
                    });
                    self.emit(RunEvent::StepBody {
                        name: step.name.clone(),
                        body: outcome.body.clone(),
                    });
                    StepResult::delivered(step.name.as_str(), outcome.status, outcome.body)
                }
                Err(err) => {
                    warn!(step = %step.name, error = %err, "step could not be delivered");
                    self.emit(RunEvent::StepFailed {
                        name: step.name.clone(),
                        error: err.to_string(),
                    });
                    StepResult::undelivered(step.name.as_str(), err.to_string())
                }
            };

            state.record(result.is_success());
            let failed = !result.is_success();
            results.push(result);

            if failed && self.config.fail_fast {
                state.abort();
                info!(execution_id = %state.execution_id, "run aborted by fail-fast");
                self.emit(RunEvent::RunCompleted {
                    execution_id: state.execution_id,
                    status: state.status,
                });
                return RunReport { state, results };
            }
        }

        state.complete();
        info!(
            execution_id = %state.execution_id,
            succeeded = state.succeeded_steps,
            failed = state.failed_steps,
            "provisioning run finished"
        );
        self.emit(RunEvent::RunCompleted {
            execution_id: state.execution_id,
            status: state.status,
        });

        RunReport { state, results }
    }
}
