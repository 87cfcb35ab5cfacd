//! Run state bookkeeping

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Overall run status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionStatus {
    /// Run has not started
    Pending,
    /// Run is currently executing steps
    Running,
    /// Every step was attempted (individual rejections included)
    Completed,
    /// Fail-fast stopped the run before the step list was exhausted
    Aborted,
}

/// Bookkeeping for one provisioning run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    /// Unique execution ID
    pub execution_id: Uuid,

    /// Current run status
    pub status: ExecutionStatus,

    /// When the run started
    pub started_at: Option<DateTime<Utc>>,

    /// When the run completed or aborted
    pub completed_at: Option<DateTime<Utc>>,

    /// Total number of steps in the plan
    pub total_steps: usize,

    /// Number of steps the platform accepted
    pub succeeded_steps: usize,

    /// Number of steps rejected or undeliverable
    pub failed_steps: usize,
}

impl RunState {
    pub fn new() -> Self {
        Self {
            execution_id: Uuid::new_v4(),
            status: ExecutionStatus::Pending,
            started_at: None,
            completed_at: None,
            total_steps: 0,
            succeeded_steps: 0,
            failed_steps: 0,
        }
    }

    /// Mark the run as started
    pub fn start(&mut self, total_steps: usize) {
        self.status = ExecutionStatus::Running;
        self.started_at = Some(Utc::now());
        self.total_steps = total_steps;
    }

    /// Record the outcome of one step
    pub fn record(&mut self, success: bool) {
        if success {
            self.succeeded_steps += 1;
        } else {
            self.failed_steps += 1;
        }
    }

    /// Mark the run as completed (all steps attempted)
    pub fn complete(&mut self) {
        self.status = ExecutionStatus::Completed;
        self.completed_at = Some(Utc::now());
    }

    /// Mark the run as stopped early by fail-fast
    pub fn abort(&mut self) {
        self.status = ExecutionStatus::Aborted;
        self.completed_at = Some(Utc::now());
    }

    /// Fraction of planned steps attempted so far (0.0 to 1.0)
    pub fn progress(&self) -> f64 {
        if self.total_steps == 0 {
            return 0.0;
        }
        (self.succeeded_steps + self.failed_steps) as f64 / self.total_steps as f64
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}
