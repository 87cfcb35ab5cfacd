//! Scenario tests for the provisioning run


use mock_api::{MockApi, MockOutcome};
use postget_provision::core::{catalog, ExecutionStatus};
use postget_provision::execution::{ProvisionRunner, RunEvent, RunnerConfig};
use serde_json::json;

const BASE_URL: &str = "https://app.test/api/v1/owner";
const APP_ID: &str = "animal_crossings";

fn runner_config(fail_fast: bool) -> RunnerConfig {
    RunnerConfig {
        base_url: BASE_URL.to_string(),
        app_id: APP_ID.to_string(),
        fail_fast,
    }
}

/// All six steps accepted: six results, all 200, in declaration order,
/// posted to the expected endpoints
#[tokio::test]
async fn test_accepted_run_reports_six_results_in_order() {
    let mock = MockApi::all_accepted(6);
    let calls = mock.calls.clone();
    let runner = ProvisionRunner::new(mock, runner_config(false));

    let steps = catalog::provisioning_steps();
    let report = runner.run(&steps).await;

    assert_eq!(report.state.status, ExecutionStatus::Completed);
    assert_eq!(report.results.len(), 6);
    assert!(report.results.iter().all(|r| r.status_code == 200));

    let result_names: Vec<&str> = report.results.iter().map(|r| r.step_name.as_str()).collect();
    let step_names: Vec<&str> = steps.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(result_names, step_names);

    let endpoints: Vec<String> = calls
        .lock()
        .unwrap()
        .iter()
        .map(|c| c.endpoint.clone())
        .collect();
    assert_eq!(
        endpoints,
        vec![
            format!("{}/apps", BASE_URL),
            format!("{}/apps/{}/routes", BASE_URL, APP_ID),
            format!("{}/apps/{}/routes", BASE_URL, APP_ID),
            format!("{}/apps/{}/clients", BASE_URL, APP_ID),
            format!("{}/apps/{}/clients", BASE_URL, APP_ID),
            format!("{}/apps/{}/clients", BASE_URL, APP_ID),
        ]
    );
}

/// A rejected first step does not stop the rest of the run; the result list
/// length always equals the step count
#[tokio::test]
async fn test_rejected_step_does_not_stop_the_run() {
    let mut outcomes = vec![MockOutcome::Respond {
        status: 500,
        body: json!({"detail": "dropped"}),
    }];
    outcomes.extend(vec![
        MockOutcome::Respond {
            status: 200,
            body: json!({}),
        };
        5
    ]);

    let runner = ProvisionRunner::new(MockApi::new(outcomes), runner_config(false));
    let report = runner.run(&catalog::provisioning_steps()).await;

    assert_eq!(report.state.status, ExecutionStatus::Completed);
    assert_eq!(report.results.len(), 6);
    let rejected = report.result("building_the_app").unwrap();
    assert_eq!(rejected.status_code, 500);
    // body is dropped on non-200
    assert_eq!(rejected.body, json!({}));
    assert!(report.results[1..].iter().all(|r| r.status_code == 200));
    assert_eq!(report.state.failed_steps, 1);
    assert_eq!(report.state.succeeded_steps, 5);
}

/// A transport failure is caught and recorded as a synthetic result with
/// status 0; the run continues
#[tokio::test]
async fn test_transport_failure_records_synthetic_result() {
    let mut outcomes = vec![MockOutcome::Transport("connection refused".to_string())];
    outcomes.extend(vec![
        MockOutcome::Respond {
            status: 200,
            body: json!({}),
        };
        5
    ]);

    let runner = ProvisionRunner::new(MockApi::new(outcomes), runner_config(false));
    let report = runner.run(&catalog::provisioning_steps()).await;

    assert_eq!(report.state.status, ExecutionStatus::Completed);
    assert_eq!(report.results.len(), 6);

    let first = &report.results[0];
    assert_eq!(first.status_code, 0);
    assert!(first.error.as_deref().unwrap().contains("connection refused"));
    assert!(report.results[1..].iter().all(|r| r.error.is_none()));
}

/// Fail-fast stops after the first rejection and marks the run aborted
#[tokio::test]
async fn test_fail_fast_stops_after_first_rejection() {
    let outcomes = vec![
        MockOutcome::Respond {
            status: 200,
            body: json!({}),
        },
        MockOutcome::Respond {
            status: 403,
            body: json!({}),
        },
    ];

    let mock = MockApi::new(outcomes);
    let calls = mock.calls.clone();
    let runner = ProvisionRunner::new(mock, runner_config(true));
    let report = runner.run(&catalog::provisioning_steps()).await;

    assert_eq!(report.state.status, ExecutionStatus::Aborted);
    assert_eq!(report.results.len(), 2);
    assert_eq!(report.results[1].status_code, 403);
    assert_eq!(calls.lock().unwrap().len(), 2);
}

/// Every payload reaches the wire exactly as declared in the catalog,
/// with no field injection or mutation
#[tokio::test]
async fn test_payloads_reach_the_wire_unmodified() {
    let mock = MockApi::all_accepted(6);
    let calls = mock.calls.clone();
    let runner = ProvisionRunner::new(mock, runner_config(false));

    let steps = catalog::provisioning_steps();
    runner.run(&steps).await;

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), steps.len());
    for (call, step) in calls.iter().zip(&steps) {
        assert_eq!(call.payload, step.definition.payload, "step {}", step.name);
    }
}

/// A step's result is reported before the next step's call is issued
#[tokio::test]
async fn test_results_are_reported_before_the_next_call() {
    let mock = MockApi::all_accepted(6);
    let log = mock.log.clone();

    let mut runner = ProvisionRunner::new(mock, runner_config(false));
    let handler_log = log.clone();
    runner.add_event_handler(move |event| {
        if let RunEvent::StepReported { name, .. } = event {
            handler_log.lock().unwrap().push(format!("reported {}", name));
        }
    });

    runner.run(&catalog::provisioning_steps()).await;

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 12);
    for (index, entry) in log.iter().enumerate() {
        let expected = if index % 2 == 0 { "request" } else { "reported" };
        assert!(
            entry.starts_with(expected),
            "timeline entry {} out of order: {}",
            index,
            entry
        );
    }
}

/// A 200 body decodes back to exactly what was sent (mock echoes the payload)
#[tokio::test]
async fn test_accepted_body_round_trips() {
    let runner = ProvisionRunner::new(
        MockApi::new(vec![MockOutcome::Echo; 6]),
        runner_config(false),
    );

    let steps = catalog::provisioning_steps();
    let report = runner.run(&steps).await;

    for (result, step) in report.results.iter().zip(&steps) {
        assert_eq!(result.body, step.definition.payload, "step {}", step.name);
    }
}
