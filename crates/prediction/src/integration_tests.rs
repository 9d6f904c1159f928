//! Integration tests for the prediction client systems (GAS-006).
//!
//! Drives a headless Bevy [`App`] through the dispatch/collect pair.
//! Ready-made task-pool futures stand in for the network in most tests; the
//! one test that exercises the real HTTP path points at a closed local port
//! so it fails fast without leaving the machine.

use bevy::prelude::*;
use bevy::tasks::{AsyncComputeTaskPool, TaskPool};

use crate::client::{
    collect_predictions, dispatch_predictions, InFlightPredictions, PredictError, PredictionSlot,
    PredictorEndpoint, RunPrediction, ServiceNotice, SERVICE_NOTICE_TEXT,
};
use crate::params::SimulationParameters;
use crate::projection::synthesize;
use crate::risk::RiskTier;
use crate::wire::PredictionResult;

fn test_app() -> App {
    AsyncComputeTaskPool::get_or_init(TaskPool::new);
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.init_resource::<SimulationParameters>();
    app.init_resource::<PredictorEndpoint>();
    app.init_resource::<PredictionSlot>();
    app.init_resource::<ServiceNotice>();
    app.init_resource::<InFlightPredictions>();
    app.add_event::<RunPrediction>();
    app.add_systems(
        Update,
        (dispatch_predictions, collect_predictions).chain(),
    );
    app
}

/// Tick the app until no call is outstanding. Panics if the table never
/// drains, so a hung task shows up as a test failure instead of a deadlock.
fn run_until_settled(app: &mut App) {
    for _ in 0..5_000 {
        app.update();
        if !app.world().resource::<InFlightPredictions>().in_flight() {
            return;
        }
        std::thread::sleep(std::time::Duration::from_millis(1));
    }
    panic!("in-flight predictions never settled");
}

fn push_outcome(app: &mut App, outcome: Result<PredictionResult, PredictError>) -> u64 {
    app.world_mut()
        .resource_mut::<InFlightPredictions>()
        .push_outcome_for_test(outcome)
}

fn critical_result() -> PredictionResult {
    PredictionResult {
        predicted_ppm: 42.0,
        risk_level: "CRITICAL".to_string(),
        health_advice: "Evacuate".to_string(),
        gas_type: Some("H2S".to_string()),
    }
}

/// A successful call replaces the slot wholesale.
#[test]
fn test_success_replaces_slot() {
    let mut app = test_app();
    push_outcome(&mut app, Ok(critical_result()));
    run_until_settled(&mut app);

    let slot = app.world().resource::<PredictionSlot>();
    assert_eq!(slot.0, Some(critical_result()));
    assert!(app.world().resource::<ServiceNotice>().0.is_none());
}

/// A failed call leaves the prior result untouched and raises one notice.
#[test]
fn test_failure_preserves_prior_result() {
    let mut app = test_app();
    app.world_mut().resource_mut::<PredictionSlot>().0 = Some(critical_result());

    push_outcome(
        &mut app,
        Err(PredictError::ServiceUnavailable("503".to_string())),
    );
    run_until_settled(&mut app);

    assert_eq!(
        app.world().resource::<PredictionSlot>().0,
        Some(critical_result()),
        "failure must not disturb the stored result"
    );
    assert_eq!(
        app.world().resource::<ServiceNotice>().0.as_deref(),
        Some(SERVICE_NOTICE_TEXT)
    );
}

/// When two calls are in flight, only the latest issued one may win the
/// slot; the earlier completion is discarded whichever order they finish.
#[test]
fn test_stale_completion_never_wins() {
    let mut app = test_app();

    let older = PredictionResult {
        predicted_ppm: 5.0,
        risk_level: "Low".to_string(),
        health_advice: "Safe to use.".to_string(),
        gas_type: None,
    };
    push_outcome(&mut app, Ok(older));
    push_outcome(&mut app, Ok(critical_result()));
    run_until_settled(&mut app);

    assert_eq!(
        app.world().resource::<PredictionSlot>().0,
        Some(critical_result()),
        "latest issued call must win regardless of completion order"
    );
}

/// A stale failure raises no notice: the user already superseded that call.
#[test]
fn test_stale_failure_raises_no_notice() {
    let mut app = test_app();
    push_outcome(
        &mut app,
        Err(PredictError::ServiceUnavailable("timed out".to_string())),
    );
    push_outcome(&mut app, Ok(critical_result()));
    run_until_settled(&mut app);

    assert!(app.world().resource::<ServiceNotice>().0.is_none());
    assert_eq!(
        app.world().resource::<PredictionSlot>().0,
        Some(critical_result())
    );
}

/// While a call is outstanding the table reports in-flight, so the UI can
/// gate the trigger control.
#[test]
fn test_in_flight_reports_outstanding_call() {
    let mut app = test_app();
    let pending = AsyncComputeTaskPool::get().spawn(futures_lite::future::pending());
    app.world_mut()
        .resource_mut::<InFlightPredictions>()
        .push_task_for_test(pending);

    app.update();
    assert!(app.world().resource::<InFlightPredictions>().in_flight());
    // Dropping the app cancels the still-pending task.
}

/// End-to-end scenario: params (30 °C, 10 days, Sewage), service returns a
/// CRITICAL estimate of 42 ppm → highest tier, curve ends at (10, 42.0).
#[test]
fn test_scenario_critical_prediction() {
    let mut app = test_app();
    push_outcome(&mut app, Ok(critical_result()));
    run_until_settled(&mut app);

    let world = app.world();
    let params = world.resource::<SimulationParameters>();
    assert_eq!(params.temperature(), 30);
    assert_eq!(params.days_stagnant(), 10);

    let slot = world.resource::<PredictionSlot>();
    let result = slot.0.as_ref().unwrap();
    assert_eq!(RiskTier::from_label(&result.risk_level), RiskTier::Critical);

    let curve = synthesize(params.days_stagnant(), slot.0.as_ref());
    let last = curve.last().unwrap();
    assert_eq!(last.day, 10);
    assert!((last.ppm - 42.0).abs() < f64::EPSILON);
}

/// End-to-end scenario: the transport fails → the slot stays absent, a
/// notice is shown, and the placeholder curve is unchanged.
#[test]
fn test_scenario_transport_failure() {
    let mut app = test_app();
    let curve_before = synthesize(10, None);

    push_outcome(
        &mut app,
        Err(PredictError::ServiceUnavailable("connect refused".to_string())),
    );
    run_until_settled(&mut app);

    let world = app.world();
    assert!(world.resource::<PredictionSlot>().0.is_none());
    assert!(world.resource::<ServiceNotice>().0.is_some());

    let curve_after = synthesize(10, world.resource::<PredictionSlot>().0.as_ref());
    assert_eq!(curve_before, curve_after);
}

/// Full dispatch path against a closed local port: the real HTTP call is
/// made, fails fast, and surfaces as the uniform service notice.
#[test]
fn test_dispatch_against_unreachable_endpoint() {
    let mut app = test_app();
    app.insert_resource(PredictorEndpoint(
        "http://127.0.0.1:9/predict".to_string(),
    ));

    app.world_mut().send_event(RunPrediction);
    run_until_settled(&mut app);

    let world = app.world();
    assert_eq!(world.resource::<InFlightPredictions>().issued(), 1);
    assert!(world.resource::<PredictionSlot>().0.is_none());
    assert_eq!(
        world.resource::<ServiceNotice>().0.as_deref(),
        Some(SERVICE_NOTICE_TEXT)
    );
}
