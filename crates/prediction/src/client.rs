//! Prediction service client (GAS-006).
//!
//! Dispatches one HTTP call per [`RunPrediction`] event on the async compute
//! pool and polls in-flight calls every frame, the same spawn/poll pattern
//! the rest of the app uses for any off-thread work. Every dispatched call
//! carries a monotonically increasing sequence number; at poll time a
//! completion is applied only if its number is still the latest issued, so
//! a slow early response can never overwrite a newer one.
//!
//! Failures (transport error, non-2xx status, malformed body) collapse into
//! a single [`PredictError::ServiceUnavailable`] kind: the result slot is
//! left untouched, a dismissible notice is raised, and the detail goes to
//! the log.

use std::time::Duration;

use bevy::prelude::*;
use bevy::tasks::{block_on, AsyncComputeTaskPool, Task};
use thiserror::Error;

use crate::params::SimulationParameters;
use crate::wire::{PredictRequest, PredictionResult};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Production endpoint used when no override is configured.
pub const DEFAULT_ENDPOINT: &str = "https://bio-kinetic-gas-predictor.onrender.com/predict";

/// Environment variable that overrides the prediction endpoint.
pub const ENDPOINT_ENV_VAR: &str = "BIOKINETIC_PREDICT_URL";

/// TCP connect budget for one call.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Whole-call budget. Expiry is reported like any other transport failure,
/// so a hung service cannot leave the client waiting forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Notice text shown when a call fails. The underlying error detail goes to
/// the log, not the notice; the user-facing message is uniform for every
/// failure kind.
pub const SERVICE_NOTICE_TEXT: &str = "Failed to connect to backend. Is the Render server awake?";

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// The sole client-side error kind: the service could not produce a usable
/// response.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("prediction service unavailable: {0}")]
    ServiceUnavailable(String),
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// Where prediction requests are POSTed. Resolved once at startup.
#[derive(Resource, Debug, Clone)]
pub struct PredictorEndpoint(pub String);

impl PredictorEndpoint {
    /// Resolve the endpoint from [`ENDPOINT_ENV_VAR`], falling back to the
    /// production default.
    pub fn from_env() -> Self {
        match std::env::var(ENDPOINT_ENV_VAR) {
            Ok(url) if !url.is_empty() => Self(url),
            _ => Self(DEFAULT_ENDPOINT.to_string()),
        }
    }
}

impl Default for PredictorEndpoint {
    fn default() -> Self {
        Self::from_env()
    }
}

/// The single result slot.
///
/// `None` before the first successful call. Replaced wholesale on success
/// (no field-level merging), untouched on failure. Never persisted.
#[derive(Resource, Debug, Default)]
pub struct PredictionSlot(pub Option<PredictionResult>);

/// User-visible failure notice. `Some` opens a dismissible window; the UI
/// clears it back to `None` when the user dismisses it.
#[derive(Resource, Debug, Default)]
pub struct ServiceNotice(pub Option<String>);

/// Fired by the UI when the user triggers a prediction run.
#[derive(Event, Debug, Default)]
pub struct RunPrediction;

/// In-flight call table with monotonic sequence fencing.
///
/// Each dispatched call records the sequence number it was issued under.
/// A completion is applied only if its number still equals `issued`;
/// anything older was superseded by a later trigger and is discarded,
/// success and failure alike.
#[derive(Resource, Default)]
pub struct InFlightPredictions {
    /// Sequence number of the most recently dispatched call.
    issued: u64,
    tasks: Vec<PendingCall>,
}

struct PendingCall {
    seq: u64,
    task: Task<Result<PredictionResult, PredictError>>,
}

impl InFlightPredictions {
    /// Whether any call is outstanding. The UI uses this to gate the run
    /// button; the gate is advisory, not enforced by dispatch.
    pub fn in_flight(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Sequence number of the most recently dispatched call.
    pub fn issued(&self) -> u64 {
        self.issued
    }

    #[cfg(test)]
    pub(crate) fn push_task_for_test(
        &mut self,
        task: Task<Result<PredictionResult, PredictError>>,
    ) -> u64 {
        self.issued += 1;
        let seq = self.issued;
        self.tasks.push(PendingCall { seq, task });
        seq
    }

    /// Enqueue a pre-resolved outcome as if a call had been dispatched.
    #[cfg(test)]
    pub(crate) fn push_outcome_for_test(
        &mut self,
        outcome: Result<PredictionResult, PredictError>,
    ) -> u64 {
        let task = AsyncComputeTaskPool::get().spawn(async move { outcome });
        self.push_task_for_test(task)
    }
}

// ---------------------------------------------------------------------------
// Blocking call
// ---------------------------------------------------------------------------

/// Perform one blocking POST and parse the response body.
///
/// Runs inside an async-pool task so the UI thread never waits on it. No
/// retries, no caching: exactly one outbound call per invocation.
pub fn request_prediction(
    endpoint: &str,
    request: &PredictRequest,
) -> Result<PredictionResult, PredictError> {
    let client = reqwest::blocking::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| PredictError::ServiceUnavailable(e.to_string()))?;

    let response = client
        .post(endpoint)
        .json(request)
        .send()
        .map_err(|e| PredictError::ServiceUnavailable(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(PredictError::ServiceUnavailable(format!(
            "service returned {status}"
        )));
    }

    response
        .json::<PredictionResult>()
        .map_err(|e| PredictError::ServiceUnavailable(format!("malformed response body: {e}")))
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Spawn one async call per pending [`RunPrediction`] event, snapshotting
/// the current parameters into the request body.
pub fn dispatch_predictions(
    mut events: EventReader<RunPrediction>,
    params: Res<SimulationParameters>,
    endpoint: Res<PredictorEndpoint>,
    mut in_flight: ResMut<InFlightPredictions>,
) {
    let pool = AsyncComputeTaskPool::get();
    for _run in events.read() {
        let request = PredictRequest::from_params(&params);
        let url = endpoint.0.clone();
        in_flight.issued += 1;
        let seq = in_flight.issued;
        info!("dispatching prediction #{seq}: {request:?}");
        let task = pool.spawn(async move { request_prediction(&url, &request) });
        in_flight.tasks.push(PendingCall { seq, task });
    }
}

/// Poll in-flight calls and apply the completed ones.
pub fn collect_predictions(
    mut in_flight: ResMut<InFlightPredictions>,
    mut slot: ResMut<PredictionSlot>,
    mut notice: ResMut<ServiceNotice>,
) {
    let latest = in_flight.issued;
    let mut i = 0;
    while i < in_flight.tasks.len() {
        match block_on(futures_lite::future::poll_once(
            &mut in_flight.tasks[i].task,
        )) {
            Some(outcome) => {
                let call = in_flight.tasks.swap_remove(i);
                apply_completion(call.seq, latest, outcome, &mut slot, &mut notice);
            }
            None => i += 1,
        }
    }
}

/// Apply one completed call under the fencing rule.
///
/// Stale completions (sequence number below the latest issued) are
/// discarded without touching the slot or the notice; a notice for a call
/// the user has already superseded would only mislead.
fn apply_completion(
    seq: u64,
    latest: u64,
    outcome: Result<PredictionResult, PredictError>,
    slot: &mut PredictionSlot,
    notice: &mut ServiceNotice,
) {
    if seq != latest {
        info!("discarding stale prediction #{seq} (latest is #{latest})");
        return;
    }
    match outcome {
        Ok(result) => {
            info!(
                "prediction #{seq} applied: {} ppm, risk {:?}",
                result.predicted_ppm, result.risk_level
            );
            slot.0 = Some(result);
        }
        Err(err) => {
            warn!("prediction #{seq} failed: {err}");
            notice.0 = Some(SERVICE_NOTICE_TEXT.to_string());
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
